use k8s_openapi::api::core::v1::{Container, Pod};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube_quantity::ParsedQuantity;

use super::QuantityError;

const RESTART_POLICY_ALWAYS: &str = "Always";

// Bound for the f64 estimate so the exact correction below stays inside i64.
const MAX_QUANTITY_VALUE: f64 = 9.0e18;

/// Parses a Kubernetes quantity string (`"2"`, `"500m"`, `"1Gi"`, ...).
pub fn parse_quantity(quantity: &str) -> Result<ParsedQuantity, QuantityError> {
    ParsedQuantity::try_from(quantity).map_err(|e| QuantityError::Invalid {
        quantity: quantity.to_string(),
        reason: e.to_string(),
    })
}

fn integer(value: i64) -> Result<ParsedQuantity, QuantityError> {
    parse_quantity(&value.to_string())
}

/// Smallest integer not below `quantity`, in base units.
pub fn quantity_value(quantity: &ParsedQuantity) -> Result<i64, QuantityError> {
    let out_of_range = || QuantityError::OutOfRange(format!("{quantity:?}"));
    let estimate = quantity
        .to_bytes_f64()
        .filter(|estimate| estimate.is_finite() && estimate.abs() < MAX_QUANTITY_VALUE)
        .ok_or_else(out_of_range)?;

    // The estimate can be off in the last units; settle them with exact comparisons.
    let mut value = estimate.ceil() as i64;
    while integer(value)? < *quantity {
        value += 1;
    }
    while integer(value - 1)? >= *quantity {
        value -= 1;
    }
    Ok(value)
}

fn container_request(
    container: &Container,
    resource: &str,
) -> Result<Option<ParsedQuantity>, QuantityError> {
    container
        .resources
        .as_ref()
        .and_then(|resources| resources.requests.as_ref())
        .and_then(|requests| requests.get(resource))
        .map(|Quantity(q)| parse_quantity(q))
        .transpose()
}

/// Effective request of `resource` for the whole pod.
///
/// Regular containers are summed. Each init container runs alone next to the
/// sidecars started before it, so the pod needs at least the largest of those
/// peaks. Restartable init containers (sidecars) keep running and add to the
/// sum. Pod overhead is added on top.
pub fn pod_request(pod: &Pod, resource: &str) -> Result<ParsedQuantity, QuantityError> {
    let mut total = integer(0)?;
    let Some(spec) = pod.spec.as_ref() else {
        return Ok(total);
    };

    for container in &spec.containers {
        if let Some(request) = container_request(container, resource)? {
            total += request;
        }
    }

    let mut sidecars = integer(0)?;
    let mut init_peak = integer(0)?;
    for container in spec.init_containers.iter().flatten() {
        let request = match container_request(container, resource)? {
            Some(request) => request,
            None => integer(0)?,
        };
        let peak = if container.restart_policy.as_deref() == Some(RESTART_POLICY_ALWAYS) {
            total += request.clone();
            sidecars += request;
            sidecars.clone()
        } else {
            request + sidecars.clone()
        };
        if peak > init_peak {
            init_peak = peak;
        }
    }
    if init_peak > total {
        total = init_peak;
    }

    if let Some(Quantity(overhead)) = spec
        .overhead
        .as_ref()
        .and_then(|overhead| overhead.get(resource))
    {
        total += parse_quantity(overhead)?;
    }
    Ok(total)
}

/// [`pod_request`] rounded up to an integer.
pub fn pod_request_value(pod: &Pod, resource: &str) -> Result<i64, QuantityError> {
    quantity_value(&pod_request(pod, resource)?)
}
