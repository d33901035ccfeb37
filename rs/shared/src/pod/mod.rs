mod error;
mod pod;
mod requests;

pub use error::QuantityError;
pub use pod::{
    is_deleted, is_scheduled, node_name, pod_ip, scheduled_condition, scheduling_duration,
    PodPhase, POD_SCHEDULED,
};
pub use requests::{parse_quantity, pod_request, pod_request_value, quantity_value};
