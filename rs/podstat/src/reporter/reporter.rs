use std::fmt;
use std::io::Write;

use k8s_openapi::api::core::v1::Pod;
use shared::pod::{is_deleted, node_name, pod_ip, pod_request_value, PodPhase};
use tracing::{debug, warn};

use crate::constant::REPORT_HEADER;

use super::{PodSource, ReporterError};

/// An empty selection means all namespaces, which the API spells `""`.
pub fn normalize_namespaces(namespaces: Vec<String>) -> Vec<String> {
    if namespaces.is_empty() {
        vec![String::new()]
    } else {
        namespaces
    }
}

/// Bound to a node, not finished and not being deleted.
pub fn is_running_on_node(pod: &Pod) -> bool {
    node_name(pod).is_some() && !PodPhase::of(pod).is_terminal() && !is_deleted(pod)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub namespace: String,
    pub pod_ip: String,
    pub node_name: String,
    pub phase: PodPhase,
    pub count: i64,
}

impl ReportRow {
    pub fn from_pod(pod: &Pod, resource_name: &str) -> Self {
        let name = pod.metadata.name.clone().unwrap_or_default();
        let namespace = pod.metadata.namespace.clone().unwrap_or_default();
        let count = pod_request_value(pod, resource_name).unwrap_or_else(|e| {
            warn!("Ignoring {resource_name} request of pod {namespace}/{name}: {e}");
            0
        });

        Self {
            pod_ip: pod_ip(pod).unwrap_or_default().to_owned(),
            node_name: node_name(pod).unwrap_or_default().to_owned(),
            phase: PodPhase::of(pod),
            name,
            namespace,
            count,
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name, self.namespace, self.pod_ip, self.node_name, self.phase, self.count
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of rows written.
    pub pods: usize,
    /// Sum of the reported counts.
    pub total: i64,
}

pub struct Reporter<S> {
    source: S,
    resource_name: String,
}

impl<S: PodSource> Reporter<S> {
    pub fn new(source: S, resource_name: impl Into<String>) -> Self {
        Self {
            source,
            resource_name: resource_name.into(),
        }
    }

    /// Writes the header and one row per running pod, namespace by namespace.
    /// Stops at the first listing error; rows already written are kept.
    pub async fn run<W: Write>(
        &self,
        namespaces: &[String],
        out: &mut W,
    ) -> Result<ReportSummary, ReporterError> {
        let mut summary = ReportSummary::default();
        writeln!(out, "{REPORT_HEADER}")?;

        for namespace in namespaces {
            let pods = self.source.list_pods(namespace).await?;
            for pod in pods.iter().filter(|pod| is_running_on_node(pod)) {
                let row = ReportRow::from_pod(pod, &self.resource_name);
                writeln!(out, "{row}")?;
                summary.pods += 1;
                summary.total += row.count;
            }
            debug!("Reported namespace {namespace:?}, {} pods so far", summary.pods);
        }

        out.flush()?;
        Ok(summary)
    }
}
