use std::fmt;

use k8s_openapi::api::core::v1::{Pod, PodCondition};
use k8s_openapi::chrono::TimeDelta;

/// Condition type the scheduler sets once a pod is bound to a node.
pub const POD_SCHEDULED: &str = "PodScheduled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl PodPhase {
    pub fn of(pod: &Pod) -> Self {
        pod.status
            .as_ref()
            .and_then(|status| status.phase.as_deref())
            .map(Self::from)
            .unwrap_or(Self::Unknown)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Running => "Running",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Unknown => "Unknown",
        }
    }

    /// Succeeded and Failed are terminal, the pod no longer holds resources.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl From<&str> for PodPhase {
    fn from(phase: &str) -> Self {
        match phase {
            "Pending" => Self::Pending,
            "Running" => Self::Running,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The node the pod is bound to, `None` when unassigned.
pub fn node_name(pod: &Pod) -> Option<&str> {
    pod.spec
        .as_ref()
        .and_then(|spec| spec.node_name.as_deref())
        .filter(|name| !name.is_empty())
}

pub fn pod_ip(pod: &Pod) -> Option<&str> {
    pod.status
        .as_ref()
        .and_then(|status| status.pod_ip.as_deref())
}

pub fn is_deleted(pod: &Pod) -> bool {
    pod.metadata.deletion_timestamp.is_some()
}

pub fn scheduled_condition(pod: &Pod) -> Option<&PodCondition> {
    pod.status
        .as_ref()
        .and_then(|status| status.conditions.as_ref())
        .and_then(|conditions| {
            conditions
                .iter()
                .find(|condition| condition.type_ == POD_SCHEDULED)
        })
}

pub fn is_scheduled(pod: &Pod) -> bool {
    scheduled_condition(pod).is_some_and(|condition| condition.status == "True")
}

/// Time from creation until the `PodScheduled` condition turned true.
/// `None` if the pod is not scheduled or either timestamp is missing.
pub fn scheduling_duration(pod: &Pod) -> Option<TimeDelta> {
    let condition = scheduled_condition(pod).filter(|c| c.status == "True")?;
    let scheduled_at = condition.last_transition_time.as_ref()?;
    let created_at = pod.metadata.creation_timestamp.as_ref()?;
    Some(scheduled_at.0 - created_at.0)
}
