use std::fmt;

use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::chrono::TimeDelta;
use shared::pod::{is_scheduled, scheduling_duration};

/// Scheduling latency aggregates over one snapshot of pods.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingStats {
    pub total: usize,
    pub scheduled: usize,
    pub unscheduled: usize,
    /// Longest creation-to-scheduled time, `None` if nothing was measured.
    pub max: Option<TimeDelta>,
    /// Mean creation-to-scheduled time over the measured pods.
    pub avg: TimeDelta,
}

impl SchedulingStats {
    pub fn from_pods<'a>(pods: impl IntoIterator<Item = &'a Pod>) -> Self {
        let mut total = 0;
        let mut scheduled = 0;
        let mut measured: i32 = 0;
        let mut sum = TimeDelta::zero();
        let mut max: Option<TimeDelta> = None;

        for pod in pods {
            total += 1;
            if !is_scheduled(pod) {
                continue;
            }
            scheduled += 1;
            // scheduled pods without timestamps count but are not measured
            if let Some(duration) = scheduling_duration(pod) {
                measured += 1;
                sum = sum + duration;
                max = Some(max.map_or(duration, |m| m.max(duration)));
            }
        }

        let avg = if measured > 0 {
            sum / measured
        } else {
            TimeDelta::zero()
        };

        Self {
            total,
            scheduled,
            unscheduled: total - scheduled,
            max,
            avg,
        }
    }
}

impl fmt::Display for SchedulingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "All: {}, Scheduled: {}, Unscheduled: {}, Max: {}, Avg: {}",
            self.total,
            self.scheduled,
            self.unscheduled,
            format_duration(self.max.unwrap_or_else(TimeDelta::zero)),
            format_duration(self.avg)
        )
    }
}

/// `1.5s`, `250ms`, `-2s` for negative deltas caused by clock skew.
pub fn format_duration(delta: TimeDelta) -> String {
    match delta.to_std() {
        Ok(duration) => format!("{duration:?}"),
        Err(_) => format!("-{:?}", (-delta).to_std().unwrap_or_default()),
    }
}
