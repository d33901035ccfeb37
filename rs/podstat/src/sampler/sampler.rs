use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{PodCache, SamplerError, SchedulingStats};

/// Periodically aggregates scheduling latency over a pod cache.
pub struct Sampler<C> {
    cache: C,
    interval: Duration,
}

impl<C: PodCache> Sampler<C> {
    /// `interval` must be non-zero.
    pub fn new(cache: C, interval: Duration) -> Self {
        Self { cache, interval }
    }

    /// Samples until `shutdown` is cancelled, handing every summary to
    /// `on_summary`. A failed snapshot ends the run with an error.
    pub async fn run<F>(
        &self,
        shutdown: CancellationToken,
        on_summary: F,
    ) -> Result<(), SamplerError>
    where
        F: FnMut(&SchedulingStats),
    {
        info!("Starting scheduling sampler");
        let result = self.sample(shutdown, on_summary).await;
        info!("Stopping scheduling sampler");
        result
    }

    async fn sample<F>(
        &self,
        shutdown: CancellationToken,
        mut on_summary: F,
    ) -> Result<(), SamplerError>
    where
        F: FnMut(&SchedulingStats),
    {
        tokio::select! {
            ready = self.cache.wait_until_ready() => ready?,
            _ = shutdown.cancelled() => return Ok(()),
        }
        debug!("Pod cache synced");

        // first sample one interval after sync
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => return Ok(()),
                _ = ticker.tick() => {
                    let pods = self.cache.snapshot()?;
                    let stats = SchedulingStats::from_pods(pods.iter().map(Arc::as_ref));
                    on_summary(&stats);
                }
            }
        }
    }
}
