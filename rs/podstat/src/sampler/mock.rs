use std::future::Future;
use std::sync::Arc;

use k8s_openapi::api::core::v1::Pod;

use super::{PodCache, SamplerError};

pub struct MockPodCache {
    pods: Vec<Arc<Pod>>,
    ready: bool,
    stopped: bool,
}

impl MockPodCache {
    pub fn new(pods: Vec<Pod>) -> Self {
        MockPodCache {
            pods: pods.into_iter().map(Arc::new).collect(),
            ready: true,
            stopped: false,
        }
    }

    /// Never completes its initial sync.
    pub fn never_ready() -> Self {
        MockPodCache {
            ready: false,
            ..Self::new(vec![])
        }
    }

    /// Syncs, then fails every snapshot.
    pub fn stopped() -> Self {
        MockPodCache {
            stopped: true,
            ..Self::new(vec![])
        }
    }
}

impl PodCache for MockPodCache {
    fn wait_until_ready(&self) -> impl Future<Output = Result<(), SamplerError>> + Send {
        let ready = self.ready;
        async move {
            if !ready {
                std::future::pending::<()>().await;
            }
            Ok(())
        }
    }

    fn snapshot(&self) -> Result<Vec<Arc<Pod>>, SamplerError> {
        if self.stopped {
            return Err(SamplerError::CacheStopped);
        }
        Ok(self.pods.clone())
    }
}
