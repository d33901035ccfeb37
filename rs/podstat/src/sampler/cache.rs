use std::future::Future;
use std::sync::Arc;

use futures::StreamExt;
use k8s_openapi::api::core::v1::Pod;
use kube::runtime::reflector::{self, Store};
use kube::runtime::{watcher, WatchStreamExt};
use kube::{Api, Client, ResourceExt};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::SamplerError;

/// Read-only local view of pods, kept up to date elsewhere.
pub trait PodCache {
    /// Resolves once the initial listing has been stored.
    fn wait_until_ready(&self) -> impl Future<Output = Result<(), SamplerError>> + Send;

    fn snapshot(&self) -> Result<Vec<Arc<Pod>>, SamplerError>;
}

/// Reflector store fed by a background watcher task.
pub struct ReflectorCache {
    store: Store<Pod>,
    driver: JoinHandle<()>,
}

impl ReflectorCache {
    /// Starts watching pods in `namespace`, or all namespaces when empty.
    pub fn start(client: Client, namespace: &str) -> Self {
        let api: Api<Pod> = if namespace.is_empty() {
            Api::all(client)
        } else {
            Api::namespaced(client, namespace)
        };
        let (store, writer) = reflector::store();

        let stream = watcher(api, watcher::Config::default())
            .default_backoff()
            .modify(|pod| pod.managed_fields_mut().clear())
            .reflect(writer);

        // Poll the stream to keep the store up-to-date
        let driver = tokio::spawn(async move {
            stream
                .for_each(|event| async move {
                    match event {
                        Ok(_) => {}
                        Err(e) => warn!("Pod watcher error: {e}"),
                    }
                })
                .await;
            warn!("Pod watcher stream ended");
        });
        debug!("Started pod watcher for namespace {namespace:?}");

        Self { store, driver }
    }
}

impl PodCache for ReflectorCache {
    fn wait_until_ready(&self) -> impl Future<Output = Result<(), SamplerError>> + Send {
        let store = self.store.clone();
        async move {
            store
                .wait_until_ready()
                .await
                .map_err(|_| SamplerError::WriterDropped)
        }
    }

    fn snapshot(&self) -> Result<Vec<Arc<Pod>>, SamplerError> {
        if self.driver.is_finished() {
            return Err(SamplerError::CacheStopped);
        }
        Ok(self.store.state())
    }
}

impl Drop for ReflectorCache {
    fn drop(&mut self) {
        self.driver.abort();
    }
}
