use std::future::Future;

use k8s_openapi::api::core::v1::Pod;
use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use super::ReporterError;

/// One-shot pod listing. An empty namespace lists across all namespaces.
pub trait PodSource {
    fn list_pods(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<Pod>, ReporterError>> + Send;
}

impl PodSource for Client {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, ReporterError> {
        let api: Api<Pod> = if namespace.is_empty() {
            Api::all(self.clone())
        } else {
            Api::namespaced(self.clone(), namespace)
        };

        let pods = api
            .list(&ListParams::default())
            .await
            .map_err(|source| ReporterError::ListPods {
                namespace: namespace.to_owned(),
                source,
            })?;
        debug!("Listed {} pods in namespace {namespace:?}", pods.items.len());
        Ok(pods.items)
    }
}
