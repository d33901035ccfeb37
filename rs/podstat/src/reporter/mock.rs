use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use k8s_openapi::api::core::v1::Pod;
use kube::core::ErrorResponse;

use super::{PodSource, ReporterError};

/// Serves fixed pods per namespace and records which namespaces were listed.
pub struct MockPodSource {
    pods: HashMap<String, Vec<Pod>>,
    failing: HashSet<String>,
    listed: Arc<Mutex<Vec<String>>>,
}

impl MockPodSource {
    pub fn new(listed: Arc<Mutex<Vec<String>>>) -> Self {
        MockPodSource {
            pods: HashMap::new(),
            failing: HashSet::new(),
            listed,
        }
    }

    pub fn with_pods(mut self, namespace: &str, pods: Vec<Pod>) -> Self {
        self.pods.insert(namespace.to_owned(), pods);
        self
    }

    pub fn failing(mut self, namespace: &str) -> Self {
        self.failing.insert(namespace.to_owned());
        self
    }
}

impl PodSource for MockPodSource {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>, ReporterError> {
        self.listed.lock().unwrap().push(namespace.to_owned());
        if self.failing.contains(namespace) {
            return Err(ReporterError::ListPods {
                namespace: namespace.to_owned(),
                source: kube::Error::Api(ErrorResponse {
                    status: "Failure".to_string(),
                    message: "pods is forbidden".to_string(),
                    reason: "Forbidden".to_string(),
                    code: 403,
                }),
            });
        }
        Ok(self.pods.get(namespace).cloned().unwrap_or_default())
    }
}

/// In-memory log writer, handed to `shared::logging::log_subscriber`.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
