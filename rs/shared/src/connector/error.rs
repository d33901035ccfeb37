use kube::config::{InferConfigError, KubeconfigError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("Kubeconfig error: {0}")]
    Kubeconfig(#[from] KubeconfigError),
    #[error("Config inference error: {0}")]
    Config(#[from] InferConfigError),
    #[error("Invalid master URL {master:?}: {reason}")]
    InvalidMaster { master: String, reason: String },
    #[error("Invalid rate limit: {0}")]
    InvalidRateLimit(String),
    #[error("Kubernetes client error: {0}")]
    Kube(#[from] kube::Error),
}
