use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("Failed to list pods in namespace {namespace:?}: {source}")]
    ListPods {
        namespace: String,
        source: kube::Error,
    },
    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
