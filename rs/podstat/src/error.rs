use shared::{connector::ConnectorError, logging::LoggingSetupError};
use thiserror::Error;

use crate::{reporter::ReporterError, sampler::SamplerError};

#[derive(Error, Debug)]
pub enum PodstatError {
    #[error("Logging setup error: {0}")]
    LoggingSetupError(#[from] LoggingSetupError),
    #[error("Connector error: {0}")]
    ConnectorError(#[from] ConnectorError),
    #[error("Reporter error: {0}")]
    ReporterError(#[from] ReporterError),
    #[error("Sampler error: {0}")]
    SamplerError(#[from] SamplerError),
}
