mod error;
mod logging;

pub use error::LoggingSetupError;
pub use logging::{log_subscriber, setup_logging};
