mod connector;
mod error;
#[cfg(test)]
mod test;

pub use connector::{build_client, connect, load_config, ConnectionOptions, RequestRateLimit};
pub use error::ConnectorError;
