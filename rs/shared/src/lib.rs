pub mod connector;
pub mod logging;
pub mod pod;
pub mod signal;
