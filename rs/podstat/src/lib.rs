pub mod cli;
pub mod constant;
pub mod error;
pub mod reporter;
pub mod sampler;
