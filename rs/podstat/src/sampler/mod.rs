mod cache;
mod error;
#[cfg(test)]
mod mock;
mod sampler;
mod stats;

pub use cache::{PodCache, ReflectorCache};
pub use error::SamplerError;
pub use sampler::Sampler;
pub use stats::{format_duration, SchedulingStats};
