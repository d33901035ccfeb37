use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Pod cache is no longer synchronized, the watcher has stopped")]
    CacheStopped,
    #[error("Pod cache was dropped before the initial sync completed")]
    WriterDropped,
}
