use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    /// The filtering mechanism could not be brought up. The service stays
    /// unstarted so `start` can be retried.
    #[error("Failed to initialize event filtering: {0:#}")]
    InitializationFailure(#[source] anyhow::Error),
}
