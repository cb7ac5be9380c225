use anyhow::Result;
use async_trait::async_trait;

/// The subsystem that actually performs event filtering.
#[async_trait]
pub trait FilterMechanism: Send + Sync {
    /// Brings the mechanism up. Implementations must tolerate repeated calls.
    async fn initialize_filtering(&self) -> Result<()>;

    async fn apply_filter_flag(&self, enabled: bool);
}
