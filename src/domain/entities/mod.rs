pub mod channel;
pub mod config;
pub mod filter_state;
pub mod log;

pub use channel::{ChannelStats, EnqueueOutcome};
pub use config::AppConfig;
pub use filter_state::FilterState;
pub use log::{Log, LogKind};
