pub mod filter_mechanism;
pub mod log_channel;

pub use filter_mechanism::FilterMechanism;
pub use log_channel::{ChannelDelegate, LogChannel};
