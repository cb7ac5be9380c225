pub mod event_filter;
pub mod in_memory_channel;

pub use event_filter::ChannelFilterMechanism;
pub use in_memory_channel::InMemoryLogChannel;
