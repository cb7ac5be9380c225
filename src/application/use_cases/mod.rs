pub mod event_filter_operations;
pub mod log_operations;

pub use event_filter_operations::*;
pub use log_operations::*;
