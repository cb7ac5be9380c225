pub mod channel;
pub mod config_repository;

pub use config_repository::ConfigRepository;
