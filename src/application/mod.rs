pub mod dto;
pub mod event_filter_service;
pub mod use_case_container;
pub mod use_cases;

pub use event_filter_service::EventFilterService;
pub use use_case_container::UseCaseContainer;
