pub mod console;
pub mod controller;

pub use controller::EventFilterController;
