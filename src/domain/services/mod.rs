pub mod validation;

pub use validation::LogValidator;
