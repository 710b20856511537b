pub mod error;
pub mod extractors;
pub mod people;
pub mod validation;
