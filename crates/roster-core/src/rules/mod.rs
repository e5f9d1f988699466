//! Validation rules shared by the prompts and the store

pub mod validation;

pub use validation::{parse_salary, validate_required, validate_salary};
