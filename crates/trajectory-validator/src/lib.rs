//! Trajectory Validation
//!
//! Rejects pose samples that cannot yield a defined bearing before any
//! signal derivation takes place.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, ValidationResult, Validator};
