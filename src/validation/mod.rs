//! Validation Engine
//!
//! Structural and field-level validation, separated from parsing and CLI
//! concerns.

pub mod engine;
pub mod sections;

pub use engine::{ValidationError, ValidationResult, validate_lines, validate_path};
