//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the grid engine.

mod errors;
mod percentage;
mod scale_range;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use percentage::Percentage;
pub use scale_range::{ScaleRange, MAX_COLUMNS};
