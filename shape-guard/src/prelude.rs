//! Prelude for commonly used types and traits in shape-guard.

pub use crate::checkers::{Check, Checker};
pub use crate::core::{FieldSpec, Issue, IssueCode, Schema, ValidationResult};
pub use crate::error::{GuardError, Result};
pub use crate::formatters::{FormatterConfig, ResultFormatter};
pub use crate::logging::LogConfig;
