//! Error types for the shape-guard validation library.
//!
//! Validation failures are never errors: they are reported as
//! [`Issue`](crate::core::Issue) values inside a
//! [`ValidationResult`](crate::core::ValidationResult). `GuardError` covers
//! the conditions that make a schema unusable (compile errors) and the few
//! fallible operations around results, such as typed deserialization.

use thiserror::Error;

/// The main error type for the shape-guard library.
#[derive(Error, Debug)]
pub enum GuardError {
    /// Two fields share the same name.
    #[error("Duplicate field '{field}' in schema")]
    DuplicateField { field: String },

    /// A field name is empty.
    #[error("Field names must not be empty")]
    EmptyFieldName,

    /// Field modifiers contradict each other.
    #[error("Conflicting modifiers on field '{field}': {reason}")]
    ConflictingModifiers { field: String, reason: String },

    /// A configured default does not pass its own field.
    #[error("Invalid default for field '{field}': {message}")]
    InvalidDefault { field: String, message: String },

    /// A refinement targets a field the schema does not declare.
    #[error("Refinement path '{path}' does not start with a declared field")]
    UnknownRefinementPath { path: String },

    /// A regular expression failed to compile.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern source
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A pattern slot uses a checker that cannot be decomposed from text.
    #[error("Unsupported pattern slot: {kind} checkers cannot appear in a pattern")]
    UnsupportedPatternSlot { kind: String },

    /// A union has no branches.
    #[error("A union needs at least one branch")]
    EmptyUnion,

    /// Error related to configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing formatted output failed.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Generic internal error for unexpected conditions.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A type alias for `Result<T, GuardError>`.
///
/// # Examples
///
/// ```rust
/// use shape_guard::error::{GuardError, Result};
///
/// fn compile() -> Result<()> {
///     Err(GuardError::EmptyUnion)
/// }
/// assert!(compile().is_err());
/// ```
pub type Result<T> = std::result::Result<T, GuardError>;

impl GuardError {
    /// Creates a conflicting-modifiers error.
    pub fn conflicting(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConflictingModifiers {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid-pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns true if this error was raised while compiling a schema.
    pub fn is_compile_error(&self) -> bool {
        !matches!(
            self,
            GuardError::Serialization(_) | GuardError::Format(_) | GuardError::Internal(_)
        )
    }
}
