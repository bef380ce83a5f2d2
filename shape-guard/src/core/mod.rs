//! Core validation types for shape-guard.
//!
//! This module provides the issue model, message resolution, field specs,
//! refinements, and the compiled [`Schema`] that ties them together.
//!
//! ## Overview
//!
//! - **[`Schema`]**: an immutable, reusable object schema
//! - **[`FieldSpec`]**: one declared field wrapping a [`Checker`](crate::checkers::Checker)
//! - **[`Preprocess`]**: transforms applied before a field's checker runs
//! - **[`Refinement`]**: guarded cross-field rules
//! - **[`Issue`]**: one validation failure with its path and code
//! - **[`ValidationResult`]**: the outcome of one `validate` call
//!
//! ## Architecture
//!
//! ```text
//! Schema (unknown keys: strip | passthrough | reject)
//!     ├── FieldSpec "firstName"
//!     │   ├── Preprocess steps
//!     │   └── Checker
//!     ├── FieldSpec "middleNames"
//!     │   └── ...
//!     └── Refinement (guard, predicate, path)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use shape_guard::checkers;
//! use shape_guard::core::{FieldSpec, Preprocess, Schema, ValidationResult};
//! use serde_json::json;
//!
//! let schema = Schema::builder("contact")
//!     .strict()
//!     .field(FieldSpec::new("lastName", checkers::string().non_empty()))
//!     .field(
//!         FieldSpec::new("middleNames", checkers::array(checkers::string()).non_empty())
//!             .preprocess(Preprocess::SplitWhitespace)
//!             .nullable(),
//!     )
//!     .field(FieldSpec::new("email", checkers::email()))
//!     .build()?;
//!
//! let result = schema.validate(&json!({
//!     "lastName": "Lovelace",
//!     "middleNames": "Augusta King",
//!     "email": "ada@example.com"
//! }));
//!
//! match result {
//!     ValidationResult::Success { value, .. } => {
//!         assert_eq!(value["middleNames"], json!(["Augusta", "King"]));
//!     }
//!     ValidationResult::Failure { issues, .. } => {
//!         panic!("unexpected issues:\n{}", issues.to_text());
//!     }
//! }
//! # Ok::<(), shape_guard::error::GuardError>(())
//! ```

mod context;
mod field;
mod issue;
mod message;
mod preprocess;
mod refinement;
mod result;
mod schema;

pub use context::CheckContext;
pub use field::FieldSpec;
pub use issue::{type_name, Issue, IssueCode, PathSegment};
pub use message::{default_message, Message, MessageHook, Messages};
pub use preprocess::Preprocess;
pub use refinement::{Refinement, RulePredicate};
pub use result::{Issues, ValidationMetrics, ValidationResult};
pub use schema::{Schema, SchemaBuilder, UnknownKeys};
