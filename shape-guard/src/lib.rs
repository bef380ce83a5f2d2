//! # shape-guard - Declarative Object Validation for Rust
//!
//! shape-guard validates untyped input, such as a parsed JSON document,
//! against a declared object schema. Validation returns either the
//! normalized value or every problem it found, each as a structured
//! [`Issue`](core::Issue) with a path, a code and a message.
//!
//! ## Quick Start
//!
//! ```rust
//! use shape_guard::prelude::*;
//! use shape_guard::checkers::{self, PatternPart};
//! use shape_guard::core::{Messages, Preprocess};
//! use serde_json::json;
//!
//! # fn main() -> Result<()> {
//! let schema = Schema::builder("contact")
//!     .strict()
//!     .field(
//!         FieldSpec::new("firstName", checkers::string().non_empty())
//!             .messages(Messages::new().missing("firstName is missing")),
//!     )
//!     .field(
//!         FieldSpec::new("middleNames", checkers::array(checkers::string()).non_empty())
//!             .preprocess(Preprocess::SplitWhitespace)
//!             .nullable(),
//!     )
//!     .field(FieldSpec::new(
//!         "street",
//!         checkers::pattern(vec![
//!             PatternPart::slot(checkers::number().positive()),
//!             PatternPart::literal(" "),
//!             PatternPart::slot(checkers::string()),
//!         ])?,
//!     ))
//!     .field(FieldSpec::new(
//!         "checkbox",
//!         checkers::union(vec![
//!             checkers::boolean().into(),
//!             checkers::string_bool().truthy(&["true", "checked"]).into(),
//!         ]),
//!     ))
//!     .build()?;
//!
//! let result = schema.validate(&json!({
//!     "firstName": "Ada",
//!     "middleNames": "Augusta King",
//!     "street": "10 Main",
//!     "checkbox": "checked"
//! }));
//!
//! match &result {
//!     ValidationResult::Success { value, .. } => {
//!         assert_eq!(value["street"], json!([10, "Main"]));
//!         assert_eq!(value["checkbox"], json!(true));
//!     }
//!     ValidationResult::Failure { issues, .. } => {
//!         eprintln!("{}", issues.to_text());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Key Features
//!
//! - **Checkers**: strings, numbers, booleans, string-bools, arrays, email and
//!   E.164 formats, template-style patterns, unions and nested objects
//! - **Presence rules**: optional, nullable and defaulted fields
//! - **Preprocessing**: split, trim or custom transforms before checking
//! - **Refinements**: guarded cross-field rules that run after structural
//!   validation succeeds
//! - **Reporting**: flat issue lists, hierarchical error trees, plain text and
//!   JSON output
//! - **Observability**: structured logging with the `tracing` crate
//!
//! ## Architecture
//!
//! - **`checkers`**: per-value type checkers
//! - **`core`**: issues, messages, field specs, refinements and schemas
//! - **`report`**: error trees and text rendering
//! - **`formatters`**: result formatting utilities
//! - **`logging`**: log configuration and subscriber setup
//! - **`error`**: schema compile errors

pub mod checkers;
pub mod core;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod prelude;
pub mod report;
