//! Validation results, metrics and sealed issue lists.

use super::issue::Issue;
use crate::formatters::ResultFormatter;
use crate::prelude::*;
use crate::report::{self, ErrorTree};
use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::ops::Deref;
use std::sync::Arc;

/// A sealed, immutable list of issues.
///
/// There is no way to push onto an `Issues` value. [`Issues::with_appended`]
/// returns a new list and leaves the original untouched, so a result handed
/// to one caller can never change under another.
///
/// # Examples
///
/// ```rust
/// use shape_guard::core::Issues;
///
/// let empty = Issues::default();
/// assert!(empty.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issues(Arc<[Issue]>);

impl Default for Issues {
    fn default() -> Self {
        Issues::new(Vec::new())
    }
}

impl Issues {
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        Self(issues.into())
    }

    /// Returns a new list with `issue` appended. `self` is unchanged.
    pub fn with_appended(&self, issue: Issue) -> Issues {
        let mut issues = self.to_vec();
        issues.push(issue);
        Issues::new(issues)
    }

    /// Returns the issues as a slice.
    pub fn as_slice(&self) -> &[Issue] {
        &self.0
    }

    /// Builds the hierarchical error tree.
    pub fn to_tree(&self) -> ErrorTree {
        ErrorTree::from_issues(&self.0)
    }

    /// Renders one line per issue.
    pub fn to_text(&self) -> String {
        report::to_text(&self.0)
    }
}

impl Deref for Issues {
    type Target = [Issue];

    fn deref(&self) -> &[Issue] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Issues {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Counters collected during one `validate` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationMetrics {
    /// Declared fields evaluated
    pub fields_checked: usize,
    /// Fields that produced a normalized value
    pub fields_passed: usize,
    /// Fields that produced at least one issue
    pub fields_failed: usize,
    /// Absent optional fields
    pub fields_skipped: usize,
    /// Refinements whose guard returned true
    pub refinements_evaluated: usize,
    /// Refinements whose guard returned false, or that never ran
    pub refinements_skipped: usize,
    /// Refinements that emitted an issue
    pub refinements_failed: usize,
    /// Input keys not declared by the schema
    pub unknown_keys: usize,
}

impl ValidationMetrics {
    /// Creates zeroed metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the percentage of checked fields that passed.
    pub fn success_rate(&self) -> f64 {
        if self.fields_checked == 0 {
            100.0
        } else {
            (self.fields_passed as f64 / self.fields_checked as f64) * 100.0
        }
    }
}

/// The outcome of validating one input.
///
/// # Examples
///
/// ```rust
/// use shape_guard::checkers;
/// use shape_guard::core::{FieldSpec, Schema, ValidationResult};
/// use serde_json::json;
///
/// let schema = Schema::builder("person")
///     .field(FieldSpec::new("name", checkers::string().non_empty()))
///     .build()?;
///
/// match schema.validate(&json!({ "name": "" })) {
///     ValidationResult::Success { value, .. } => println!("valid: {value}"),
///     ValidationResult::Failure { issues, .. } => {
///         for issue in &issues {
///             println!("{}", issue.message);
///         }
///     }
/// }
/// # Ok::<(), shape_guard::error::GuardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The input conforms; `value` is the normalized object.
    Success {
        value: Value,
        metrics: ValidationMetrics,
    },
    /// The input does not conform.
    Failure {
        issues: Issues,
        metrics: ValidationMetrics,
    },
}

impl ValidationResult {
    pub(crate) fn success(value: Value, metrics: ValidationMetrics) -> Self {
        ValidationResult::Success { value, metrics }
    }

    pub(crate) fn failure(issues: Vec<Issue>, metrics: ValidationMetrics) -> Self {
        ValidationResult::Failure {
            issues: Issues::new(issues),
            metrics,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ValidationResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the normalized value on success.
    pub fn value(&self) -> Option<&Value> {
        match self {
            ValidationResult::Success { value, .. } => Some(value),
            ValidationResult::Failure { .. } => None,
        }
    }

    /// Returns the issues; empty on success.
    pub fn issues(&self) -> &[Issue] {
        match self {
            ValidationResult::Success { .. } => &[],
            ValidationResult::Failure { issues, .. } => issues.as_slice(),
        }
    }

    pub fn metrics(&self) -> &ValidationMetrics {
        match self {
            ValidationResult::Success { metrics, .. } | ValidationResult::Failure { metrics, .. } => {
                metrics
            }
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> std::result::Result<Value, Issues> {
        match self {
            ValidationResult::Success { value, .. } => Ok(value),
            ValidationResult::Failure { issues, .. } => Err(issues),
        }
    }

    /// Deserializes the normalized value into a typed struct.
    ///
    /// Returns `Ok(None)` for a failed validation.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.value()
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(GuardError::from)
    }

    /// Builds the error tree; empty on success.
    pub fn to_tree(&self) -> ErrorTree {
        ErrorTree::from_issues(self.issues())
    }

    /// Renders the issues as text; empty on success.
    pub fn to_text(&self) -> String {
        report::to_text(self.issues())
    }

    /// Serializes the result to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Formats the result with the given formatter.
    pub fn format_with<F: ResultFormatter>(&self, formatter: &F) -> Result<String> {
        formatter.format(self)
    }
}
