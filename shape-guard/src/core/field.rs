//! Field specifications.

use super::message::Messages;
use super::preprocess::Preprocess;
use crate::checkers::Checker;
use serde_json::Value;

/// One declared field of a schema.
///
/// A field wraps a checker with presence rules and a preprocessing pipeline.
/// Defaults fill in absent values, so a field is either optional or
/// defaulted, never both; the schema builder rejects the combination.
///
/// # Examples
///
/// ```rust
/// use shape_guard::checkers;
/// use shape_guard::core::{FieldSpec, Preprocess};
///
/// let middle_names = FieldSpec::new("middleNames", checkers::array(checkers::string()).non_empty())
///     .preprocess(Preprocess::SplitWhitespace)
///     .nullable();
/// assert!(middle_names.is_nullable());
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub(crate) name: String,
    pub(crate) preprocess: Vec<Preprocess>,
    pub(crate) checker: Checker,
    pub(crate) optional: bool,
    pub(crate) nullable: bool,
    pub(crate) default: Option<Value>,
    pub(crate) messages: Messages,
}

impl FieldSpec {
    /// Creates a required, non-nullable field.
    pub fn new(name: impl Into<String>, checker: impl Into<Checker>) -> Self {
        Self {
            name: name.into(),
            preprocess: Vec::new(),
            checker: checker.into(),
            optional: false,
            nullable: false,
            default: None,
            messages: Messages::default(),
        }
    }

    /// Allows the field to be absent.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Accepts an explicit `null` without running the checker.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Uses `value` when the field is absent.
    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Appends a preprocessing step.
    pub fn preprocess(mut self, step: Preprocess) -> Self {
        self.preprocess.push(step);
        self
    }

    /// Sets field-level messages. Entries here win over the checker's own
    /// table for issues at this field's path.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn checker(&self) -> &Checker {
        &self.checker
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn preprocess_steps(&self) -> &[Preprocess] {
        &self.preprocess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{boolean, string, Check};
    use serde_json::json;

    #[test]
    fn test_field_defaults() {
        let field = FieldSpec::new("city", string());
        assert_eq!(field.name(), "city");
        assert!(!field.is_optional());
        assert!(!field.is_nullable());
        assert!(field.default_value().is_none());
        assert!(field.preprocess_steps().is_empty());
        assert_eq!(field.checker().kind(), "string");
    }

    #[test]
    fn test_builder_methods() {
        let field = FieldSpec::new("newsletter", boolean())
            .default(json!(false))
            .preprocess(Preprocess::Trim)
            .preprocess(Preprocess::SplitWhitespace);
        assert_eq!(field.default_value(), Some(&json!(false)));
        assert_eq!(field.preprocess_steps().len(), 2);
    }
}
