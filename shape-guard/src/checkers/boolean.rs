//! Boolean and string-bool checkers.

use super::{require, Check, CheckOutcome};
use crate::core::{CheckContext, IssueCode, Messages};
use crate::prelude::*;
use serde_json::Value;

/// Validates native JSON booleans.
#[derive(Debug, Clone, Default)]
pub struct BooleanChecker {
    messages: Messages,
}

impl BooleanChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Check for BooleanChecker {
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome {
        match require(input, ctx, "boolean", &self.messages)? {
            value @ Value::Bool(_) => Ok(value.clone()),
            _ => Err(vec![ctx.issue(
                IssueCode::WrongType,
                input,
                "boolean",
                &self.messages,
            )]),
        }
    }

    fn kind(&self) -> &'static str {
        "boolean"
    }
}

/// Maps strings to booleans through configured truthy and falsy sets.
///
/// Matching is case-sensitive. Any other string, and any non-string, is a
/// `wrong_type` issue.
///
/// # Examples
///
/// ```rust
/// use shape_guard::checkers::{self, Check};
/// use shape_guard::core::CheckContext;
/// use serde_json::json;
///
/// let checkbox = checkers::string_bool().truthy(&["true", "checked"]);
/// let ctx = CheckContext::root();
/// assert_eq!(checkbox.check(Some(&json!("checked")), &ctx).unwrap(), json!(true));
/// assert_eq!(checkbox.check(Some(&json!("false")), &ctx).unwrap(), json!(false));
/// assert!(checkbox.check(Some(&json!("Checked")), &ctx).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StringBoolChecker {
    truthy: Vec<String>,
    falsy: Vec<String>,
    messages: Messages,
}

impl Default for StringBoolChecker {
    fn default() -> Self {
        Self {
            truthy: vec!["true".to_string()],
            falsy: vec!["false".to_string()],
            messages: Messages::default(),
        }
    }
}

impl StringBoolChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the set of strings mapped to `true`.
    pub fn truthy(mut self, values: &[&str]) -> Self {
        self.truthy = values.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Replaces the set of strings mapped to `false`.
    pub fn falsy(mut self, values: &[&str]) -> Self {
        self.falsy = values.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Sets the message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Returns every accepted string, truthy values first.
    pub fn accepted(&self) -> impl Iterator<Item = &str> {
        self.truthy.iter().chain(self.falsy.iter()).map(String::as_str)
    }

    fn expected(&self) -> String {
        self.accepted()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub(crate) fn verify(&self) -> Result<()> {
        if let Some(both) = self.truthy.iter().find(|v| self.falsy.contains(v)) {
            return Err(GuardError::Configuration(format!(
                "string-bool value \"{both}\" is both truthy and falsy"
            )));
        }
        Ok(())
    }
}

impl Check for StringBoolChecker {
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome {
        let expected = self.expected();
        let value = require(input, ctx, &expected, &self.messages)?;
        let mapped = value.as_str().and_then(|text| {
            if self.truthy.iter().any(|t| t == text) {
                Some(true)
            } else if self.falsy.iter().any(|f| f == text) {
                Some(false)
            } else {
                None
            }
        });

        match mapped {
            Some(flag) => Ok(Value::Bool(flag)),
            None => Err(vec![ctx.issue(
                IssueCode::WrongType,
                input,
                &expected,
                &self.messages,
            )]),
        }
    }

    fn kind(&self) -> &'static str {
        "string_bool"
    }
}
