//! String checker.

use super::{require, Check, CheckOutcome};
use crate::core::{CheckContext, IssueCode, Messages};
use crate::prelude::*;
use regex::Regex;
use serde_json::Value;

/// Validates JSON strings.
///
/// # Examples
///
/// ```rust
/// use shape_guard::checkers::{self, Check};
/// use shape_guard::core::{CheckContext, IssueCode, Messages};
/// use serde_json::json;
///
/// let first_name = checkers::string()
///     .non_empty()
///     .messages(Messages::new().missing("firstName is missing"));
///
/// let ctx = CheckContext::root().child("firstName");
/// let issues = first_name.check(Some(&json!("")), &ctx).unwrap_err();
/// assert_eq!(issues[0].code, IssueCode::TooSmall);
/// assert_eq!(first_name.check(None, &ctx).unwrap_err()[0].message, "firstName is missing");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringChecker {
    min_len: Option<usize>,
    regex: Option<Regex>,
    messages: Messages,
}

impl StringChecker {
    /// Creates a string checker without constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires at least one character.
    pub fn non_empty(self) -> Self {
        self.min_len(1)
    }

    /// Requires at least `min` characters.
    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }

    /// Requires `pattern` to match somewhere in the string.
    ///
    /// The pattern is not anchored: add `^` and `$` to match the whole string.
    ///
    /// Fails with [`GuardError::InvalidPattern`] if the pattern does not compile.
    pub fn regex(mut self, pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| GuardError::invalid_pattern(pattern, e))?;
        self.regex = Some(regex);
        Ok(self)
    }

    /// Sets the message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Check for StringChecker {
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome {
        let value = require(input, ctx, "string", &self.messages)?;
        let Some(text) = value.as_str() else {
            return Err(vec![ctx.issue(
                IssueCode::WrongType,
                input,
                "string",
                &self.messages,
            )]);
        };

        let mut issues = Vec::new();
        if let Some(min) = self.min_len {
            if text.chars().count() < min {
                issues.push(ctx.too_small(input, "string", min as f64, &self.messages));
            }
        }
        if let Some(regex) = &self.regex {
            if !regex.is_match(text) {
                issues.push(ctx.issue(
                    IssueCode::PatternMismatch,
                    input,
                    "pattern",
                    &self.messages,
                ));
            }
        }

        if issues.is_empty() {
            Ok(value.clone())
        } else {
            Err(issues)
        }
    }

    fn kind(&self) -> &'static str {
        "string"
    }
}
