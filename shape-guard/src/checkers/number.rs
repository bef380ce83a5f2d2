//! Number checker.

use super::{require, Check, CheckOutcome};
use crate::core::{CheckContext, IssueCode, Messages};
use serde_json::Value;

/// Validates JSON numbers.
///
/// The normalized value keeps the input's representation, so integers stay
/// integers.
#[derive(Debug, Clone, Default)]
pub struct NumberChecker {
    positive: bool,
    min: Option<f64>,
    messages: Messages,
}

impl NumberChecker {
    /// Creates a number checker without constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the number to be strictly greater than zero.
    pub fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    /// Requires the number to be at least `min`.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Check for NumberChecker {
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome {
        let value = require(input, ctx, "number", &self.messages)?;
        let Some(number) = value.as_f64() else {
            return Err(vec![ctx.issue(
                IssueCode::WrongType,
                input,
                "number",
                &self.messages,
            )]);
        };

        let mut issues = Vec::new();
        if self.positive && number <= 0.0 {
            issues.push(ctx.too_small(input, "positive number", 0.0, &self.messages));
        }
        if let Some(min) = self.min {
            if number < min {
                issues.push(ctx.too_small(input, "number", min, &self.messages));
            }
        }

        if issues.is_empty() {
            Ok(value.clone())
        } else {
            Err(issues)
        }
    }

    fn kind(&self) -> &'static str {
        "number"
    }
}
