//! Nested object checker.

use super::{require, Check, CheckOutcome};
use crate::core::{CheckContext, Messages, Schema, ValidationMetrics};
use serde_json::Value;

/// Validates a nested object against its own [`Schema`].
///
/// Nested issues carry the parent path as a prefix, and the nested schema's
/// refinements run as part of the nested validation. Messages without a
/// table entry resolve through the outermost schema's hook.
#[derive(Debug, Clone)]
pub struct ObjectChecker {
    schema: Schema,
    messages: Messages,
}

impl ObjectChecker {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            messages: Messages::default(),
        }
    }

    /// Sets the message table used for `missing` and `wrong_type` issues.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Returns the nested schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Check for ObjectChecker {
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome {
        let value = require(input, ctx, "object", &self.messages)?;
        let mut metrics = ValidationMetrics::default();
        self.schema
            .evaluate(value, ctx, &self.messages, &mut metrics)
    }

    fn kind(&self) -> &'static str {
        "object"
    }
}
