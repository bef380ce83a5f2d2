//! Array checker.

use super::{require, Check, CheckOutcome, Checker};
use crate::core::{CheckContext, IssueCode, Messages};
use serde_json::Value;

/// Validates sequences, delegating each element to an inner checker.
///
/// Element issues carry the element index appended to the path. All element
/// issues are collected before the length constraint is evaluated.
#[derive(Debug, Clone)]
pub struct ArrayChecker {
    element: Box<Checker>,
    min_items: Option<usize>,
    messages: Messages,
}

impl ArrayChecker {
    /// Creates an array checker delegating elements to `element`.
    pub fn new(element: impl Into<Checker>) -> Self {
        Self {
            element: Box::new(element.into()),
            min_items: None,
            messages: Messages::default(),
        }
    }

    /// Returns the element checker.
    pub fn element(&self) -> &Checker {
        &self.element
    }

    /// Requires at least one element.
    pub fn non_empty(self) -> Self {
        self.min_items(1)
    }

    /// Requires at least `min` elements.
    pub fn min_items(mut self, min: usize) -> Self {
        self.min_items = Some(min);
        self
    }

    /// Sets the message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }
}

impl Check for ArrayChecker {
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome {
        let value = require(input, ctx, "array", &self.messages)?;
        let Some(items) = value.as_array() else {
            return Err(vec![ctx.issue(
                IssueCode::WrongType,
                input,
                "array",
                &self.messages,
            )]);
        };

        let mut normalized = Vec::with_capacity(items.len());
        let mut issues = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.element.check(Some(item), &ctx.child(index)) {
                Ok(value) => normalized.push(value),
                Err(mut element_issues) => issues.append(&mut element_issues),
            }
        }

        if let Some(min) = self.min_items {
            if items.len() < min {
                issues.push(ctx.too_small(input, "array", min as f64, &self.messages));
            }
        }

        if issues.is_empty() {
            Ok(Value::Array(normalized))
        } else {
            Err(issues)
        }
    }

    fn kind(&self) -> &'static str {
        "array"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{number, string};
    use crate::core::PathSegment;
    use serde_json::json;

    #[test]
    fn test_element_issues_carry_index() {
        let checker = ArrayChecker::new(string().non_empty());
        let ctx = CheckContext::root().child("middleNames");
        let issues = checker
            .check(Some(&json!(["Jo", "", 3])), &ctx)
            .unwrap_err();

        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0].path,
            vec![PathSegment::from("middleNames"), PathSegment::Index(1)]
        );
        assert_eq!(issues[0].code, IssueCode::TooSmall);
        assert_eq!(
            issues[1].path,
            vec![PathSegment::from("middleNames"), PathSegment::Index(2)]
        );
        assert_eq!(issues[1].code, IssueCode::WrongType);
    }

    #[test]
    fn test_non_empty() {
        let checker = ArrayChecker::new(string()).non_empty();
        let ctx = CheckContext::root();
        let issues = checker.check(Some(&json!([])), &ctx).unwrap_err();
        assert_eq!(issues[0].code, IssueCode::TooSmall);
        assert_eq!(
            issues[0].message,
            "Too small: expected array to have >=1 items"
        );
    }

    #[test]
    fn test_wrong_type() {
        let checker = ArrayChecker::new(number());
        let issues = checker
            .check(Some(&json!("1 2")), &CheckContext::root())
            .unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::WrongType);
    }

    #[test]
    fn test_normalizes_elements() {
        let checker = ArrayChecker::new(crate::checkers::string_bool());
        let value = checker
            .check(Some(&json!(["true", "false"])), &CheckContext::root())
            .unwrap();
        assert_eq!(value, json!([true, false]));
    }
}
