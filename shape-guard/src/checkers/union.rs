//! Union checker.

use super::{require, Check, CheckOutcome, Checker};
use crate::core::{CheckContext, Issue, IssueCode, Messages};
use crate::prelude::*;
use serde_json::Value;

/// Tries each branch in order; the first success wins.
///
/// When every branch fails, a branch that failed only with non-type issues
/// (the value had that branch's shape but broke a constraint) reports its own
/// issues. Otherwise the union reports a single `wrong_type` issue.
#[derive(Debug, Clone)]
pub struct UnionChecker {
    branches: Vec<Checker>,
    messages: Messages,
}

impl UnionChecker {
    /// Creates a union. An empty union is rejected when the schema is built.
    pub fn new(branches: Vec<Checker>) -> Self {
        Self {
            branches,
            messages: Messages::default(),
        }
    }

    /// Adds a branch.
    pub fn or(mut self, branch: impl Into<Checker>) -> Self {
        self.branches.push(branch.into());
        self
    }

    /// Sets the message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Returns the branches in evaluation order.
    pub fn branches(&self) -> &[Checker] {
        &self.branches
    }

    pub(crate) fn verify(&self) -> Result<()> {
        if self.branches.is_empty() {
            return Err(GuardError::EmptyUnion);
        }
        self.branches.iter().try_for_each(Checker::verify)
    }

    fn expected(&self) -> String {
        self.branches
            .iter()
            .map(Check::kind)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl Check for UnionChecker {
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome {
        let expected = self.expected();
        require(input, ctx, &expected, &self.messages)?;

        let mut shaped: Option<Vec<Issue>> = None;
        for branch in &self.branches {
            match branch.check(input, ctx) {
                Ok(value) => return Ok(value),
                Err(issues) => {
                    let type_failure = issues.iter().any(|issue| issue.code.is_fatal());
                    if !type_failure && shaped.is_none() {
                        shaped = Some(issues);
                    }
                }
            }
        }

        Err(shaped.unwrap_or_else(|| {
            vec![ctx.issue(IssueCode::WrongType, input, &expected, &self.messages)]
        }))
    }

    fn kind(&self) -> &'static str {
        "union"
    }
}
