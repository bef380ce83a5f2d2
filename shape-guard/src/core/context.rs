//! Per-call context threaded through checkers.
//!
//! The context carries the current issue path and the schema's fallback
//! message hook. It is created fresh for every `validate` call and never
//! shared between calls.

use super::issue::{Issue, IssueCode, PathSegment};
use super::message::{default_message, MessageHook, Messages};
use serde_json::Value;

/// Runtime context for checker evaluation.
#[derive(Debug, Clone)]
pub struct CheckContext {
    path: Vec<PathSegment>,
    hook: MessageHook,
}

impl CheckContext {
    /// Creates a context rooted at an empty path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_guard::core::CheckContext;
    ///
    /// let ctx = CheckContext::root().child("tags").child(0usize);
    /// assert_eq!(ctx.path().len(), 2);
    /// ```
    pub fn root() -> Self {
        Self::with_hook(default_message)
    }

    /// Creates a root context with a custom fallback message hook.
    pub fn with_hook(hook: MessageHook) -> Self {
        Self {
            path: Vec::new(),
            hook,
        }
    }

    /// Returns a context one level deeper.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            path,
            hook: self.hook,
        }
    }

    /// Returns a context rooted at `prefix`, keeping the hook.
    pub fn at(&self, prefix: &[PathSegment]) -> Self {
        let mut path = self.path.clone();
        path.extend_from_slice(prefix);
        Self {
            path,
            hook: self.hook,
        }
    }

    /// Returns the current path.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Returns the fallback message hook.
    pub fn hook(&self) -> MessageHook {
        self.hook
    }

    /// Builds an issue at the current path and resolves its message.
    pub fn issue(
        &self,
        code: IssueCode,
        input: Option<&Value>,
        expected: &str,
        messages: &Messages,
    ) -> Issue {
        let issue = Issue::new(self.path.clone(), code, input).with_expected(expected);
        self.resolve(issue, messages)
    }

    /// Builds a `too_small` issue carrying its bound.
    pub fn too_small(
        &self,
        input: Option<&Value>,
        expected: &str,
        minimum: f64,
        messages: &Messages,
    ) -> Issue {
        let issue = Issue::new(self.path.clone(), IssueCode::TooSmall, input)
            .with_expected(expected)
            .with_minimum(minimum);
        self.resolve(issue, messages)
    }

    /// Resolves a draft issue's message: table entry first, then the hook.
    pub(crate) fn resolve(&self, issue: Issue, messages: &Messages) -> Issue {
        let message = messages
            .resolve(&issue)
            .unwrap_or_else(|| (self.hook)(&issue));
        issue.with_message(message)
    }
}

impl Default for CheckContext {
    fn default() -> Self {
        Self::root()
    }
}
