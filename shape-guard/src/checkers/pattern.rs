//! Pattern ("template literal") checker.
//!
//! A pattern is an ordered sequence of literal separators and typed slots,
//! such as a positive number, a space, then a string. The parts compile to a
//! single anchored regex; a matching string is decomposed through its capture
//! groups and each captured slot runs through its own checker.

use super::{require, Check, CheckOutcome, Checker};
use crate::core::{CheckContext, IssueCode, Messages};
use crate::prelude::*;
use regex::Regex;
use serde_json::{Number, Value};

/// One part of a pattern.
#[derive(Debug, Clone)]
pub enum PatternPart {
    /// Text that must appear verbatim
    Literal(String),
    /// A typed value validated by its checker
    Slot(Checker),
}

impl PatternPart {
    /// Creates a literal part.
    pub fn literal(text: impl Into<String>) -> Self {
        PatternPart::Literal(text.into())
    }

    /// Creates a slot part.
    pub fn slot(checker: impl Into<Checker>) -> Self {
        PatternPart::Slot(checker.into())
    }
}

/// Validates strings decomposable into literal and typed parts.
///
/// # Examples
///
/// ```rust
/// use shape_guard::checkers::{self, Check, PatternPart};
/// use shape_guard::core::CheckContext;
/// use serde_json::json;
///
/// let street = checkers::pattern(vec![
///     PatternPart::slot(checkers::number().positive()),
///     PatternPart::literal(" "),
///     PatternPart::slot(checkers::string()),
/// ])?;
///
/// let ctx = CheckContext::root();
/// assert_eq!(street.check(Some(&json!("10 Main")), &ctx).unwrap(), json!([10, "Main"]));
/// assert!(street.check(Some(&json!("Main 10")), &ctx).is_err());
/// # Ok::<(), shape_guard::error::GuardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PatternChecker {
    parts: Vec<PatternPart>,
    regex: Regex,
    messages: Messages,
}

impl PatternChecker {
    /// Compiles the parts into an anchored regex.
    ///
    /// Only number, string, boolean and string-bool checkers may appear as
    /// slots.
    pub fn new(parts: Vec<PatternPart>) -> Result<Self> {
        let mut source = String::from("^");
        for part in &parts {
            match part {
                PatternPart::Literal(text) => source.push_str(&regex::escape(text)),
                PatternPart::Slot(checker) => source.push_str(&slot_regex(checker)?),
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|e| GuardError::invalid_pattern(&source, e))?;
        Ok(Self {
            parts,
            regex,
            messages: Messages::default(),
        })
    }

    /// Sets the message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Iterates over the slot checkers in order.
    pub fn slots(&self) -> impl Iterator<Item = &Checker> {
        self.parts.iter().filter_map(|part| match part {
            PatternPart::Slot(checker) => Some(checker),
            PatternPart::Literal(_) => None,
        })
    }

    fn decompose(&self, text: &str, ctx: &CheckContext) -> Option<Vec<Value>> {
        let captures = self.regex.captures(text)?;
        self.slots()
            .enumerate()
            .map(|(i, checker)| {
                let raw = captures.get(i + 1)?.as_str();
                let slot_value = slot_value(checker, raw)?;
                checker.check(Some(&slot_value), ctx).ok()
            })
            .collect()
    }
}

fn slot_regex(checker: &Checker) -> Result<String> {
    let source = match checker {
        Checker::Number(_) => r"(-?\d+(?:\.\d+)?)".to_string(),
        Checker::String(_) => r"([\s\S]*)".to_string(),
        Checker::Boolean(_) => "(true|false)".to_string(),
        Checker::StringBool(c) => {
            let alternatives: Vec<String> = c.accepted().map(regex::escape).collect();
            format!("({})", alternatives.join("|"))
        }
        other => {
            return Err(GuardError::UnsupportedPatternSlot {
                kind: other.kind().to_string(),
            })
        }
    };
    Ok(source)
}

/// Converts captured text into the value the slot checker expects.
fn slot_value(checker: &Checker, raw: &str) -> Option<Value> {
    match checker {
        Checker::Number(_) => {
            if let Ok(int) = raw.parse::<i64>() {
                Some(Value::Number(int.into()))
            } else {
                raw.parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
            }
        }
        Checker::Boolean(_) => raw.parse::<bool>().ok().map(Value::Bool),
        _ => Some(Value::String(raw.to_string())),
    }
}

impl Check for PatternChecker {
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

        self.decompose(text, ctx).map(Value::Array).ok_or_else(|| {
            vec![ctx.issue(
                IssueCode::PatternMismatch,
                input,
                "pattern",
                &self.messages,
            )]
        })
    }

    fn kind(&self) -> &'static str {
        "pattern"
    }
}
