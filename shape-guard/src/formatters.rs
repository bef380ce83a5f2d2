//! Result formatting for shape-guard validation results.
//!
//! This module provides formatters that turn a [`ValidationResult`] into
//! plain text for people or JSON for programs.
//!
//! # Examples
//!
//! ```rust
//! use shape_guard::checkers;
//! use shape_guard::core::{FieldSpec, Schema};
//! use shape_guard::formatters::{ResultFormatter, TextFormatter};
//! use serde_json::json;
//!
//! let schema = Schema::builder("contact")
//!     .field(FieldSpec::new("city", checkers::string().non_empty()))
//!     .build()?;
//! let result = schema.validate(&json!({ "city": "" }));
//!
//! let output = TextFormatter::new().format(&result)?;
//! assert!(output.contains("city: Too small"));
//! # Ok::<(), shape_guard::error::GuardError>(())
//! ```

use crate::core::{Issue, ValidationResult};
use crate::prelude::*;
use crate::report::{format_path, ErrorTree};
use serde_json::{json, Map, Value};
use std::fmt::Write;

/// Configuration options for formatting validation results.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Include the offending input of each issue
    pub include_input: bool,
    /// Include validation metrics in output
    pub include_metrics: bool,
    /// Maximum number of issues to display (-1 for all)
    pub max_issues: i32,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            include_input: true,
            include_metrics: true,
            max_issues: -1, // Show all issues by default
            pretty: true,
        }
    }
}

impl FormatterConfig {
    /// Creates a minimal configuration showing only issues.
    pub fn minimal() -> Self {
        Self {
            include_input: false,
            include_metrics: false,
            max_issues: -1,
            pretty: false,
        }
    }

    /// Creates a configuration suitable for CI/CD environments.
    pub fn ci() -> Self {
        Self {
            include_input: false,
            include_metrics: true,
            max_issues: 50, // Limit output in CI
            pretty: false,
        }
    }

    /// Sets whether to include offending inputs.
    pub fn with_input(mut self, include: bool) -> Self {
        self.include_input = include;
        self
    }

    /// Sets whether to include metrics.
    pub fn with_metrics(mut self, include: bool) -> Self {
        self.include_metrics = include;
        self
    }

    /// Sets the maximum number of issues to display.
    pub fn with_max_issues(mut self, max: i32) -> Self {
        self.max_issues = max;
        self
    }

    /// Sets whether to pretty-print JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn shown<'a>(&self, issues: &'a [Issue]) -> &'a [Issue] {
        if self.max_issues < 0 {
            issues
        } else {
            &issues[..issues.len().min(self.max_issues as usize)]
        }
    }
}

/// Trait for formatting validation results into different output formats.
///
/// # Examples
///
/// ```rust
/// use shape_guard::formatters::ResultFormatter;
/// use shape_guard::core::ValidationResult;
///
/// struct StatusOnly;
///
/// impl ResultFormatter for StatusOnly {
///     fn format(&self, result: &ValidationResult) -> shape_guard::prelude::Result<String> {
///         let success = result.is_success();
///         Ok(format!("valid: {success}"))
///     }
/// }
/// ```
pub trait ResultFormatter {
    /// Formats a validation result into a string representation.
    fn format(&self, result: &ValidationResult) -> Result<String>;

    /// Formats a validation result with custom configuration.
    fn format_with_config(
        &self,
        result: &ValidationResult,
        _config: &FormatterConfig,
    ) -> Result<String> {
        // Default implementation ignores config and uses standard format
        self.format(result)
    }
}

/// Formats validation results as structured JSON.
///
/// Output contains `status`, then `value` on success or `issues` and the
/// error `tree` on failure, and `metrics` when enabled.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    config: FormatterConfig,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new JSON formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// Sets whether to use pretty-printed JSON.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    fn to_value(&self, result: &ValidationResult, config: &FormatterConfig) -> Result<Value> {
        let mut output = Map::new();
        match result {
            ValidationResult::Success { value, .. } => {
                output.insert("status".to_string(), json!("success"));
                output.insert("value".to_string(), value.clone());
            }
            ValidationResult::Failure { issues, .. } => {
                output.insert("status".to_string(), json!("failure"));
                let shown = config.shown(issues);
                let mut rendered = Vec::with_capacity(shown.len());
                for issue in shown {
                    let mut value = serde_json::to_value(issue)?;
                    if !config.include_input {
                        if let Some(object) = value.as_object_mut() {
                            object.remove("input");
                        }
                    }
                    rendered.push(value);
                }
                output.insert("issues".to_string(), Value::Array(rendered));
                output.insert(
                    "tree".to_string(),
                    ErrorTree::from_issues(issues).to_json(),
                );
            }
        }

        if config.include_metrics {
            output.insert("metrics".to_string(), serde_json::to_value(result.metrics())?);
        }
        Ok(Value::Object(output))
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, result: &ValidationResult) -> Result<String> {
        self.format_with_config(result, &self.config)
    }

    fn format_with_config(
        &self,
        result: &ValidationResult,
        config: &FormatterConfig,
    ) -> Result<String> {
        let value = self.to_value(result, config)?;
        let rendered = if config.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        rendered.map_err(|e| GuardError::Internal(format!("Failed to serialize result to JSON: {e}")))
    }
}

/// Formats validation results as plain text, one issue per line.
///
/// # Examples
///
/// ```rust
/// use shape_guard::formatters::{FormatterConfig, TextFormatter};
///
/// let formatter = TextFormatter::with_config(FormatterConfig::minimal());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    config: FormatterConfig,
}

impl TextFormatter {
    /// Creates a new text formatter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new text formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl ResultFormatter for TextFormatter {
    fn format(&self, result: &ValidationResult) -> Result<String> {
        self.format_with_config(result, &self.config)
    }

    fn format_with_config(
        &self,
        result: &ValidationResult,
        config: &FormatterConfig,
    ) -> Result<String> {
        let mut output = String::new();
        let issues = result.issues();

        if result.is_success() {
            writeln!(output, "Validation passed")?;
        } else {
            writeln!(output, "Validation failed with {} issue(s)", issues.len())?;
            let shown = config.shown(issues);
            for issue in shown {
                write!(output, "  {}: {}", format_path(&issue.path), issue.message)?;
                if config.include_input {
                    if let Some(input) = &issue.input {
                        write!(output, " (input: {input})")?;
                    }
                }
                writeln!(output)?;
            }
            if issues.len() > shown.len() {
                writeln!(
                    output,
                    "  ... {} additional issues not shown",
                    issues.len() - shown.len()
                )?;
            }
        }

        if config.include_metrics {
            let metrics = result.metrics();
            writeln!(
                output,
                "Fields: {} checked, {} passed, {} failed, {} skipped",
                metrics.fields_checked,
                metrics.fields_passed,
                metrics.fields_failed,
                metrics.fields_skipped
            )?;
            writeln!(
                output,
                "Refinements: {} evaluated, {} skipped, {} failed",
                metrics.refinements_evaluated,
                metrics.refinements_skipped,
                metrics.refinements_failed
            )?;
        }

        Ok(output)
    }
}
