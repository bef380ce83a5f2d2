//! Object schemas: compilation and validation.
//!
//! A [`Schema`] is compiled once from field specs, an unknown-key policy and
//! refinement rules, then reused for any number of `validate` calls. The
//! compiled schema is immutable, `Send + Sync` and cheap to clone.
//!
//! ## Validation order
//!
//! 1. A non-object input yields one `wrong_type` issue at the root.
//! 2. Undeclared keys are handled by the [`UnknownKeys`] policy.
//! 3. Declared fields run in declaration order: default or optional handling
//!    for absent values, preprocessing, the nullable check, then the checker.
//!    Every field is evaluated; nothing short-circuits.
//! 4. Refinements run in declaration order, only when no field produced a
//!    `missing` or `wrong_type` issue.

use super::context::CheckContext;
use super::field::FieldSpec;
use super::issue::{Issue, IssueCode, PathSegment};
use super::message::{default_message, MessageHook, Messages};
use super::preprocess::run_pipeline;
use super::refinement::Refinement;
use super::result::{ValidationMetrics, ValidationResult};
use crate::checkers::{Check, CheckOutcome};
use crate::logging::{truncate_field, LogConfig};
use crate::prelude::*;
use crate::report::format_path;
use crate::{log_field, log_refinement, perf_debug};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

/// What to do with input keys the schema does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeys {
    /// Drop them from the output
    #[default]
    Strip,
    /// Copy them to the output unchanged
    Passthrough,
    /// Report one `custom` issue per key
    Reject,
}

/// A compiled object schema.
///
/// # Examples
///
/// ```rust
/// use shape_guard::checkers;
/// use shape_guard::core::{FieldSpec, Schema};
/// use serde_json::json;
///
/// let schema = Schema::builder("address")
///     .strict()
///     .field(FieldSpec::new("city", checkers::string().non_empty()))
///     .field(FieldSpec::new("phoneNumber", checkers::e164()).optional())
///     .build()?;
///
/// assert!(schema.validate(&json!({ "city": "Leeds" })).is_success());
/// assert!(schema.validate(&json!({ "city": "Leeds", "zip": 1 })).is_failure());
/// # Ok::<(), shape_guard::error::GuardError>(())
/// ```
#[derive(Clone)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

struct SchemaInner {
    name: String,
    fields: Vec<FieldSpec>,
    unknown_keys: UnknownKeys,
    refinements: Vec<Refinement>,
    hook: MessageHook,
    log_config: LogConfig,
}

impl Schema {
    /// Starts building a schema. The name is used in logs.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the declared fields in order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.inner.fields
    }

    pub fn unknown_keys(&self) -> UnknownKeys {
        self.inner.unknown_keys
    }

    pub fn refinements(&self) -> &[Refinement] {
        &self.inner.refinements
    }

    /// Validates one input value.
    ///
    /// Never fails: every problem with the input is reported as an issue in
    /// the returned [`ValidationResult`].
    #[instrument(skip(self, input), fields(
        schema.name = %self.inner.name,
        schema.fields = self.inner.fields.len()
    ))]
    pub fn validate(&self, input: &Value) -> ValidationResult {
        let ctx = CheckContext::with_hook(self.inner.hook);
        let mut metrics = ValidationMetrics::new();
        let outcome = self.evaluate(input, &ctx, &Messages::default(), &mut metrics);

        match outcome {
            Ok(value) => {
                debug!(
                    schema.name = %self.inner.name,
                    metrics.passed = metrics.fields_passed,
                    metrics.skipped = metrics.fields_skipped,
                    metrics.refinements = metrics.refinements_evaluated,
                    "Validation succeeded"
                );
                ValidationResult::success(value, metrics)
            }
            Err(issues) => {
                debug!(
                    schema.name = %self.inner.name,
                    issues = issues.len(),
                    metrics.failed = metrics.fields_failed,
                    metrics.refinements_failed = metrics.refinements_failed,
                    "Validation failed"
                );
                ValidationResult::failure(issues, metrics)
            }
        }
    }

    /// Validates an object at the context's path.
    ///
    /// `messages` is the table of the checker embedding this schema; it
    /// resolves root-level `wrong_type` and unknown-key issues.
    pub(crate) fn evaluate(
        &self,
        input: &Value,
        ctx: &CheckContext,
        messages: &Messages,
        metrics: &mut ValidationMetrics,
    ) -> CheckOutcome {
        let Some(object) = input.as_object() else {
            return Err(vec![ctx.issue(
                IssueCode::WrongType,
                Some(input),
                "object",
                messages,
            )]);
        };

        let mut issues = Vec::new();
        let mut output = Map::new();
        let mut extras = Vec::new();
        self.check_unknown_keys(object, ctx, messages, metrics, &mut issues, &mut extras);

        // Normalized values, or preprocessed raw values for fields that failed
        let mut view = Map::new();
        for field in &self.inner.fields {
            self.check_field(field, object, ctx, metrics, &mut issues, &mut output, &mut view);
        }

        self.run_refinements(&view, ctx, metrics, &mut issues);

        output.extend(extras);
        if issues.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(issues)
        }
    }

    fn declares(&self, key: &str) -> bool {
        self.inner.fields.iter().any(|field| field.name == key)
    }

    fn check_unknown_keys(
        &self,
        object: &Map<String, Value>,
        ctx: &CheckContext,
        messages: &Messages,
        metrics: &mut ValidationMetrics,
        issues: &mut Vec<Issue>,
        extras: &mut Vec<(String, Value)>,
    ) {
        for (key, value) in object.iter().filter(|(key, _)| !self.declares(key)) {
            metrics.unknown_keys += 1;
            match self.inner.unknown_keys {
                UnknownKeys::Strip => {}
                UnknownKeys::Passthrough => extras.push((key.clone(), value.clone())),
                UnknownKeys::Reject => {
                    let key_ctx = ctx.child(key.as_str());
                    let issue =
                        key_ctx.issue(IssueCode::Custom, Some(value), "declared key", messages);
                    perf_debug!(
                        self.inner.log_config,
                        schema.name = %self.inner.name,
                        key = %key,
                        "Rejected unknown key"
                    );
                    issues.push(issue);
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn check_field(
        &self,
        field: &FieldSpec,
        object: &Map<String, Value>,
        ctx: &CheckContext,
        metrics: &mut ValidationMetrics,
        issues: &mut Vec<Issue>,
        output: &mut Map<String, Value>,
        view: &mut Map<String, Value>,
    ) {
        let config = &self.inner.log_config;
        let field_ctx = ctx.child(field.name.as_str());
        metrics.fields_checked += 1;

        let raw = match (object.get(&field.name), &field.default) {
            (Some(value), _) => value.clone(),
            (None, Some(default)) => default.clone(),
            (None, None) if field.optional => {
                metrics.fields_skipped += 1;
                log_field!(config, field.name = %field.name, "Skipped absent optional field");
                return;
            }
            (None, None) => {
                metrics.fields_failed += 1;
                log_field!(config, field.name = %field.name, "Required field is missing");
                let missing = field.checker.check(None, &field_ctx).err().unwrap_or_default();
                issues.extend(apply_field_messages(field, &field_ctx, missing));
                return;
            }
        };

        let prepared = run_pipeline(&field.preprocess, raw);
        if prepared.is_null() && field.nullable {
            metrics.fields_passed += 1;
            log_field!(config, field.name = %field.name, "Accepted null for nullable field");
            view.insert(field.name.clone(), Value::Null);
            output.insert(field.name.clone(), Value::Null);
            return;
        }

        match field.checker.check(Some(&prepared), &field_ctx) {
            Ok(normalized) => {
                metrics.fields_passed += 1;
                log_field!(
                    config,
                    field.name = %field.name,
                    field.checker = field.checker.kind(),
                    "Field passed"
                );
                view.insert(field.name.clone(), normalized.clone());
                output.insert(field.name.clone(), normalized);
            }
            Err(field_issues) => {
                metrics.fields_failed += 1;
                log_field!(
                    config,
                    field.name = %field.name,
                    field.checker = field.checker.kind(),
                    field.issues = field_issues.len(),
                    field.input = %truncate_field(&prepared.to_string(), config.max_field_length),
                    "Field failed"
                );
                view.insert(field.name.clone(), prepared);
                issues.extend(apply_field_messages(field, &field_ctx, field_issues));
            }
        }
    }

    fn run_refinements(
        &self,
        view: &Map<String, Value>,
        ctx: &CheckContext,
        metrics: &mut ValidationMetrics,
        issues: &mut Vec<Issue>,
    ) {
        let config = &self.inner.log_config;
        if issues.iter().any(|issue| issue.code.is_fatal()) {
            metrics.refinements_skipped += self.inner.refinements.len();
            perf_debug!(
                config,
                schema.name = %self.inner.name,
                refinements = self.inner.refinements.len(),
                "Skipping refinements after structural failure"
            );
            return;
        }

        for rule in &self.inner.refinements {
            if !rule.applies_to(view) {
                metrics.refinements_skipped += 1;
                log_refinement!(config, refinement.path = %rule.path_label(), "Guard not met");
                continue;
            }

            metrics.refinements_evaluated += 1;
            if rule.satisfied_by(view) {
                log_refinement!(config, refinement.path = %rule.path_label(), "Refinement passed");
                continue;
            }

            metrics.refinements_failed += 1;
            log_refinement!(config, refinement.path = %rule.path_label(), "Refinement failed");
            let rule_ctx = ctx.at(rule.path());
            let input = lookup(view, rule.path());
            issues.push(
                Issue::new(rule_ctx.path().to_vec(), IssueCode::Custom, input)
                    .with_message(rule.message()),
            );
        }
    }
}

/// Field-level messages override the checker's text for issues at the
/// field's own path.
fn apply_field_messages(field: &FieldSpec, ctx: &CheckContext, issues: Vec<Issue>) -> Vec<Issue> {
    issues
        .into_iter()
        .map(|mut issue| {
            if issue.path == ctx.path() {
                if let Some(message) = field.messages.resolve(&issue) {
                    issue.message = message;
                }
            }
            issue
        })
        .collect()
}

fn lookup<'a>(view: &'a Map<String, Value>, path: &[PathSegment]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = view.get(first.as_key()?)?;
    for segment in rest {
        current = match segment {
            PathSegment::Key(key) => current.get(key.as_str())?,
            PathSegment::Index(index) => current.get(*index)?,
        };
    }
    Some(current)
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.inner.name)
            .field("fields", &self.inner.fields)
            .field("unknown_keys", &self.inner.unknown_keys)
            .field("refinements", &self.inner.refinements)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldSpec>,
    unknown_keys: UnknownKeys,
    refinements: Vec<Refinement>,
    hook: MessageHook,
    log_config: LogConfig,
}

impl SchemaBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            unknown_keys: UnknownKeys::default(),
            refinements: Vec::new(),
            hook: default_message,
            log_config: LogConfig::default(),
        }
    }

    /// Sets the schema name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Rejects undeclared keys.
    pub fn strict(self) -> Self {
        self.unknown_keys(UnknownKeys::Reject)
    }

    /// Sets the unknown-key policy.
    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// Declares a field. Declaration order is validation and report order.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a refinement rule.
    pub fn refine(mut self, rule: Refinement) -> Self {
        self.refinements.push(rule);
        self
    }

    /// Sets the fallback message hook for issues without a table entry.
    pub fn message_hook(mut self, hook: MessageHook) -> Self {
        self.hook = hook;
        self
    }

    /// Sets the logging configuration.
    pub fn with_log_config(mut self, config: LogConfig) -> Self {
        self.log_config = config;
        self
    }

    /// Compiles the schema.
    ///
    /// Fails on contradictory or unusable definitions: duplicate or empty
    /// field names, a field that is both optional and defaulted, a default
    /// that its own field rejects, refinement paths outside the declared
    /// fields, and invalid checker configurations.
    pub fn build(self) -> Result<Schema> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(GuardError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(GuardError::DuplicateField {
                    field: field.name.clone(),
                });
            }
            if field.optional && field.default.is_some() {
                return Err(GuardError::conflicting(
                    &field.name,
                    "a field cannot be both optional and defaulted",
                ));
            }
            field.checker.verify()?;
            verify_default(field)?;
        }

        for rule in &self.refinements {
            let declared = match rule.path().first() {
                None => true,
                Some(PathSegment::Key(key)) => seen.contains(key.as_str()),
                Some(PathSegment::Index(_)) => false,
            };
            if !declared {
                return Err(GuardError::UnknownRefinementPath {
                    path: format_path(rule.path()),
                });
            }
        }

        debug!(
            schema.name = %self.name,
            schema.fields = self.fields.len(),
            schema.refinements = self.refinements.len(),
            schema.unknown_keys = ?self.unknown_keys,
            "Compiled schema"
        );

        Ok(Schema {
            inner: Arc::new(SchemaInner {
                name: self.name,
                fields: self.fields,
                unknown_keys: self.unknown_keys,
                refinements: self.refinements,
                hook: self.hook,
                log_config: self.log_config,
            }),
        })
    }
}

fn verify_default(field: &FieldSpec) -> Result<()> {
    let Some(default) = &field.default else {
        return Ok(());
    };

    let prepared = run_pipeline(&field.preprocess, default.clone());
    if prepared.is_null() {
        if field.nullable {
            return Ok(());
        }
        return Err(GuardError::InvalidDefault {
            field: field.name.clone(),
            message: "null default on a non-nullable field".to_string(),
        });
    }

    let ctx = CheckContext::root().child(field.name.as_str());
    field
        .checker
        .check(Some(&prepared), &ctx)
        .map(|_| ())
        .map_err(|issues| GuardError::InvalidDefault {
            field: field.name.clone(),
            message: issues
                .first()
                .map(|issue| issue.message.clone())
                .unwrap_or_default(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::{array, boolean, number, object, string, union};
    use crate::core::Preprocess;
    use serde_json::json;

    fn password_consistent(view: &Map<String, Value>) -> bool {
        matches!(
            (view.get("requiresPassword"), view.get("password")),
            (Some(Value::Bool(false)), Some(Value::Null))
                | (Some(Value::Bool(true)), Some(Value::String(_)))
        )
    }

    fn account() -> Schema {
        Schema::builder("account")
            .field(FieldSpec::new("requiresPassword", boolean()))
            .field(FieldSpec::new("password", string()).nullable())
            .refine(Refinement::new(
                ["password"],
                "Password must be set exactly when required",
                password_consistent,
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_non_object_input() {
        let result = account().validate(&json!([1, 2]));
        let issues = result.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::WrongType);
        assert!(issues[0].path.is_empty());
        assert_eq!(
            issues[0].message,
            "Invalid input: expected object, received array"
        );
    }

    #[test]
    fn test_conditional_refinement() {
        let schema = account();

        let result = schema.validate(&json!({ "requiresPassword": true, "password": null }));
        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.issues()[0].path, vec![PathSegment::from("password")]);
        assert_eq!(result.issues()[0].code, IssueCode::Custom);
        assert_eq!(result.issues()[0].input, Some(Value::Null));

        assert!(schema
            .validate(&json!({ "requiresPassword": false, "password": null }))
            .is_success());
        assert!(schema
            .validate(&json!({ "requiresPassword": true, "password": "x" }))
            .is_success());
    }

    #[test]
    fn test_refinements_skip_after_fatal_issue() {
        let result = account().validate(&json!({ "password": null }));
        assert_eq!(result.issues().len(), 1);
        assert_eq!(result.issues()[0].code, IssueCode::Missing);
        assert_eq!(result.metrics().refinements_skipped, 1);
        assert_eq!(result.metrics().refinements_evaluated, 0);
    }

    #[test]
    fn test_refinements_see_non_fatal_failures() {
        fn city_is_not_london(view: &Map<String, Value>) -> bool {
            view.get("city") != Some(&json!("London"))
        }
        let schema = Schema::builder("place")
            .field(FieldSpec::new("city", string().min_len(10)))
            .refine(Refinement::new(["city"], "London is not served", city_is_not_london))
            .build()
            .unwrap();

        let result = schema.validate(&json!({ "city": "London" }));
        let codes: Vec<_> = result.issues().iter().map(|i| i.code).collect();
        assert_eq!(codes, vec![IssueCode::TooSmall, IssueCode::Custom]);
    }

    #[test]
    fn test_guard_false_skips_rule() {
        fn never(_: &Map<String, Value>) -> bool {
            false
        }
        let schema = Schema::builder("flags")
            .field(FieldSpec::new("on", boolean()))
            .refine(Refinement::new(["on"], "unreachable", never).when(never))
            .build()
            .unwrap();
        let result = schema.validate(&json!({ "on": true }));
        assert!(result.is_success());
        assert_eq!(result.metrics().refinements_skipped, 1);
    }

    #[test]
    fn test_refinement_at_far_index_renders() {
        fn never(_: &Map<String, Value>) -> bool {
            false
        }
        let schema = Schema::builder("tags")
            .field(FieldSpec::new("tags", array(string())))
            .refine(Refinement::new(
                [PathSegment::from("tags"), PathSegment::Index(usize::MAX)],
                "last tag is reserved",
                never,
            ))
            .build()
            .unwrap();

        let result = schema.validate(&json!({ "tags": ["a"] }));
        let tree = result.to_tree().to_json();
        assert_eq!(
            tree["properties"]["tags"]["items"][usize::MAX.to_string()]["errors"],
            json!(["last tag is reserved"])
        );
    }

    #[test]
    fn test_unknown_key_policies() {
        let builder = || Schema::builder("city").field(FieldSpec::new("city", string()));
        let input = json!({ "zip": "LS1", "city": "Leeds", "extra": 1 });

        let stripped = builder().build().unwrap().validate(&input);
        assert_eq!(stripped.value(), Some(&json!({ "city": "Leeds" })));
        assert_eq!(stripped.metrics().unknown_keys, 2);

        let passed = builder()
            .unknown_keys(UnknownKeys::Passthrough)
            .build()
            .unwrap()
            .validate(&input);
        assert_eq!(
            passed.value(),
            Some(&json!({ "city": "Leeds", "zip": "LS1", "extra": 1 }))
        );

        let rejected = builder().strict().build().unwrap().validate(&input);
        let issues = rejected.issues();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, vec![PathSegment::from("zip")]);
        assert_eq!(issues[0].message, "Unrecognized key: \"zip\"");
        assert_eq!(issues[1].path, vec![PathSegment::from("extra")]);
        assert_eq!(issues[0].code, IssueCode::Custom);
    }

    #[test]
    fn test_unknown_keys_come_before_field_issues() {
        let schema = Schema::builder("city")
            .strict()
            .field(FieldSpec::new("city", string()))
            .build()
            .unwrap();
        let result = schema.validate(&json!({ "city": 1, "zip": "x" }));
        let codes: Vec<_> = result.issues().iter().map(|i| i.code).collect();
        assert_eq!(codes, vec![IssueCode::Custom, IssueCode::WrongType]);
    }

    #[test]
    fn test_optional_default_and_nullable() {
        let schema = Schema::builder("prefs")
            .field(FieldSpec::new("nickname", string()).optional())
            .field(FieldSpec::new("newsletter", boolean()).default(json!(false)))
            .field(FieldSpec::new("bio", string()).nullable())
            .build()
            .unwrap();

        let result = schema.validate(&json!({ "bio": null }));
        assert_eq!(
            result.value(),
            Some(&json!({ "newsletter": false, "bio": null }))
        );
        assert_eq!(result.metrics().fields_skipped, 1);

        let result = schema.validate(&json!({ "nickname": null }));
        let paths: Vec<_> = result.issues().iter().map(|i| i.path.clone()).collect();
        assert_eq!(
            paths,
            vec![vec![PathSegment::from("nickname")], vec![PathSegment::from("bio")]]
        );
    }

    #[test]
    fn test_no_short_circuit() {
        let schema = Schema::builder("name")
            .field(FieldSpec::new("firstName", string()))
            .field(FieldSpec::new("lastName", string()))
            .build()
            .unwrap();
        let result = schema.validate(&json!({}));
        assert_eq!(result.issues().len(), 2);
        assert!(result.issues().iter().all(|i| i.code == IssueCode::Missing));
        assert_eq!(result.metrics().fields_failed, 2);
    }

    #[test]
    fn test_preprocess_runs_before_nullable_and_checker() {
        let schema = Schema::builder("names")
            .field(
                FieldSpec::new("middleNames", array(string()).non_empty())
                    .preprocess(Preprocess::SplitWhitespace)
                    .nullable(),
            )
            .build()
            .unwrap();

        assert_eq!(
            schema.validate(&json!({ "middleNames": "Mary Jane" })).value(),
            Some(&json!({ "middleNames": ["Mary", "Jane"] }))
        );
        assert!(schema.validate(&json!({ "middleNames": null })).is_success());
        assert_eq!(
            schema.validate(&json!({ "middleNames": "" })).issues()[0].code,
            IssueCode::TooSmall
        );
        assert_eq!(
            schema.validate(&json!({ "middleNames": 5 })).issues()[0].code,
            IssueCode::WrongType
        );
    }

    #[test]
    fn test_field_messages_override_checker() {
        let schema = Schema::builder("person")
            .field(
                FieldSpec::new("city", string().messages(Messages::new().missing("checker")))
                    .messages(Messages::new().missing("city is missing")),
            )
            .build()
            .unwrap();
        let result = schema.validate(&json!({}));
        assert_eq!(result.issues()[0].message, "city is missing");
    }

    #[test]
    fn test_message_hook_reaches_nested_schema() {
        fn terse(issue: &Issue) -> String {
            format!("bad {}", issue.code)
        }
        let address = Schema::builder("address")
            .field(FieldSpec::new("city", string()))
            .build()
            .unwrap();
        let schema = Schema::builder("person")
            .message_hook(terse)
            .field(FieldSpec::new("address", object(address)))
            .build()
            .unwrap();

        let result = schema.validate(&json!({ "address": { "city": 3 } }));
        assert_eq!(result.issues()[0].message, "bad wrong_type");
        assert_eq!(
            result.issues()[0].path,
            vec![PathSegment::from("address"), PathSegment::from("city")]
        );
    }

    #[test]
    fn test_message_hook_resolves_unknown_keys() {
        fn localized(issue: &Issue) -> String {
            match issue.field() {
                Some(key) if issue.code == IssueCode::Custom => format!("clé inconnue : {key}"),
                _ => format!("invalide : {}", issue.code),
            }
        }
        let schema = Schema::builder("city")
            .strict()
            .message_hook(localized)
            .field(FieldSpec::new("city", string()))
            .build()
            .unwrap();

        let result = schema.validate(&json!({ "city": 1, "zip": "x" }));
        let messages: Vec<_> = result.issues().iter().map(|i| i.message.as_str()).collect();
        assert_eq!(messages, vec!["clé inconnue : zip", "invalide : wrong_type"]);
        assert_eq!(result.issues()[0].expected.as_deref(), Some("declared key"));

        let default_text = Schema::builder("city")
            .strict()
            .field(FieldSpec::new("city", string()))
            .build()
            .unwrap()
            .validate(&json!({ "city": "Leeds", "zip": "x" }));
        assert_eq!(default_text.issues()[0].message, "Unrecognized key: \"zip\"");
    }

    #[test]
    fn test_compile_errors() {
        let dup = Schema::builder("s")
            .field(FieldSpec::new("a", string()))
            .field(FieldSpec::new("a", number()))
            .build();
        assert!(matches!(dup, Err(GuardError::DuplicateField { field }) if field == "a"));

        let empty = Schema::builder("s").field(FieldSpec::new("", string())).build();
        assert!(matches!(empty, Err(GuardError::EmptyFieldName)));

        let conflicting = Schema::builder("s")
            .field(FieldSpec::new("a", string()).optional().default(json!("x")))
            .build();
        assert!(matches!(
            conflicting,
            Err(GuardError::ConflictingModifiers { .. })
        ));

        let bad_default = Schema::builder("s")
            .field(FieldSpec::new("a", number()).default(json!("x")))
            .build();
        assert!(matches!(bad_default, Err(GuardError::InvalidDefault { .. })));

        let null_default = Schema::builder("s")
            .field(FieldSpec::new("a", number()).default(Value::Null))
            .build();
        assert!(matches!(null_default, Err(GuardError::InvalidDefault { .. })));

        let unknown_path = Schema::builder("s")
            .field(FieldSpec::new("a", string()))
            .refine(Refinement::new(["b"], "m", |_| true))
            .build();
        assert!(matches!(
            unknown_path,
            Err(GuardError::UnknownRefinementPath { path }) if path == "b"
        ));

        let empty_union = Schema::builder("s")
            .field(FieldSpec::new("a", union(vec![])))
            .build();
        assert!(matches!(empty_union, Err(GuardError::EmptyUnion)));
    }

    #[test]
    fn test_schema_is_send_sync_and_cheap_to_clone() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();

        let schema = account();
        let copy = schema.clone();
        assert!(Arc::ptr_eq(&schema.inner, &copy.inner));
    }
}
