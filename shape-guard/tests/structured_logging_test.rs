//! Integration tests for structured logging functionality.

mod common;

use common::{contact_schema, contact_without, valid_contact};
use serde_json::json;
use shape_guard::checkers;
use shape_guard::core::{FieldSpec, Schema};
use shape_guard::logging::LogConfig;

/// Test helper to capture structured logs
struct LogCapture {
    logs: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl LogCapture {
    fn new() -> Self {
        Self {
            logs: std::sync::Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    fn captured_logs(&self) -> Vec<String> {
        self.logs.lock().unwrap().clone()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let s = String::from_utf8_lossy(buf).to_string();
        self.logs.lock().unwrap().push(s);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_subscriber(capture: &LogCapture) -> impl tracing::Subscriber + Send + Sync {
    let logs = capture.logs.clone();
    tracing_subscriber::fmt()
        .json()
        .with_writer(move || LogCapture { logs: logs.clone() })
        .with_env_filter("info,shape_guard=debug")
        .finish()
}

#[test]
fn test_structured_logging_fields() {
    let capture = LogCapture::new();
    let _guard = tracing::subscriber::set_default(capture_subscriber(&capture));

    let schema = contact_schema();
    assert!(schema.validate(&valid_contact()).is_success());
    assert!(schema.validate(&contact_without("email")).is_failure());

    let logs = capture.captured_logs().join("");
    assert!(
        logs.contains(r#""schema.name":"contact_form""#),
        "missing schema name in logs: {logs}"
    );
    assert!(logs.contains("Validation succeeded"));
    assert!(logs.contains("Validation failed"));
    assert!(logs.contains(r#""schema.fields":8"#));
}

#[test]
fn test_field_details_only_when_enabled() {
    let capture = LogCapture::new();
    let _guard = tracing::subscriber::set_default(capture_subscriber(&capture));

    let quiet = Schema::builder("quiet")
        .field(FieldSpec::new("city", checkers::string()))
        .build()
        .unwrap();
    quiet.validate(&json!({ "city": 1 }));
    assert!(!capture.captured_logs().join("").contains("Field failed"));

    let verbose = Schema::builder("verbose")
        .field(FieldSpec::new("city", checkers::string()))
        .with_log_config(LogConfig::verbose())
        .build()
        .unwrap();
    verbose.validate(&json!({ "city": 1 }));

    let logs = capture.captured_logs().join("");
    assert!(logs.contains("Field failed"));
    assert!(logs.contains(r#""field.name":"city""#));
    assert!(logs.contains(r#""field.checker":"string""#));
}
