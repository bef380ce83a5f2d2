//! Validates a contact form submission and prints the text and tree reports.
//!
//! Pass a path to a JSON file, or run without arguments to validate a
//! built-in sample:
//!
//! ```text
//! cargo run --example contact_form -- submission.json
//! ```

use shape_demos::{contact_schema, sample_submission};
use shape_guard::core::ValidationResult;
use shape_guard::logging::setup::{init_logging, LoggingConfig};
use std::error::Error;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    init_logging(LoggingConfig::development())?;

    let input = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(&path)?)?,
        None => sample_submission(),
    };

    let schema = contact_schema()?;
    tracing::info!(schema.name = %schema.name(), "Validating submission");

    match schema.validate(&input) {
        ValidationResult::Success { value, .. } => {
            println!("Submission is valid:");
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ValidationResult::Failure { issues, .. } => {
            println!("Submission has {} issue(s):\n", issues.len());
            println!("{}\n", issues.to_text());
            println!("Error tree:");
            println!("{}", serde_json::to_string_pretty(&issues.to_tree())?);
        }
    }

    Ok(())
}
