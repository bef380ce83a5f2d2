//! Logging utilities and configuration for shape-guard.
//!
//! Validation emits `tracing` events. Per-field and per-refinement detail is
//! gated behind [`LogConfig`] so that hot validation loops stay quiet unless
//! a caller asks for it.

use tracing::Level;

/// Logging configuration carried by a compiled schema.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Base log level for shape-guard components
    pub base_level: Level,
    /// Whether to log each field's outcome
    pub log_field_details: bool,
    /// Whether to log refinement guard/predicate outcomes
    pub log_refinements: bool,
    /// Maximum length for logged input values (to prevent huge logs)
    pub max_field_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            base_level: Level::INFO,
            log_field_details: false,
            log_refinements: false,
            max_field_length: 256,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging.
    pub fn verbose() -> Self {
        Self {
            base_level: Level::TRACE,
            log_field_details: true,
            log_refinements: true,
            max_field_length: 1024,
        }
    }

    /// Creates a minimal configuration for production with lowest overhead.
    pub fn production() -> Self {
        Self {
            base_level: Level::WARN,
            log_field_details: false,
            log_refinements: false,
            max_field_length: 128,
        }
    }
}

/// Macro for performance-sensitive debug logging.
///
/// This macro only evaluates its arguments if debug logging is enabled,
/// avoiding the overhead of formatting when logs won't be emitted.
#[macro_export]
macro_rules! perf_debug {
    ($config:expr, $($arg:tt)*) => {
        if $config.base_level >= tracing::Level::DEBUG {
            tracing::debug!($($arg)*);
        }
    };
}

/// Macro for conditional per-field logging.
#[macro_export]
macro_rules! log_field {
    ($config:expr, $($arg:tt)*) => {
        if $config.log_field_details {
            tracing::debug!($($arg)*);
        }
    };
}

/// Macro for conditional refinement logging.
#[macro_export]
macro_rules! log_refinement {
    ($config:expr, $($arg:tt)*) => {
        if $config.log_refinements {
            tracing::debug!($($arg)*);
        }
    };
}

/// Truncates a string to the maximum field length if needed.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        value.to_string()
    } else {
        let mut end = max_length;
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        let truncated = &value[..end];
        format!("{truncated}...(truncated)")
    }
}

/// Utilities for setting up structured logging in binaries that embed shape-guard.
pub mod setup {
    use tracing::Level;

    /// Configuration for the global subscriber.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Log level for the application
        pub level: Level,
        /// Log level for shape-guard components specifically
        pub guard_level: Level,
        /// Whether to use JSON output format
        pub json_format: bool,
        /// Environment filter override
        pub env_filter: Option<String>,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                guard_level: Level::DEBUG,
                json_format: false,
                env_filter: None,
            }
        }
    }

    impl LoggingConfig {
        /// Creates a configuration for production use.
        pub fn production() -> Self {
            Self {
                level: Level::WARN,
                guard_level: Level::INFO,
                json_format: true,
                env_filter: None,
            }
        }

        /// Creates a configuration for development use.
        pub fn development() -> Self {
            Self {
                level: Level::DEBUG,
                guard_level: Level::TRACE,
                json_format: false,
                env_filter: None,
            }
        }

        /// Sets the log level for the application.
        pub fn with_level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        /// Sets the log level for shape-guard components.
        pub fn with_guard_level(mut self, level: Level) -> Self {
            self.guard_level = level;
            self
        }

        /// Sets whether to use JSON output format.
        pub fn with_json_format(mut self, enabled: bool) -> Self {
            self.json_format = enabled;
            self
        }

        /// Sets a custom environment filter.
        pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
            self.env_filter = Some(filter.into());
            self
        }

        /// Builds the environment filter string.
        pub fn env_filter(&self) -> String {
            if let Some(ref filter) = self.env_filter {
                filter.clone()
            } else {
                format!(
                    "{},shape_guard={}",
                    self.level.as_str().to_lowercase(),
                    self.guard_level.as_str().to_lowercase()
                )
            }
        }
    }

    /// Initializes the global `tracing` subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured filter.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use shape_guard::logging::setup::{init_logging, LoggingConfig};
    ///
    /// init_logging(LoggingConfig::development().with_json_format(true)).unwrap();
    /// ```
    pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer().json().boxed()
        } else {
            tracing_subscriber::fmt::layer().boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }
}
