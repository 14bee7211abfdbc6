//! Tracing subscriber configuration.
//!
//! The services emit structured `tracing` events; embedders decide whether
//! and how to collect them. [`init_tracing`] installs a formatted subscriber
//! filtered by an `EnvFilter` directive.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "TASKTRACK_LOG";

/// Fallback environment variable holding the filter directive.
pub const FALLBACK_LOG_ENV: &str = "RUST_LOG";

/// Directive used when no environment variable is set.
pub const DEFAULT_FILTER: &str = "info";

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    filter: String,
    with_target: bool,
    test_writer: bool,
}

impl TelemetryConfig {
    /// Creates a configuration with the given filter directive.
    #[must_use]
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            with_target: false,
            test_writer: false,
        }
    }

    /// Reads the filter directive from [`LOG_ENV`], then
    /// [`FALLBACK_LOG_ENV`], defaulting to [`DEFAULT_FILTER`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Resolves the filter directive through `lookup`.
    ///
    /// Blank values are treated as unset.
    #[must_use]
    pub fn from_source(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let filter = [LOG_ENV, FALLBACK_LOG_ENV]
            .into_iter()
            .filter_map(&lookup)
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned());
        Self::new(filter)
    }

    /// Includes the event target in formatted output.
    #[must_use]
    pub const fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Routes output through the test harness capture.
    #[must_use]
    pub const fn with_test_writer(mut self, enabled: bool) -> Self {
        self.test_writer = enabled;
        self
    }

    /// Returns the filter directive.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Builds the `EnvFilter` for this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::InvalidFilter`] when the directive does not
    /// parse.
    pub fn env_filter(&self) -> Result<EnvFilter, TelemetryError> {
        EnvFilter::try_new(&self.filter).map_err(|err| TelemetryError::InvalidFilter {
            filter: self.filter.clone(),
            reason: err.to_string(),
        })
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER)
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TelemetryError {
    /// The filter directive is malformed.
    #[error("invalid log filter '{filter}': {reason}")]
    InvalidFilter {
        /// The rejected directive.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(String),
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a malformed directive or
/// [`TelemetryError::AlreadyInstalled`] when a subscriber is already set.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt()
        .with_target(config.with_target)
        .with_env_filter(config.env_filter()?);
    let installed = if config.test_writer {
        builder.with_test_writer().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| TelemetryError::AlreadyInstalled(err.to_string()))
}
