// 🟢 GREEN Phase: Opt-in logging setup
// The client only emits `tracing` events; installing a subscriber is left
// to the application, optionally through `init_logging`.

use crate::error::{PusherError, PusherResult};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    /// Directive string in `RUST_LOG` syntax; overrides `level` when set
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            filter: None,
        }
    }
}

impl LogConfig {
    pub fn builder() -> LogConfigBuilder {
        LogConfigBuilder::default()
    }

    fn env_filter(&self) -> PusherResult<EnvFilter> {
        let directives = self
            .filter
            .clone()
            .unwrap_or_else(|| self.level.as_str().to_string());
        EnvFilter::try_new(&directives)
            .map_err(|e| PusherError::config(format!("invalid log filter '{}': {}", directives, e)))
    }
}

#[derive(Default)]
pub struct LogConfigBuilder {
    config: LogConfig,
}

impl LogConfigBuilder {
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.config.filter = Some(filter.into());
        self
    }

    pub fn build(self) -> LogConfig {
        self.config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Install a global `tracing` subscriber. Fails if one is already set.
pub fn init_logging(config: LogConfig) -> PusherResult<()> {
    let filter = config.env_filter()?;
    let result = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .try_init(),
    };
    result.map_err(|e| PusherError::config(format!("failed to install subscriber: {}", e)))?;

    info!("Logging initialized with level: {:?}", config.level);
    Ok(())
}

/// Mask a secret for display, keeping at most its first two characters
pub fn redact(value: &str) -> String {
    let visible: String = value.chars().take(2).collect();
    if value.chars().count() <= 4 {
        "[REDACTED]".to_string()
    } else {
        format!("{}…[REDACTED]", visible)
    }
}
