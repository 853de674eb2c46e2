//! Logging setup for composer hosts
//!
//! Hosts that embed the composer can call [`init_default`] once at startup to
//! get consistent `tracing` output without wiring up a subscriber themselves.
//! Respects `COMPOSER_LOG_FORMAT` (text or json) and `COMPOSER_LOG_LEVEL`.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output
    Text,
    /// Machine-parseable JSON, one object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Initialize the global tracing subscriber
///
/// `level` is used when `RUST_LOG` is not set. Logs go to stderr so a host
/// printing payloads to stdout stays machine-readable.
///
/// # Panics
///
/// Panics if a subscriber has already been installed.
pub fn init(format: LogFormat, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }
}

/// Initialize logging from the environment
///
/// Falls back to text format at info level when `COMPOSER_LOG_FORMAT` and
/// `COMPOSER_LOG_LEVEL` are not set.
pub fn init_default() {
    let format = std::env::var("COMPOSER_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("COMPOSER_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    init(format, &level);
}
