//! Logging setup with `tracing-subscriber`.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! `RUST_LOG` wins unless a verbosity flag was given explicitly.

use std::io::{self, IsTerminal};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    pub format: LogFormat,
    /// Honor `RUST_LOG` when set.
    pub use_env_filter: bool,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            format: LogFormat::default(),
            use_env_filter: true,
            with_ansi: io::stderr().is_terminal(),
        }
    }
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::default().add_directive(config.level_filter.into());
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

/// Install the global subscriber.
///
/// # Errors
/// Returns `TryInitError` if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = build_env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_ansi(config.with_ansi)
                    .with_writer(io::stderr),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(config.with_ansi)
                    .with_writer(io::stderr),
            )
            .try_init(),
    }
}
