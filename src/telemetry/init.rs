//! Telemetry initialization.
//!
//! Provides configuration and initialization for the tracing subscriber.

use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Configuration for telemetry initialization.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Default log level
    pub default_level: Level,
    /// Whether to include file and line numbers
    pub include_file_line: bool,
    /// Whether to include the target (module path)
    pub include_target: bool,
    /// Whether to use ANSI colors
    pub ansi_colors: bool,
    /// Custom filter directive (overrides default_level if set)
    pub filter_directive: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            include_file_line: false,
            include_target: true,
            ansi_colors: ansi_enabled(
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            ),
            filter_directive: None,
        }
    }
}

impl TelemetryConfig {
    /// Configuration for `--verbose`: every git invocation is logged.
    pub fn verbose() -> Self {
        Self {
            default_level: Level::DEBUG,
            include_file_line: true,
            ..Self::default()
        }
    }

    /// Pick the configuration matching the CLI verbosity flag.
    pub fn for_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::verbose()
        } else {
            Self::default()
        }
    }
}

/// Guard that keeps the telemetry subscriber active.
pub struct TelemetryGuard {
    #[allow(dead_code)]
    _private: (),
}

/// Colors only make sense on a terminal, and never when `NO_COLOR` is set.
fn ansi_enabled(stderr_is_terminal: bool, no_color: bool) -> bool {
    stderr_is_terminal && !no_color
}

/// Build the event filter.
///
/// An explicit `filter_directive` wins, then `RUST_LOG` (passed in as
/// `env_directive`), then the configured default level.
fn build_filter(
    config: &TelemetryConfig,
    env_directive: Option<&str>,
) -> anyhow::Result<EnvFilter> {
    if let Some(ref directive) = config.filter_directive {
        return Ok(EnvFilter::try_new(directive)?);
    }
    match env_directive {
        Some(directive) if !directive.trim().is_empty() => Ok(EnvFilter::try_new(directive)?),
        _ => Ok(EnvFilter::default()
            .add_directive(config.default_level.into())
            .add_directive(format!("gitshare={}", config.default_level).parse()?)),
    }
}

/// Initialize telemetry with the given configuration.
///
/// Events are written to stderr so that report output on stdout stays
/// machine-readable. A non-empty `RUST_LOG` replaces the configured level.
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    let env_directive = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config, env_directive.as_deref())?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi_colors)
        .with_target(config.include_target)
        .with_file(config.include_file_line)
        .with_line_number(config.include_file_line)
        .compact();

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(TelemetryGuard { _private: () })
}
