//! Tracing setup for gitshare.
//!
//! - Structured logging via the `tracing` crate, written to stderr
//! - A span around every git invocation
//!
//! # Feature Flags
//!
//! - `telemetry` (default): tracing spans around git invocations
//! - `release-logs`: Strip debug/trace at compile time
//! - `max-perf`: Disable all tracing for maximum performance

mod init;
mod spans;

pub use init::{init_telemetry, TelemetryConfig, TelemetryGuard};
pub use spans::{GitSpan, SpanExt};
