//! Span helpers for git invocations.

#[cfg(feature = "telemetry")]
use tracing::Span;

/// Helper for git operation spans.
pub struct GitSpan;

impl GitSpan {
    /// Create a span for a git operation.
    #[cfg(feature = "telemetry")]
    pub fn new(operation: &str, workdir: &str) -> Span {
        tracing::debug_span!(
            "git_operation",
            operation = %operation,
            workdir = %workdir,
            success = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        )
    }

    #[cfg(not(feature = "telemetry"))]
    pub fn new(_operation: &str, _workdir: &str) -> NoOpSpan {
        NoOpSpan
    }
}

/// No-op span when telemetry is disabled.
#[derive(Clone)]
#[allow(dead_code)]
pub struct NoOpSpan;

#[allow(dead_code)]
impl NoOpSpan {
    /// No-op enter.
    pub fn enter(&self) -> NoOpGuard {
        NoOpGuard
    }
}

/// No-op guard when telemetry is disabled.
#[allow(dead_code)]
pub struct NoOpGuard;

/// Extension trait for spans.
pub trait SpanExt {
    /// Record success status on the span.
    fn record_success(&self, success: bool);

    /// Record duration in milliseconds on the span.
    fn record_duration_ms(&self, duration_ms: f64);
}

#[cfg(feature = "telemetry")]
impl SpanExt for Span {
    fn record_success(&self, success: bool) {
        self.record("success", success);
    }

    fn record_duration_ms(&self, duration_ms: f64) {
        self.record("duration_ms", duration_ms);
    }
}

#[cfg(not(feature = "telemetry"))]
impl SpanExt for NoOpSpan {
    fn record_success(&self, _success: bool) {}
    fn record_duration_ms(&self, _duration_ms: f64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_span_records_outcome() {
        let span = GitSpan::new("cherry-pick", "/path/to/repo");
        let _guard = span.enter();
        span.record_success(true);
        span.record_duration_ms(12.5);
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn test_noop_span() {
        let span = NoOpSpan;
        span.record_success(true);
        span.record_duration_ms(100.0);
    }
}
