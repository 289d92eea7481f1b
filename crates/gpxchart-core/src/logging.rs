// File: crates/gpxchart-core/src/logging.rs
// Summary: Injectable sink for render diagnostics.

/// Receives diagnostics about charts that had to fall back to the "no data"
/// rendering. Shared across threads by the service.
pub trait ErrorLogger: Send + Sync {
    fn log_error(&self, message: &str);
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl ErrorLogger for TracingLogger {
    fn log_error(&self, message: &str) {
        tracing::warn!(target: "gpxchart", "{message}");
    }
}

/// Drops every diagnostic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl ErrorLogger for NullLogger {
    fn log_error(&self, _message: &str) {}
}
