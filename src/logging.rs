//! Diagnostic reporting for non-approved validation outcomes.
//!
//! The validator never talks to a logging backend directly; it hands
//! severity-tagged messages to a [`DiagnosticSink`] chosen at construction
//! time. The default sink routes to `tracing`, whose output format and
//! filtering are the embedding service's concern.

use tracing::{debug, error, info, warn};

/// Severity attached to a diagnostic emitted by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

/// Sink for validation diagnostics.
///
/// Implementations must not panic: the validation result never depends on
/// what a sink does with a message.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, severity: Severity, message: &str);
}

/// Routes diagnostics to the `tracing` macro matching their severity.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => debug!(target: "receipt_checker", "{message}"),
            Severity::Info => info!(target: "receipt_checker", "{message}"),
            Severity::Warn => warn!(target: "receipt_checker", "{message}"),
            Severity::Error => error!(target: "receipt_checker", "{message}"),
        }
    }
}

/// Discards every diagnostic.
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&self, _severity: Severity, _message: &str) {}
}
