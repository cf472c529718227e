//! Logging capability injected into the handler.
//!
//! No implicit global logging state: the handler owns an explicit
//! [`Logger`] and invokes it only when the severity gate passes.
//! [`TracingLogger`] is the default production implementation;
//! [`MemoryLogger`] records calls for assertions in tests.

use std::sync::Mutex;

use crate::core_types::config::Metadata;
use crate::core_types::verb::Severity;
use crate::logging::{log_error, log_info, log_warn};

/// Sink for handled errors that passed the logging gate.
pub trait Logger: Send + Sync {
    /// Record one handled error.
    ///
    /// `message` is already formatted (`"[verb] user message"`), `metadata`
    /// carries the config metadata merged with the verb and any
    /// adapter-extracted context.
    fn log(&self, severity: Severity, message: &str, error: &anyhow::Error, metadata: &Metadata);
}

/// Default logger: emits through `tracing` at the level matching the
/// severity (`Critical` maps to the error level with a marker field).
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, severity: Severity, message: &str, error: &anyhow::Error, metadata: &Metadata) {
        let metadata = serde_json::Value::Object(metadata.clone());
        match severity {
            Severity::Info => log_info!(source = %error, metadata = %metadata, "{message}"),
            Severity::Warning => log_warn!(source = %error, metadata = %metadata, "{message}"),
            Severity::Error => log_error!(source = %error, metadata = %metadata, "{message}"),
            Severity::Critical => {
                log_error!(source = %error, metadata = %metadata, critical = true, "{message}")
            }
        }
    }
}

/// One recorded [`Logger::log`] invocation.
#[derive(Debug, Clone)]
pub struct LoggedCall {
    pub severity: Severity,
    pub message: String,
    /// Display form of the raw error.
    pub error: String,
    pub metadata: Metadata,
}

/// Logger that records every call in memory.
///
/// The observation point for logging assertions: share one behind an `Arc`,
/// hand a clone to the handler, inspect [`calls`](Self::calls) afterwards.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    calls: Mutex<Vec<LoggedCall>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded calls, in order.
    pub fn calls(&self) -> Vec<LoggedCall> {
        self.calls.lock().expect("logger mutex poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().expect("logger mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Logger for MemoryLogger {
    fn log(&self, severity: Severity, message: &str, error: &anyhow::Error, metadata: &Metadata) {
        self.calls
            .lock()
            .expect("logger mutex poisoned")
            .push(LoggedCall {
                severity,
                message: message.to_string(),
                error: error.to_string(),
                metadata: metadata.clone(),
            });
    }
}
