//! Per-verb error configuration.
//!
//! An [`ErrorConfig`] bundles everything the UI layer needs to present a
//! handled error: the user-facing message, severity, an advisory
//! `reportable` flag, an optional display-duration override, an optional
//! side-effect action, and an open metadata bag.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::core_types::verb::{ErrorVerb, Severity};

/// Open, caller-extensible metadata attached to configs and log calls.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Zero-argument side effect run after a matching error is handled.
///
/// Shared behind an `Arc` so configs stay cloneable. Panics inside the
/// action propagate to the caller of `handle`.
pub type ErrorAction = Arc<dyn Fn() + Send + Sync>;

/// Patch applied to the handler's per-verb configuration table.
///
/// Each entry replaces the stored config for that verb wholesale; there is
/// no field-level merge (see [`crate::ErrorHandler::configure`]).
pub type ConfigMap = HashMap<ErrorVerb, ErrorConfig>;

/// Configuration resolved for a handled error.
///
/// Immutable once the handler reads it: `handle` clones the stored entry
/// into the returned report and never mutates it in place.
///
/// # Example
///
/// ```rust
/// use uniform_error::{ErrorConfig, Severity};
///
/// let config = ErrorConfig::new("Session expired. Please sign in again")
///     .with_severity(Severity::Warning)
///     .with_reportable(true);
/// assert_eq!(config.severity, Severity::Warning);
/// ```
#[derive(Clone)]
pub struct ErrorConfig {
    /// User-facing message for this error.
    pub message: String,
    /// Logging importance; defaults to [`Severity::Error`].
    pub severity: Severity,
    /// Advisory flag for forwarding to external monitoring. Not enforced
    /// by this crate.
    pub reportable: bool,
    /// Display-duration override in milliseconds. When absent the handler
    /// derives a duration from the message length.
    pub duration_ms: Option<u64>,
    /// Side effect invoked after logging.
    pub action: Option<ErrorAction>,
    /// Extra context merged into log metadata.
    pub metadata: Metadata,
}

impl ErrorConfig {
    /// Create a config with the given message and the field defaults:
    /// severity `Error`, not reportable, no duration override, no action,
    /// empty metadata.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            reportable: false,
            duration_ms: None,
            action: None,
            metadata: Metadata::new(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_reportable(mut self, reportable: bool) -> Self {
        self.reportable = reportable;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Insert a single metadata entry.
    pub fn with_metadata_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl fmt::Debug for ErrorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorConfig")
            .field("message", &self.message)
            .field("severity", &self.severity)
            .field("reportable", &self.reportable)
            .field("duration_ms", &self.duration_ms)
            .field("action", &self.action.as_ref().map(|_| "<action>"))
            .field("metadata", &self.metadata)
            .finish()
    }
}
