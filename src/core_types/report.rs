//! Result of handling a raw error.

use crate::core_types::config::ErrorConfig;
use crate::core_types::verb::ErrorVerb;

/// Structured outcome returned by [`crate::ErrorHandler::handle`].
///
/// Produced fresh per call and handed to the caller; the handler keeps no
/// copy. `source` is the raw error the caller passed in, returned by value
/// so UI layers can keep inspecting it.
#[derive(Debug)]
pub struct Report {
    /// User-facing message from the resolved config.
    pub message: String,
    /// Verb the error classified into.
    pub verb: ErrorVerb,
    /// The config that was used, as resolved at handling time.
    pub config: ErrorConfig,
    /// The raw error that was handled.
    pub source: anyhow::Error,
    /// Suggested display duration in milliseconds. Always within the
    /// heuristic's floor and ceiling unless the config overrode it.
    pub duration_ms: u64,
}
