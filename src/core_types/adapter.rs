//! Adapter trait for pluggable error recognition.
//!
//! An adapter recognizes one family of raw error shapes and translates it
//! into a verb plus optional metadata. Adapters are registered into an
//! ordered list on the handler; classification walks the list in
//! registration order and uses the first adapter that claims the error.

use async_trait::async_trait;

use crate::core_types::config::Metadata;
use crate::core_types::verb::ErrorVerb;

/// Pluggable classifier mapping a family of raw errors to a verb.
///
/// Implementations typically walk `error.chain()` and probe with
/// [`downcast_ref`](std::error::Error::downcast_ref) for the concrete
/// error type they understand; see the built-in adapters in
/// [`crate::adapters`].
///
/// # Contract
///
/// - [`can_handle`](Self::can_handle) must be side-effect free and must not
///   panic. A panicking predicate is a defect in the adapter and propagates
///   to the caller of `handle`.
/// - [`verb`](Self::verb) must be total over errors the adapter claims.
/// - [`extract_metadata`](Self::extract_metadata) runs only for the adapter
///   that matched, and only when the handler decided to log. Failures are
///   swallowed by the handler (metadata is omitted, the rest of `handle`
///   completes); they never block message delivery or action execution.
#[async_trait]
pub trait ErrorAdapter: Send + Sync {
    /// Diagnostic name, used in internal logging only.
    fn name(&self) -> &'static str;

    /// Whether this adapter recognizes the raw error.
    fn can_handle(&self, error: &anyhow::Error) -> bool;

    /// Verb for an error this adapter claims.
    fn verb(&self, error: &anyhow::Error) -> ErrorVerb;

    /// Extra structured context for logging, extracted from the raw error.
    ///
    /// The default implementation contributes nothing. May suspend, e.g. to
    /// read a buffered response body.
    async fn extract_metadata(&self, error: &anyhow::Error) -> anyhow::Result<Metadata> {
        let _ = error;
        Ok(Metadata::new())
    }
}
