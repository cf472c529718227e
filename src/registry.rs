//! Ordered adapter registry and first-match classification.

use crate::core_types::adapter::ErrorAdapter;
use crate::core_types::verb::ErrorVerb;
use crate::logging::log_debug;

/// Append-only, ordered list of registered adapters.
///
/// Order is significant and caller-controlled: the first-registered adapter
/// whose `can_handle` returns true wins, and exactly one adapter's verdict
/// is used per classification. Adapters cannot be removed for the lifetime
/// of the handler that owns the registry.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: Vec<Box<dyn ErrorAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an adapter. First registered, first tried.
    pub fn register(&mut self, adapter: Box<dyn ErrorAdapter>) {
        log_debug!(
            adapter = adapter.name(),
            position = self.adapters.len(),
            "Adapter registered"
        );
        self.adapters.push(adapter);
    }

    /// First adapter in registration order that claims the error.
    pub fn matching(&self, error: &anyhow::Error) -> Option<&dyn ErrorAdapter> {
        self.adapters
            .iter()
            .find(|adapter| adapter.can_handle(error))
            .map(|adapter| adapter.as_ref())
    }

    /// Classify a raw error: first match wins, no match falls back to
    /// [`ErrorVerb::Unknown`].
    pub fn classify(&self, error: &anyhow::Error) -> ErrorVerb {
        match self.matching(error) {
            Some(adapter) => {
                let verb = adapter.verb(error);
                log_debug!(
                    adapter = adapter.name(),
                    verb = %verb,
                    "Error classified"
                );
                verb
            }
            None => {
                log_debug!("No adapter claimed the error, falling back to unknown");
                ErrorVerb::Unknown
            }
        }
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Diagnostic names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.adapters.iter().map(|adapter| adapter.name()).collect()
    }
}
