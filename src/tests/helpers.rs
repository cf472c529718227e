// Shared helpers for unit tests.
//
// Provides marker error types, configurable test adapters, and a handler
// wired to a MemoryLogger so tests can observe logging decisions.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::core_types::adapter::ErrorAdapter;
use crate::core_types::config::Metadata;
use crate::core_types::verb::ErrorVerb;
use crate::handler::ErrorHandler;
use crate::logger::MemoryLogger;

/// Marker error the test adapters claim.
#[derive(Debug, Error)]
#[error("marked failure: {0}")]
pub struct MarkedFailure(pub &'static str);

/// Error no test adapter claims.
#[derive(Debug, Error)]
#[error("plain failure")]
pub struct PlainFailure;

/// Adapter claiming [`MarkedFailure`] and returning a fixed verb.
pub struct TestAdapter {
    pub name: &'static str,
    pub verb: ErrorVerb,
}

impl TestAdapter {
    pub fn new(name: &'static str, verb: ErrorVerb) -> Self {
        Self { name, verb }
    }
}

#[async_trait]
impl ErrorAdapter for TestAdapter {
    fn name(&self) -> &'static str {
        self.name
    }

    fn can_handle(&self, error: &anyhow::Error) -> bool {
        error
            .chain()
            .any(|cause| cause.downcast_ref::<MarkedFailure>().is_some())
    }

    fn verb(&self, _error: &anyhow::Error) -> ErrorVerb {
        self.verb
    }
}

/// Adapter claiming [`MarkedFailure`] and contributing fixed metadata.
pub struct MetadataAdapter {
    pub verb: ErrorVerb,
    pub metadata: Metadata,
}

#[async_trait]
impl ErrorAdapter for MetadataAdapter {
    fn name(&self) -> &'static str {
        "metadata-test"
    }

    fn can_handle(&self, error: &anyhow::Error) -> bool {
        error
            .chain()
            .any(|cause| cause.downcast_ref::<MarkedFailure>().is_some())
    }

    fn verb(&self, _error: &anyhow::Error) -> ErrorVerb {
        self.verb
    }

    async fn extract_metadata(&self, _error: &anyhow::Error) -> anyhow::Result<Metadata> {
        Ok(self.metadata.clone())
    }
}

/// Adapter claiming [`MarkedFailure`] whose metadata extraction always
/// fails.
pub struct FailingMetadataAdapter {
    pub verb: ErrorVerb,
}

#[async_trait]
impl ErrorAdapter for FailingMetadataAdapter {
    fn name(&self) -> &'static str {
        "failing-metadata-test"
    }

    fn can_handle(&self, error: &anyhow::Error) -> bool {
        error
            .chain()
            .any(|cause| cause.downcast_ref::<MarkedFailure>().is_some())
    }

    fn verb(&self, _error: &anyhow::Error) -> ErrorVerb {
        self.verb
    }

    async fn extract_metadata(&self, _error: &anyhow::Error) -> anyhow::Result<Metadata> {
        Err(anyhow::anyhow!("metadata extraction exploded"))
    }
}

/// Handler whose logger records calls for inspection.
pub fn handler_with_memory_logger() -> (ErrorHandler, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    let mut handler = ErrorHandler::new();
    handler.set_logger(logger.clone());
    (handler, logger)
}
