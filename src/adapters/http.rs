//! Transport-agnostic HTTP error shape and its adapter.
//!
//! Integrations that do not use a supported client can still feed the
//! classifier: wrap the outcome of any HTTP call in an
//! [`HttpClientError`] and the [`HttpClientAdapter`] translates it through
//! the shared status table.

use async_trait::async_trait;
use thiserror::Error;

use crate::core_types::adapter::ErrorAdapter;
use crate::core_types::config::Metadata;
use crate::core_types::verb::ErrorVerb;

/// Generic HTTP client failure, independent of the client library.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// A response arrived with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// Request URL, when the integration has it.
        url: Option<String>,
    },

    /// The request never produced a response.
    #[error("network failure: {detail}")]
    Network { detail: String },

    /// The request was cancelled before completion.
    #[error("request cancelled")]
    Cancelled,
}

impl HttpClientError {
    pub fn status(status: u16) -> Self {
        Self::Status { status, url: None }
    }

    pub fn status_for_url(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: Some(url.into()),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn cancelled() -> Self {
        Self::Cancelled
    }
}

/// Recognizes any error whose chain contains an [`HttpClientError`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpClientAdapter;

impl HttpClientAdapter {
    fn find(error: &anyhow::Error) -> Option<&HttpClientError> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<HttpClientError>())
    }
}

#[async_trait]
impl ErrorAdapter for HttpClientAdapter {
    fn name(&self) -> &'static str {
        "http-client"
    }

    fn can_handle(&self, error: &anyhow::Error) -> bool {
        Self::find(error).is_some()
    }

    fn verb(&self, error: &anyhow::Error) -> ErrorVerb {
        match Self::find(error) {
            Some(HttpClientError::Cancelled) => ErrorVerb::Cancelled,
            Some(HttpClientError::Network { .. }) => ErrorVerb::NetworkError,
            Some(HttpClientError::Status { status, .. }) => ErrorVerb::from_http_status(*status),
            None => ErrorVerb::Unknown,
        }
    }

    async fn extract_metadata(&self, error: &anyhow::Error) -> anyhow::Result<Metadata> {
        let mut metadata = Metadata::new();
        match Self::find(error) {
            Some(HttpClientError::Status { status, url }) => {
                metadata.insert("status".to_string(), (*status).into());
                if let Some(url) = url {
                    metadata.insert("url".to_string(), url.as_str().into());
                }
            }
            Some(HttpClientError::Network { detail }) => {
                metadata.insert("detail".to_string(), detail.as_str().into());
            }
            Some(HttpClientError::Cancelled) | None => {}
        }
        Ok(metadata)
    }
}
