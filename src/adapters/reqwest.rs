//! Built-in adapter for `reqwest::Error`.

use async_trait::async_trait;

use crate::core_types::adapter::ErrorAdapter;
use crate::core_types::config::Metadata;
use crate::core_types::verb::ErrorVerb;

/// Recognizes any error whose chain contains a [`reqwest::Error`].
///
/// Timeouts classify as [`ErrorVerb::Timeout`]; errors carrying a response
/// status go through the shared status table; everything else (connect and
/// request failures) is a [`ErrorVerb::NetworkError`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ReqwestAdapter;

impl ReqwestAdapter {
    fn find(error: &anyhow::Error) -> Option<&reqwest::Error> {
        error
            .chain()
            .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
    }
}

#[async_trait]
impl ErrorAdapter for ReqwestAdapter {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    fn can_handle(&self, error: &anyhow::Error) -> bool {
        Self::find(error).is_some()
    }

    fn verb(&self, error: &anyhow::Error) -> ErrorVerb {
        let Some(err) = Self::find(error) else {
            return ErrorVerb::Unknown;
        };

        if err.is_timeout() {
            return ErrorVerb::Timeout;
        }
        match err.status() {
            Some(status) => ErrorVerb::from_http_status(status.as_u16()),
            None => ErrorVerb::NetworkError,
        }
    }

    async fn extract_metadata(&self, error: &anyhow::Error) -> anyhow::Result<Metadata> {
        let mut metadata = Metadata::new();
        if let Some(err) = Self::find(error) {
            if let Some(status) = err.status() {
                metadata.insert("status".to_string(), status.as_u16().into());
            }
            if let Some(url) = err.url() {
                metadata.insert("url".to_string(), url.as_str().into());
            }
        }
        Ok(metadata)
    }
}
