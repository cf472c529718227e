//! The handling orchestrator.
//!
//! [`ErrorHandler`] ties the configuration store and the classification
//! engine together: it classifies a raw error through the registered
//! adapters, resolves the per-verb config, decides whether to log based on
//! the severity threshold, runs any configured side-effect action, and
//! returns a structured [`Report`].
//!
//! One instance per application (or per test); instances are independent
//! and there is no global singleton. Setup mutators take `&mut self` while
//! `handle` takes `&self`, so the borrow checker enforces the contract that
//! configuration happens before steady-state traffic.

use std::sync::Arc;

use crate::core_types::adapter::ErrorAdapter;
use crate::core_types::config::{ConfigMap, ErrorConfig, Metadata};
use crate::core_types::report::Report;
use crate::core_types::verb::{ErrorVerb, LogLevel, Severity};
use crate::defaults::{default_config, default_config_map};
use crate::duration::{message_duration_ms, DEFAULT_WORDS_PER_SECOND};
use crate::logger::{Logger, TracingLogger};
use crate::logging::log_debug;
use crate::registry::AdapterRegistry;

/// Callback invoked by [`QueryErrorHandler`] after the error is handled.
pub type QueryErrorCallback = Box<dyn Fn(&anyhow::Error, &Report) + Send + Sync>;

/// Classifies raw errors into verbs and resolves them to user-facing
/// messages, logging decisions, and side effects.
///
/// # Example
///
/// ```rust
/// use uniform_error::{ErrorConfig, ErrorHandler, ErrorVerb, Severity};
///
/// # async fn example() {
/// let mut handler = ErrorHandler::new();
/// handler
///     .configure([(
///         ErrorVerb::Unauthorized,
///         ErrorConfig::new("Session expired").with_severity(Severity::Warning),
///     )])
///     .register_adapter(uniform_error::adapters::HttpClientAdapter);
///
/// let report = handler
///     .handle(uniform_error::adapters::HttpClientError::status(401))
///     .await;
/// assert_eq!(report.verb, ErrorVerb::Unauthorized);
/// assert_eq!(report.message, "Session expired");
/// # }
/// ```
pub struct ErrorHandler {
    default_config: ErrorConfig,
    configs: ConfigMap,
    registry: AdapterRegistry,
    logger: Arc<dyn Logger>,
    log_level: LogLevel,
    log_all_errors: bool,
    reading_speed_wps: f64,
}

impl Default for ErrorHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorHandler {
    /// Handler seeded with the built-in defaults for every verb, a
    /// [`TracingLogger`], the [`LogLevel::Error`] threshold, and the default
    /// reading speed.
    pub fn new() -> Self {
        Self {
            default_config: default_config(ErrorVerb::Unknown),
            configs: default_config_map(),
            registry: AdapterRegistry::new(),
            logger: Arc::new(TracingLogger),
            log_level: LogLevel::default(),
            log_all_errors: false,
            reading_speed_wps: DEFAULT_WORDS_PER_SECOND,
        }
    }

    /// Replace stored configs for the verbs present in `patch`.
    ///
    /// Replacement is per-verb and wholesale: the patch entry becomes the
    /// stored config for that verb, and fields not set on the patch entry
    /// fall back to [`ErrorConfig::new`] defaults rather than to the
    /// previously stored values. An empty patch changes nothing.
    pub fn configure(&mut self, patch: impl IntoIterator<Item = (ErrorVerb, ErrorConfig)>) -> &mut Self {
        for (verb, config) in patch {
            log_debug!(verb = %verb, "Config entry replaced");
            self.configs.insert(verb, config);
        }
        self
    }

    /// Replace the fallback config used when no adapter matches.
    ///
    /// `Unknown` is both a real verb and the universal fallback, so this
    /// also replaces the stored entry for [`ErrorVerb::Unknown`]; the two
    /// must stay in sync.
    pub fn set_default_config(&mut self, config: ErrorConfig) -> &mut Self {
        self.configs.insert(ErrorVerb::Unknown, config.clone());
        self.default_config = config;
        self
    }

    /// Append an adapter. Order is significant: first registered, first
    /// tried. Adapters cannot be removed for the lifetime of the handler.
    pub fn register_adapter(&mut self, adapter: impl ErrorAdapter + 'static) -> &mut Self {
        self.registry.register(Box::new(adapter));
        self
    }

    /// Replace the injected logging capability.
    pub fn set_logger(&mut self, logger: Arc<dyn Logger>) -> &mut Self {
        self.logger = logger;
        self
    }

    /// Set the severity threshold. [`LogLevel::None`] disables logging
    /// unconditionally, overriding [`set_log_all_errors`](Self::set_log_all_errors).
    pub fn set_log_level(&mut self, log_level: LogLevel) -> &mut Self {
        self.log_level = log_level;
        self
    }

    /// Log every handled error regardless of severity, unless the level is
    /// [`LogLevel::None`].
    pub fn set_log_all_errors(&mut self, log_all_errors: bool) -> &mut Self {
        self.log_all_errors = log_all_errors;
        self
    }

    /// Reading speed used by the display-duration heuristic, in words per
    /// second.
    pub fn set_reading_speed(&mut self, words_per_second: f64) -> &mut Self {
        self.reading_speed_wps = words_per_second;
        self
    }

    /// Stored config for a verb, falling back to the default config.
    pub fn config_for(&self, verb: ErrorVerb) -> &ErrorConfig {
        self.configs.get(&verb).unwrap_or(&self.default_config)
    }

    /// The fallback config used when no adapter matches.
    pub fn default_config(&self) -> &ErrorConfig {
        &self.default_config
    }

    /// Diagnostic names of registered adapters, in registration order.
    pub fn adapter_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    /// Handle a raw error end to end.
    ///
    /// Never fails: any input that no adapter claims classifies to
    /// [`ErrorVerb::Unknown`] and resolves to the default config. Metadata
    /// extraction failures are swallowed (metadata is omitted); logger and
    /// action panics propagate.
    pub async fn handle(&self, error: impl Into<anyhow::Error>) -> Report {
        let error = error.into();

        let verb = self.registry.classify(&error);
        let config = self.config_for(verb).clone();

        let duration_ms = config
            .duration_ms
            .unwrap_or_else(|| message_duration_ms(&config.message, self.reading_speed_wps));

        if self.should_log(config.severity) {
            let metadata = self.build_metadata(&config, verb, &error).await;
            let formatted = format!("[{verb}] {}", config.message);
            self.logger.log(config.severity, &formatted, &error, &metadata);
        }

        // Side effects run after logging; their failures are the caller's.
        if let Some(action) = config.action.as_ref() {
            action();
        }

        Report {
            message: config.message.clone(),
            verb,
            config,
            source: error,
            duration_ms,
        }
    }

    /// Named wrapper around [`handle`](Self::handle) for data-fetching hook
    /// integration. The returned handler additionally logs a name-tagged
    /// message with `queryName` merged into the metadata and invokes
    /// `on_error` with the raw error and the report.
    pub fn query_error_handler(
        &self,
        name: impl Into<String>,
        on_error: Option<QueryErrorCallback>,
    ) -> QueryErrorHandler<'_> {
        QueryErrorHandler {
            handler: self,
            name: name.into(),
            on_error,
        }
    }

    /// Logging gate: `None` short-circuits everything, then the
    /// log-all override, then the severity threshold.
    fn should_log(&self, severity: Severity) -> bool {
        if self.log_level == LogLevel::None {
            return false;
        }
        if self.log_all_errors {
            return true;
        }
        self.log_level.allows(severity)
    }

    /// Config metadata, then the verb, then whatever the matching adapter
    /// extracts; later entries win on key collision. Extraction failures
    /// degrade to omitted metadata.
    async fn build_metadata(
        &self,
        config: &ErrorConfig,
        verb: ErrorVerb,
        error: &anyhow::Error,
    ) -> Metadata {
        let mut metadata = config.metadata.clone();
        metadata.insert(
            "errorVerb".to_string(),
            serde_json::Value::String(verb.as_str().to_string()),
        );

        if let Some(adapter) = self.registry.matching(error) {
            match adapter.extract_metadata(error).await {
                Ok(extracted) => {
                    for (key, value) in extracted {
                        metadata.insert(key, value);
                    }
                }
                Err(extraction_error) => {
                    log_debug!(
                        adapter = adapter.name(),
                        error = %extraction_error,
                        "Metadata extraction failed, logging without adapter metadata"
                    );
                }
            }
        }

        metadata
    }
}

/// Closure-like wrapper returned by
/// [`ErrorHandler::query_error_handler`]; borrows the handler it was
/// created from.
pub struct QueryErrorHandler<'a> {
    handler: &'a ErrorHandler,
    name: String,
    on_error: Option<QueryErrorCallback>,
}

impl QueryErrorHandler<'_> {
    /// Handle a query failure: delegate to [`ErrorHandler::handle`], log a
    /// name-tagged message through the same logger, then invoke the
    /// optional callback.
    pub async fn handle(&self, error: impl Into<anyhow::Error>) -> Report {
        let report = self.handler.handle(error).await;

        let mut metadata = report.config.metadata.clone();
        metadata.insert(
            "errorVerb".to_string(),
            serde_json::Value::String(report.verb.as_str().to_string()),
        );
        metadata.insert(
            "queryName".to_string(),
            serde_json::Value::String(self.name.clone()),
        );

        let tagged = format!("Error in query [{}]: {}", self.name, report.message);
        self.handler
            .logger
            .log(report.config.severity, &tagged, &report.source, &metadata);

        if let Some(on_error) = self.on_error.as_ref() {
            on_error(&report.source, &report);
        }

        report
    }

    /// Name this handler tags its log entries with.
    pub fn name(&self) -> &str {
        &self.name
    }
}
