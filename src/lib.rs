//! # uniform-error
//!
//! Uniform classification and handling of heterogeneous HTTP client errors.
//!
//! ## Key Features
//!
//! - **Closed verb taxonomy**: every raw error resolves to one of twelve
//!   semantic categories, with `unknown` as the universal fallback
//! - **Pluggable adapters**: ordered, first-match classifiers translate any
//!   client library's error shape into a verb plus optional metadata
//! - **Layered configuration**: built-in defaults, per-verb overrides, and
//!   an instance default, replaceable at any time
//! - **Deterministic logging gate**: severity threshold with a log-all
//!   override and a hard-off level, against an injected logging capability
//! - **UI-ready reports**: message, severity, display duration, and an
//!   optional side-effect action per handled error
//!
//! ## Example
//!
//! ```rust
//! use uniform_error::adapters::{HttpClientAdapter, HttpClientError};
//! use uniform_error::{ErrorConfig, ErrorHandler, ErrorVerb, Severity};
//!
//! # async fn example() {
//! let mut handler = ErrorHandler::new();
//! handler
//!     .register_adapter(HttpClientAdapter)
//!     .configure([(
//!         ErrorVerb::Unauthorized,
//!         ErrorConfig::new("Session expired. Please sign in again")
//!             .with_severity(Severity::Warning),
//!     )]);
//!
//! let report = handler.handle(HttpClientError::status(401)).await;
//! assert_eq!(report.verb, ErrorVerb::Unauthorized);
//! assert_eq!(report.message, "Session expired. Please sign in again");
//! # }
//! ```

// Core types for the classification and configuration engine
pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod adapters;
pub mod defaults;
pub mod duration;
pub mod handler;
pub mod logger;
pub mod registry;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use handler::{ErrorHandler, QueryErrorCallback, QueryErrorHandler};
pub use logger::{LoggedCall, Logger, MemoryLogger, TracingLogger};
pub use registry::AdapterRegistry;

// Re-export core types
pub use core_types::{
    ConfigMap, ErrorAction, ErrorAdapter, ErrorConfig, ErrorVerb, LogLevel, Metadata, Report,
    Severity,
};

// Built-in adapters
pub use adapters::{HttpClientAdapter, HttpClientError};
#[cfg(feature = "reqwest")]
pub use adapters::ReqwestAdapter;

// Duration heuristic (pure utility)
pub use duration::message_duration_ms;
