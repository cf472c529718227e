//! Error verb taxonomy and severity levels.
//!
//! The verb set is the error-kind enumeration surfaced to callers. It is
//! closed and decoupled from any transport's status codes or exception
//! types; adapters translate raw errors into verbs.

use serde::{Deserialize, Serialize};

/// Semantic category a raw error is classified into.
///
/// Every verb has exactly one built-in default configuration (see
/// [`crate::defaults`]); adding a variant here without extending the
/// defaults table is a compile error because that table is an exhaustive
/// `match` over this enum.
///
/// # Example
///
/// ```rust
/// use uniform_error::ErrorVerb;
///
/// assert_eq!(ErrorVerb::from_http_status(404), ErrorVerb::NotFound);
/// assert_eq!(ErrorVerb::NotFound.as_str(), "not-found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorVerb {
    /// The requested resource does not exist (HTTP 404).
    NotFound,
    /// The caller is not authenticated (HTTP 401).
    Unauthorized,
    /// The caller is authenticated but not allowed (HTTP 403).
    Forbidden,
    /// The request was malformed (HTTP 400).
    BadRequest,
    /// The server failed to process the request (HTTP 5xx).
    ServerError,
    /// The request never produced a response (no status code).
    NetworkError,
    /// The request took too long (HTTP 408/504 or a client-side timeout).
    Timeout,
    /// The request conflicts with current server state (HTTP 409).
    Conflict,
    /// The caller is being throttled (HTTP 429).
    TooManyRequests,
    /// The request was well-formed but semantically invalid (HTTP 422).
    UnprocessableEntity,
    /// The request was cancelled before completion.
    Cancelled,
    /// Fallback when no adapter claims the error.
    Unknown,
}

impl ErrorVerb {
    /// Every verb in the taxonomy, in declaration order.
    pub const ALL: [ErrorVerb; 12] = [
        ErrorVerb::NotFound,
        ErrorVerb::Unauthorized,
        ErrorVerb::Forbidden,
        ErrorVerb::BadRequest,
        ErrorVerb::ServerError,
        ErrorVerb::NetworkError,
        ErrorVerb::Timeout,
        ErrorVerb::Conflict,
        ErrorVerb::TooManyRequests,
        ErrorVerb::UnprocessableEntity,
        ErrorVerb::Cancelled,
        ErrorVerb::Unknown,
    ];

    /// Kebab-case token for this verb, matching its serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorVerb::NotFound => "not-found",
            ErrorVerb::Unauthorized => "unauthorized",
            ErrorVerb::Forbidden => "forbidden",
            ErrorVerb::BadRequest => "bad-request",
            ErrorVerb::ServerError => "server-error",
            ErrorVerb::NetworkError => "network-error",
            ErrorVerb::Timeout => "timeout",
            ErrorVerb::Conflict => "conflict",
            ErrorVerb::TooManyRequests => "too-many-requests",
            ErrorVerb::UnprocessableEntity => "unprocessable-entity",
            ErrorVerb::Cancelled => "cancelled",
            ErrorVerb::Unknown => "unknown",
        }
    }

    /// Map an HTTP status code to a verb.
    ///
    /// Shared by the built-in adapters. Codes outside the table map to
    /// [`ErrorVerb::Unknown`]; the absence of a status code is a
    /// transport-level condition the adapters translate to
    /// [`ErrorVerb::NetworkError`] themselves.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => ErrorVerb::BadRequest,
            401 => ErrorVerb::Unauthorized,
            403 => ErrorVerb::Forbidden,
            404 => ErrorVerb::NotFound,
            408 | 504 => ErrorVerb::Timeout,
            409 => ErrorVerb::Conflict,
            422 => ErrorVerb::UnprocessableEntity,
            429 => ErrorVerb::TooManyRequests,
            500 | 501 | 502 | 503 => ErrorVerb::ServerError,
            _ => ErrorVerb::Unknown,
        }
    }
}

impl std::fmt::Display for ErrorVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging importance of a handled error.
///
/// Totally ordered: `Info < Warning < Error < Critical`. The ordering
/// drives the [`LogLevel`] threshold gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Expected failure, log for visibility only.
    Info,
    /// Unexpected but recoverable situation.
    Warning,
    /// Action failed but the application is stable.
    Error,
    /// The application is degraded or data is at risk.
    Critical,
}

/// Minimum severity an error must reach before the logger is invoked.
///
/// [`LogLevel::None`] is a hard override: nothing is logged, regardless of
/// the `log_all_errors` flag on the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Disable logging unconditionally.
    None,
    /// Log everything at `Info` and above.
    Info,
    /// Log `Warning` and above.
    Warning,
    /// Log `Error` and above. This is the default.
    Error,
    /// Log only `Critical`.
    Critical,
}

impl LogLevel {
    /// Whether an error of the given severity passes this threshold.
    pub fn allows(&self, severity: Severity) -> bool {
        let threshold = match self {
            LogLevel::None => return false,
            LogLevel::Info => Severity::Info,
            LogLevel::Warning => Severity::Warning,
            LogLevel::Error => Severity::Error,
            LogLevel::Critical => Severity::Critical,
        };
        severity >= threshold
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Error
    }
}
