//! Built-in default configuration for every verb in the taxonomy.

use crate::core_types::config::{ConfigMap, ErrorConfig};
use crate::core_types::verb::{ErrorVerb, Severity};

/// Built-in config for a single verb.
///
/// Exhaustive by construction: a verb added to [`ErrorVerb`] without an arm
/// here fails to compile, so every verb always resolves to a default.
pub fn default_config(verb: ErrorVerb) -> ErrorConfig {
    match verb {
        ErrorVerb::NotFound => ErrorConfig::new("The requested item could not be found")
            .with_severity(Severity::Warning),
        ErrorVerb::Unauthorized => {
            ErrorConfig::new("Your session has expired. Please sign in again")
                .with_severity(Severity::Warning)
        }
        ErrorVerb::Forbidden => {
            ErrorConfig::new("You do not have permission to perform this action")
                .with_severity(Severity::Warning)
        }
        ErrorVerb::BadRequest => ErrorConfig::new("The request could not be understood")
            .with_severity(Severity::Error),
        ErrorVerb::ServerError => {
            ErrorConfig::new("Something went wrong on our end. Please try again later")
                .with_severity(Severity::Error)
                .with_reportable(true)
        }
        ErrorVerb::NetworkError => {
            ErrorConfig::new("Unable to reach the server. Check your connection and try again")
                .with_severity(Severity::Warning)
        }
        ErrorVerb::Timeout => ErrorConfig::new("The request took too long. Please try again")
            .with_severity(Severity::Warning),
        ErrorVerb::Conflict => {
            ErrorConfig::new("This item was changed elsewhere. Refresh and try again")
                .with_severity(Severity::Warning)
        }
        ErrorVerb::TooManyRequests => {
            ErrorConfig::new("Too many requests. Please wait a moment and try again")
                .with_severity(Severity::Warning)
        }
        ErrorVerb::UnprocessableEntity => {
            ErrorConfig::new("Some fields contain invalid values. Check your input and try again")
                .with_severity(Severity::Warning)
        }
        ErrorVerb::Cancelled => {
            ErrorConfig::new("The request was cancelled").with_severity(Severity::Info)
        }
        ErrorVerb::Unknown => {
            ErrorConfig::new("An unexpected error occurred. Please try again")
                .with_severity(Severity::Error)
                .with_reportable(true)
        }
    }
}

/// The full built-in table, one entry per verb.
pub fn default_config_map() -> ConfigMap {
    ErrorVerb::ALL
        .iter()
        .map(|&verb| (verb, default_config(verb)))
        .collect()
}
