//! Built-in adapters.
//!
//! Each adapter recognizes one family of raw error shapes. None is
//! registered implicitly: callers register what they need, in the order
//! they want consulted.
//!
//! - [`ReqwestAdapter`] claims errors whose chain contains a
//!   `reqwest::Error` (requires the `reqwest` feature, on by default).
//! - [`HttpClientAdapter`] claims the crate's own transport-agnostic
//!   [`HttpClientError`] shape, which integrations build from whatever
//!   client they wrap.

pub mod http;
#[cfg(feature = "reqwest")]
pub mod reqwest;

pub use http::{HttpClientAdapter, HttpClientError};
#[cfg(feature = "reqwest")]
pub use self::reqwest::ReqwestAdapter;
