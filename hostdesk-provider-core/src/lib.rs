//! # hostdesk-provider-core
//!
//! Shared plumbing for the hostdesk provider adapter families
//! ([`hostdesk-panel-provider`] and [`hostdesk-payment-provider`]):
//!
//! - [`Mode`]: the fixed test/live mode of an adapter instance
//! - [`ProviderError`] / [`Result`]: the unified error type both families
//!   surface to callers
//! - [`ApiDispatcher`]: the single perform-call primitive that routes an
//!   operation to either a canned fixture (test mode) or a real HTTP
//!   request (live mode)
//! - id generation and log sanitization utilities
//!
//! This crate carries no provider knowledge of its own; concrete adapters
//! supply their endpoint tables and wire types in the family crates.
//!
//! [`hostdesk-panel-provider`]: https://github.com/hostdesk/hostdesk
//! [`hostdesk-payment-provider`]: https://github.com/hostdesk/hostdesk

mod dispatch;
mod error;
mod http;
mod mode;
mod utils;

pub use dispatch::{ApiDispatcher, MockLookup, generic_ack};
pub use error::{ProviderError, Result};
pub use http::{HttpUtils, create_http_client};
pub use mode::Mode;
pub use utils::{id, log_sanitizer};

// Re-exported so family crates can name request verbs without a direct
// reqwest dependency.
pub use reqwest::Method;
