//! Shared HTTP plumbing for live-mode provider calls.
//!
//! Sending, logging and body reading are identical across providers; only
//! endpoint resolution and response decoding differ, and those stay with the
//! adapters. No retry or backoff lives here: retry policy belongs to the
//! caller of this library.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::mode::Mode;
use crate::utils::log_sanitizer::truncate_for_log;

/// Default connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with timeout configuration.
///
/// `request_timeout` overrides the default per-request deadline. Unbounded
/// live calls are the only real resource risk in this design, so every
/// client carries one.
#[must_use]
pub fn create_http_client(request_timeout: Option<Duration>) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout.unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)))
        .build()
        .expect("Failed to create HTTP client")
}

/// HTTP tool function set.
pub struct HttpUtils;

impl HttpUtils {
    /// Perform an HTTP request and return the status code and body text.
    ///
    /// Timeouts map to [`ProviderError::Timeout`], everything else at the
    /// transport layer to [`ProviderError::NetworkError`]. Status handling
    /// is left to the caller.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        provider: &str,
        mode: Mode,
        method: &str,
        endpoint: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider}:{mode}] {method} {endpoint}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider.to_string(),
                    mode,
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider.to_string(),
                    mode,
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{provider}:{mode}] Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider.to_string(),
                mode,
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{provider}:{mode}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Decode an already-parsed JSON value into the target type.
    ///
    /// Used by adapters to decode dispatcher output (fixture or live body)
    /// with provider/mode context on failure.
    pub fn parse_value<T>(
        value: serde_json::Value,
        provider: &str,
        mode: Mode,
    ) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_value(value).map_err(|e| ProviderError::ParseError {
            provider: provider.to_string(),
            mode,
            detail: e.to_string(),
        })
    }

    /// Parse a JSON response body into the target type.
    pub fn parse_json<T>(response_text: &str, provider: &str, mode: Mode) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{provider}:{mode}] JSON parse failed: {e}");
            log::error!(
                "[{provider}:{mode}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider.to_string(),
                mode,
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> =
            HttpUtils::parse_json(r#"{"x":42}"#, "acme", Mode::Test);
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> =
            HttpUtils::parse_json("not json", "acme", Mode::Live);
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
