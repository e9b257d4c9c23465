use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Unified error type for all provider operations, panel and payment alike.
///
/// Variants carry the `provider` (and usually the `mode`) that produced the
/// error, so messages arrive at the caller already tagged for display and
/// logging. All variants are serializable for structured error reporting.
///
/// The taxonomy follows four groups:
///
/// - configuration errors ([`UnsupportedProvider`](Self::UnsupportedProvider),
///   [`MissingLiveKeys`](Self::MissingLiveKeys),
///   [`NoPriorConfiguration`](Self::NoPriorConfiguration),
///   [`MissingWebhookSecret`](Self::MissingWebhookSecret)), surfaced
///   immediately and never retried;
/// - capability errors ([`UnsupportedCapability`](Self::UnsupportedCapability)),
///   distinguishable so UIs can hide a feature instead of showing a generic
///   failure;
/// - transport/provider errors ([`NetworkError`](Self::NetworkError),
///   [`Timeout`](Self::Timeout), [`ApiError`](Self::ApiError),
///   [`NotFound`](Self::NotFound),
///   [`InvalidCredentials`](Self::InvalidCredentials)), logged and re-thrown;
///   retry policy belongs to the caller;
/// - decode errors ([`ParseError`](Self::ParseError),
///   [`SerializationError`](Self::SerializationError)).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// The requested provider kind is unknown or its feature is not compiled
    /// in. Factories fail with this rather than falling back to a default.
    UnsupportedProvider {
        /// The unrecognized provider kind string.
        kind: String,
    },

    /// An optional capability (cloud instances, subscriptions, ...) was
    /// invoked on an adapter that does not support it. Raised before any
    /// request is attempted.
    UnsupportedCapability {
        /// Provider that rejected the call.
        provider: String,
        /// Name of the unsupported capability group.
        capability: String,
    },

    /// A switch to live mode was requested without live keys.
    MissingLiveKeys {
        /// Provider the switch targeted.
        provider: String,
    },

    /// A mode switch found no existing configuration to derive from.
    NoPriorConfiguration {
        /// Provider the switch targeted.
        provider: String,
        /// Mode that was searched for prior configuration.
        mode: Mode,
    },

    /// Webhook verification was requested but no secret is configured.
    MissingWebhookSecret {
        /// Provider that produced the error.
        provider: String,
        /// Mode of the adapter instance.
        mode: Mode,
    },

    /// The provider rejected the configured credentials (HTTP 401/403).
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Mode of the adapter instance.
        mode: Mode,
        /// Original error body from the provider API, if available.
        raw_message: Option<String>,
    },

    /// A network-level failure (DNS resolution, connection refused, ...).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Mode of the adapter instance.
        mode: Mode,
        /// Error details.
        detail: String,
    },

    /// The live request exceeded its deadline.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Mode of the adapter instance.
        mode: Mode,
        /// Error details.
        detail: String,
    },

    /// The provider answered with a non-success status or error envelope.
    ApiError {
        /// Provider that produced the error.
        provider: String,
        /// Mode of the adapter instance.
        mode: Mode,
        /// HTTP status, when the failure came from the transport layer.
        /// `None` for envelope-level errors delivered with HTTP 200.
        status: Option<u16>,
        /// Raw error body or message from the provider.
        raw_message: String,
    },

    /// The requested resource does not exist (HTTP 404).
    NotFound {
        /// Provider that produced the error.
        provider: String,
        /// Mode of the adapter instance.
        mode: Mode,
        /// The endpoint or resource that was not found.
        resource: String,
    },

    /// The provider's response could not be decoded.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Mode of the adapter instance.
        mode: Mode,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request body could not be serialized.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Mode of the adapter instance.
        mode: Mode,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// Whether this error represents expected behavior (bad input, missing
    /// resource, unsupported feature), used for log leveling.
    ///
    /// `true` means log at `warn`, `false` at `error`.
    /// Keep this in sync when adding variants.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedProvider { .. }
                | Self::UnsupportedCapability { .. }
                | Self::MissingLiveKeys { .. }
                | Self::NoPriorConfiguration { .. }
                | Self::MissingWebhookSecret { .. }
                | Self::InvalidCredentials { .. }
                | Self::NotFound { .. }
        )
    }

    /// Whether this is a configuration error: surfaced to the caller
    /// immediately, never retried, never provider-originated.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedProvider { .. }
                | Self::MissingLiveKeys { .. }
                | Self::NoPriorConfiguration { .. }
                | Self::MissingWebhookSecret { .. }
        )
    }

    /// Whether this is a capability-unsupported error, so UIs can hide the
    /// feature instead of reporting a failure.
    #[must_use]
    pub fn is_capability(&self) -> bool {
        matches!(self, Self::UnsupportedCapability { .. })
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedProvider { kind } => {
                write!(f, "Unsupported provider kind: {kind}")
            }
            Self::UnsupportedCapability {
                provider,
                capability,
            } => {
                write!(f, "[{provider}] Capability not supported: {capability}")
            }
            Self::MissingLiveKeys { provider } => {
                write!(f, "[{provider}] Live keys are required to switch to live mode")
            }
            Self::NoPriorConfiguration { provider, mode } => {
                write!(f, "[{provider}] No prior {mode} configuration found")
            }
            Self::MissingWebhookSecret { provider, mode } => {
                write!(f, "[{provider}:{mode}] Webhook secret is not configured")
            }
            Self::InvalidCredentials {
                provider,
                mode,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}:{mode}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}:{mode}] Invalid credentials")
                }
            }
            Self::NetworkError {
                provider,
                mode,
                detail,
            } => {
                write!(f, "[{provider}:{mode}] Network error: {detail}")
            }
            Self::Timeout {
                provider,
                mode,
                detail,
            } => {
                write!(f, "[{provider}:{mode}] Request timeout: {detail}")
            }
            Self::ApiError {
                provider,
                mode,
                status,
                raw_message,
            } => {
                if let Some(status) = status {
                    write!(f, "[{provider}:{mode}] API error (HTTP {status}): {raw_message}")
                } else {
                    write!(f, "[{provider}:{mode}] API error: {raw_message}")
                }
            }
            Self::NotFound {
                provider,
                mode,
                resource,
            } => {
                write!(f, "[{provider}:{mode}] Resource '{resource}' not found")
            }
            Self::ParseError {
                provider,
                mode,
                detail,
            } => {
                write!(f, "[{provider}:{mode}] Parse error: {detail}")
            }
            Self::SerializationError {
                provider,
                mode,
                detail,
            } => {
                write!(f, "[{provider}:{mode}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unsupported_provider() {
        let e = ProviderError::UnsupportedProvider {
            kind: "webmin".to_string(),
        };
        assert_eq!(e.to_string(), "Unsupported provider kind: webmin");
    }

    #[test]
    fn display_unsupported_capability() {
        let e = ProviderError::UnsupportedCapability {
            provider: "cpanel".to_string(),
            capability: "cloud-instances".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[cpanel] Capability not supported: cloud-instances"
        );
    }

    #[test]
    fn display_missing_live_keys() {
        let e = ProviderError::MissingLiveKeys {
            provider: "stripe".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[stripe] Live keys are required to switch to live mode"
        );
    }

    #[test]
    fn display_no_prior_configuration() {
        let e = ProviderError::NoPriorConfiguration {
            provider: "paystack".to_string(),
            mode: Mode::Test,
        };
        assert_eq!(e.to_string(), "[paystack] No prior test configuration found");
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "plesk".to_string(),
            mode: Mode::Live,
            raw_message: Some("bad key".to_string()),
        };
        assert_eq!(e.to_string(), "[plesk:live] Invalid credentials: bad key");
    }

    #[test]
    fn display_invalid_credentials_without_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "plesk".to_string(),
            mode: Mode::Live,
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[plesk:live] Invalid credentials");
    }

    #[test]
    fn display_api_error_with_status() {
        let e = ProviderError::ApiError {
            provider: "hostinger".to_string(),
            mode: Mode::Live,
            status: Some(422),
            raw_message: "validation failed".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[hostinger:live] API error (HTTP 422): validation failed"
        );
    }

    #[test]
    fn display_api_error_without_status() {
        let e = ProviderError::ApiError {
            provider: "cpanel".to_string(),
            mode: Mode::Live,
            status: None,
            raw_message: "domain already exists".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[cpanel:live] API error: domain already exists"
        );
    }

    #[test]
    fn display_not_found() {
        let e = ProviderError::NotFound {
            provider: "spaceship".to_string(),
            mode: Mode::Live,
            resource: "/api/v1/domains/missing.com".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[spaceship:live] Resource '/api/v1/domains/missing.com' not found"
        );
    }

    #[test]
    fn display_timeout() {
        let e = ProviderError::Timeout {
            provider: "flutterwave".to_string(),
            mode: Mode::Live,
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[flutterwave:live] Request timeout: 30s elapsed");
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = ProviderError::NotFound {
            provider: "stripe".to_string(),
            mode: Mode::Live,
            resource: "pi_123".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"NotFound\""));
        assert!(json.contains("\"mode\":\"live\""));
    }

    #[test]
    fn deserialize_round_trip_all_variants() {
        let variants = vec![
            ProviderError::UnsupportedProvider { kind: "x".into() },
            ProviderError::UnsupportedCapability {
                provider: "p".into(),
                capability: "c".into(),
            },
            ProviderError::MissingLiveKeys { provider: "p".into() },
            ProviderError::NoPriorConfiguration {
                provider: "p".into(),
                mode: Mode::Test,
            },
            ProviderError::MissingWebhookSecret {
                provider: "p".into(),
                mode: Mode::Live,
            },
            ProviderError::InvalidCredentials {
                provider: "p".into(),
                mode: Mode::Live,
                raw_message: None,
            },
            ProviderError::NetworkError {
                provider: "p".into(),
                mode: Mode::Live,
                detail: "d".into(),
            },
            ProviderError::Timeout {
                provider: "p".into(),
                mode: Mode::Live,
                detail: "d".into(),
            },
            ProviderError::ApiError {
                provider: "p".into(),
                mode: Mode::Live,
                status: Some(500),
                raw_message: "m".into(),
            },
            ProviderError::NotFound {
                provider: "p".into(),
                mode: Mode::Live,
                resource: "r".into(),
            },
            ProviderError::ParseError {
                provider: "p".into(),
                mode: Mode::Test,
                detail: "d".into(),
            },
            ProviderError::SerializationError {
                provider: "p".into(),
                mode: Mode::Test,
                detail: "d".into(),
            },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: ProviderError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }

    #[test]
    fn taxonomy_helpers() {
        let config = ProviderError::MissingLiveKeys { provider: "p".into() };
        assert!(config.is_configuration());
        assert!(config.is_expected());
        assert!(!config.is_capability());

        let capability = ProviderError::UnsupportedCapability {
            provider: "p".into(),
            capability: "c".into(),
        };
        assert!(capability.is_capability());
        assert!(!capability.is_configuration());

        let transport = ProviderError::NetworkError {
            provider: "p".into(),
            mode: Mode::Live,
            detail: "d".into(),
        };
        assert!(!transport.is_expected());
        assert!(!transport.is_configuration());
    }
}
