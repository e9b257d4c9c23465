//! Shared helpers for payment gateway implementations.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use hostdesk_provider_core::{ProviderError, Result};

use crate::types::{InvoiceStatus, PaymentIntentStatus, SubscriptionStatus};

type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

// ============ Webhook signatures ============

pub(crate) fn hmac_sha256_hex(secret: &[u8], payload: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

pub(crate) fn hmac_sha512_hex(secret: &[u8], payload: &[u8]) -> String {
    let mut mac = HmacSha512::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

// ============ Feature gating ============

/// Enforce a feature flag from the gateway's config. Availability is
/// centralized in the factory defaults; adapters only ever consult their
/// config through this guard, before any request is attempted.
pub(crate) fn ensure_feature(provider: &str, feature: &str, enabled: bool) -> Result<()> {
    if enabled {
        Ok(())
    } else {
        Err(ProviderError::UnsupportedCapability {
            provider: provider.to_string(),
            capability: feature.to_string(),
        })
    }
}

// ============ Timestamps ============

/// Parse an RFC 3339 timestamp, tolerating absent or malformed values.
pub(crate) fn parse_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Convert a unix-seconds timestamp (Stripe style) to a datetime.
pub(crate) fn timestamp_to_datetime(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
}

// ============ Status parsing ============

// Parsers are total: unrecognized provider strings degrade to a documented
// in-set default, so gateways can never emit an out-of-set status.

pub(crate) fn parse_intent_status(status: &str) -> PaymentIntentStatus {
    match status.to_ascii_lowercase().as_str() {
        "processing" | "in_progress" | "ongoing" => PaymentIntentStatus::Processing,
        "success" | "successful" | "succeeded" | "paid" | "completed" => {
            PaymentIntentStatus::Successful
        }
        "failed" | "declined" | "error" => PaymentIntentStatus::Failed,
        "cancelled" | "canceled" | "abandoned" | "expired" => PaymentIntentStatus::Cancelled,
        "refunded" | "reversed" => PaymentIntentStatus::Refunded,
        // includes "pending" and Stripe's requires_* family
        _ => PaymentIntentStatus::Pending,
    }
}

/// Refund endpoints report success with words like `processed`; map those
/// onto the refunded intent status.
pub(crate) fn parse_refund_status(status: &str) -> PaymentIntentStatus {
    match status.to_ascii_lowercase().as_str() {
        "pending" | "processing" => PaymentIntentStatus::Processing,
        "failed" | "declined" | "error" => PaymentIntentStatus::Failed,
        _ => PaymentIntentStatus::Refunded,
    }
}

pub(crate) fn parse_subscription_status(status: &str) -> SubscriptionStatus {
    match status.to_ascii_lowercase().as_str() {
        "active" => SubscriptionStatus::Active,
        "trialing" | "trial" => SubscriptionStatus::Trialing,
        "cancelled" | "canceled" | "complete" | "completed" | "disabled" => {
            SubscriptionStatus::Cancelled
        }
        "paused" | "non-renewing" => SubscriptionStatus::Paused,
        // includes past_due, unpaid, incomplete
        _ => SubscriptionStatus::PastDue,
    }
}

pub(crate) fn parse_invoice_status(status: &str) -> InvoiceStatus {
    match status.to_ascii_lowercase().as_str() {
        "draft" => InvoiceStatus::Draft,
        "paid" | "success" | "successful" => InvoiceStatus::Paid,
        "void" | "cancelled" | "canceled" => InvoiceStatus::Void,
        "uncollectible" => InvoiceStatus::Uncollectible,
        // includes open, pending, unpaid
        _ => InvoiceStatus::Open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_sha256_is_hex_of_expected_length() {
        let digest = hmac_sha256_hex(b"secret", b"payload");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn hmac_sha512_is_hex_of_expected_length() {
        let digest = hmac_sha512_hex(b"secret", b"payload");
        assert_eq!(digest.len(), 128);
    }

    #[test]
    fn hmac_is_deterministic_and_key_sensitive() {
        assert_eq!(
            hmac_sha256_hex(b"k", b"data"),
            hmac_sha256_hex(b"k", b"data")
        );
        assert_ne!(
            hmac_sha256_hex(b"k1", b"data"),
            hmac_sha256_hex(b"k2", b"data")
        );
    }

    #[test]
    fn ensure_feature_passes_and_blocks() {
        assert!(ensure_feature("stripe", "refunds", true).is_ok());
        let err = ensure_feature("mobile_money", "subscriptions", false).unwrap_err();
        assert!(err.is_capability());
    }

    #[test]
    fn intent_status_mappings() {
        assert_eq!(parse_intent_status("succeeded"), PaymentIntentStatus::Successful);
        assert_eq!(
            parse_intent_status("requires_payment_method"),
            PaymentIntentStatus::Pending
        );
        assert_eq!(parse_intent_status("abandoned"), PaymentIntentStatus::Cancelled);
        assert_eq!(parse_intent_status("reversed"), PaymentIntentStatus::Refunded);
    }

    #[test]
    fn refund_status_defaults_to_refunded() {
        assert_eq!(parse_refund_status("processed"), PaymentIntentStatus::Refunded);
        assert_eq!(parse_refund_status("processing"), PaymentIntentStatus::Processing);
        assert_eq!(parse_refund_status("failed"), PaymentIntentStatus::Failed);
    }

    #[test]
    fn subscription_status_unknown_degrades_to_past_due() {
        assert_eq!(
            parse_subscription_status("incomplete"),
            SubscriptionStatus::PastDue
        );
        assert_eq!(
            parse_subscription_status("non-renewing"),
            SubscriptionStatus::Paused
        );
        assert_eq!(
            parse_subscription_status("disabled"),
            SubscriptionStatus::Cancelled
        );
    }

    #[test]
    fn invoice_status_unknown_degrades_to_open() {
        assert_eq!(parse_invoice_status("awaiting"), InvoiceStatus::Open);
        assert_eq!(parse_invoice_status("success"), InvoiceStatus::Paid);
    }

    #[test]
    fn timestamp_conversion() {
        let dt = timestamp_to_datetime(Some(1_748_736_000));
        assert!(dt.is_some());
        assert!(timestamp_to_datetime(None).is_none());
    }
}
