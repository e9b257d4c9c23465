use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use hostdesk_provider_core::Mode;

// ============ Provider Types ============

/// Identifies which payment gateway implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentProvider {
    /// Stripe. Requires feature `stripe`.
    #[cfg(feature = "stripe")]
    Stripe,
    /// Paystack. Requires feature `paystack`.
    #[cfg(feature = "paystack")]
    Paystack,
    /// Flutterwave. Requires feature `flutterwave`.
    #[cfg(feature = "flutterwave")]
    Flutterwave,
    /// Mobile-money aggregator. Requires feature `mobile-money`.
    #[cfg(feature = "mobile-money")]
    MobileMoney,
}

impl std::fmt::Display for PaymentProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "stripe")]
            Self::Stripe => write!(f, "stripe"),
            #[cfg(feature = "paystack")]
            Self::Paystack => write!(f, "paystack"),
            #[cfg(feature = "flutterwave")]
            Self::Flutterwave => write!(f, "flutterwave"),
            #[cfg(feature = "mobile-money")]
            Self::MobileMoney => write!(f, "mobile_money"),
        }
    }
}

// ============ Configuration ============

/// Per-gateway feature availability flags.
///
/// Defaults for each provider are centralized in
/// [`test_defaults()`](crate::test_defaults); adapters read these flags from
/// their config and never hardcode availability.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GatewayFeatures {
    pub subscriptions: bool,
    pub invoices: bool,
    pub refunds: bool,
    pub disputes: bool,
    pub payouts: bool,
    pub mobile_money: bool,
    pub bank_transfer: bool,
    pub cards: bool,
    pub ussd: bool,
}

/// Immutable configuration for one payment gateway instance.
///
/// Owned by the collaborator store; this library treats it as opaque,
/// read-only input. `(provider, mode)` is the gateway's identity in the
/// registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfig {
    pub provider: PaymentProvider,
    /// Publishable/public key.
    pub public_key: String,
    /// Secret key, sent as a bearer token on live calls.
    pub secret_key: String,
    /// Webhook signing secret, when the provider issues a dedicated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
    /// Fixed mode for gateways built from this record.
    pub mode: Mode,
    /// Uppercase ISO currency codes this gateway accepts.
    pub supported_currencies: Vec<String>,
    /// Uppercase ISO country codes this gateway serves.
    pub supported_countries: Vec<String>,
    pub features: GatewayFeatures,
    /// Per-instance deadline override for live requests, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl PaymentConfig {
    /// Registry cache key: `"{provider}-{mode}"`.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!("{}-{}", self.provider, self.mode)
    }

    #[must_use]
    pub fn supports_currency(&self, currency: &str) -> bool {
        self.supported_currencies
            .iter()
            .any(|c| c.eq_ignore_ascii_case(currency))
    }

    #[must_use]
    pub fn supports_country(&self, country: &str) -> bool {
        self.supported_countries
            .iter()
            .any(|c| c.eq_ignore_ascii_case(country))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Live credentials supplied when switching a provider to live mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveKeys {
    pub public_key: String,
    pub secret_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_secret: Option<String>,
}

// ============ Status Enums ============

/// Status of a payment intent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentIntentStatus {
    Pending,
    Processing,
    Successful,
    Failed,
    Cancelled,
    Refunded,
}

/// Status of a subscription.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Cancelled,
    PastDue,
    Trialing,
    Paused,
}

/// Status of an invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Void,
    Uncollectible,
}

// ============ Domain Objects ============

/// A normalized payment intent.
///
/// `amount` carries the provider-native convention: minor units for Stripe
/// and Paystack, major units for Flutterwave and Mobile Money. `currency`
/// is always uppercase ISO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub id: String,
    pub provider: PaymentProvider,
    pub amount: f64,
    pub currency: String,
    pub status: PaymentIntentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Hosted checkout URL, for providers that redirect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
}

/// A normalized customer record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A normalized subscription.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub customer_id: String,
    pub plan_id: String,
    pub status: SubscriptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A normalized invoice. `amount` follows the provider-native convention,
/// like [`PaymentIntent::amount`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Normalized webhook event kind. Provider event names outside the mapped
/// set surface as [`Other`](Self::Other) with the raw payload attached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEventKind {
    PaymentSucceeded,
    PaymentFailed,
    RefundCompleted,
    SubscriptionCreated,
    SubscriptionCancelled,
    InvoicePaid,
    InvoicePaymentFailed,
    Other,
}

/// A parsed, normalized webhook event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub kind: WebhookEventKind,
    /// Raw provider event payload.
    pub data: Value,
}

/// A mobile-money network reachable through the aggregator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MobileMoneyNetwork {
    pub id: String,
    pub name: String,
    /// Uppercase ISO country code.
    pub country: String,
    /// Uppercase ISO currency code.
    pub currency: String,
}

// ============ Request Types ============

/// Request to create a payment intent. `amount` is in major units; the
/// adapter converts at its boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    pub amount: f64,
    /// ISO currency code, any case.
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreatePaymentIntentRequest {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            metadata: None,
            customer_id: None,
            description: None,
        }
    }
}

/// Request to create a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Request to create a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionRequest {
    pub customer_id: String,
    pub plan_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
}

/// Request for a phone-initiated (push-to-phone) mobile-money charge.
/// `amount` is in major units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneChargeRequest {
    /// MSISDN in international format.
    pub phone_number: String,
    pub amount: f64,
    pub currency: String,
    /// Target network; when unset the aggregator routes by prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_display_matches_serde() {
        for provider in [
            PaymentProvider::Stripe,
            PaymentProvider::Paystack,
            PaymentProvider::Flutterwave,
            PaymentProvider::MobileMoney,
        ] {
            let json = serde_json::to_string(&provider).unwrap();
            assert_eq!(json, format!("\"{provider}\""));
        }
    }

    #[test]
    fn cache_key_is_provider_dash_mode() {
        let config = PaymentConfig {
            provider: PaymentProvider::Paystack,
            public_key: "pk".to_string(),
            secret_key: "sk".to_string(),
            webhook_secret: None,
            mode: Mode::Test,
            supported_currencies: vec!["NGN".to_string()],
            supported_countries: vec!["NG".to_string()],
            features: GatewayFeatures::default(),
            request_timeout_secs: None,
        };
        assert_eq!(config.cache_key(), "paystack-test");
    }

    #[test]
    fn currency_and_country_checks_ignore_case() {
        let config = PaymentConfig {
            provider: PaymentProvider::Stripe,
            public_key: "pk".to_string(),
            secret_key: "sk".to_string(),
            webhook_secret: None,
            mode: Mode::Test,
            supported_currencies: vec!["USD".to_string(), "EUR".to_string()],
            supported_countries: vec!["US".to_string()],
            features: GatewayFeatures::default(),
            request_timeout_secs: None,
        };
        assert!(config.supports_currency("usd"));
        assert!(!config.supports_currency("ngn"));
        assert!(config.supports_country("us"));
    }

    #[test]
    fn features_default_to_disabled() {
        let features = GatewayFeatures::default();
        assert!(!features.subscriptions);
        assert!(!features.mobile_money);
    }

    #[test]
    fn status_enums_serialize_to_spec_strings() {
        assert_eq!(
            serde_json::to_string(&PaymentIntentStatus::Successful).unwrap(),
            "\"successful\""
        );
        assert_eq!(
            serde_json::to_string(&SubscriptionStatus::PastDue).unwrap(),
            "\"past_due\""
        );
        assert_eq!(
            serde_json::to_string(&InvoiceStatus::Uncollectible).unwrap(),
            "\"uncollectible\""
        );
        assert_eq!(
            serde_json::to_string(&WebhookEventKind::PaymentSucceeded).unwrap(),
            "\"payment_succeeded\""
        );
    }

    #[test]
    fn payment_intent_round_trip() {
        let intent = PaymentIntent {
            id: "txn_abc123".to_string(),
            provider: PaymentProvider::Paystack,
            amount: 10_000.0,
            currency: "NGN".to_string(),
            status: PaymentIntentStatus::Pending,
            customer_id: None,
            metadata: None,
            created_at: None,
            checkout_url: Some("https://checkout.paystack.com/mock".to_string()),
        };
        let json = serde_json::to_string(&intent).unwrap();
        assert!(json.contains("\"checkoutUrl\""));
        let back: PaymentIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, intent);
    }
}
