//! # hostdesk-payment-provider
//!
//! A unified payment-gateway abstraction library for reseller billing:
//! payment intents, customers, subscriptions, invoices and webhooks across
//! multiple processors.
//!
//! ## Supported Gateways
//!
//! | Gateway | Feature Flag | Amount Convention | Webhook Scheme |
//! |---------|-------------|-------------------|----------------|
//! | Stripe | `stripe` | minor units (cents) | HMAC-SHA256 |
//! | Paystack | `paystack` | minor units (kobo) | HMAC-SHA512 |
//! | Flutterwave | `flutterwave` | major units | verif-hash equality |
//! | Mobile Money | `mobile-money` | major units | HMAC-SHA256 |
//!
//! Callers always pass amounts in major units; each adapter converts to its
//! provider-native convention at the boundary and returns the native value
//! on [`PaymentIntent::amount`].
//!
//! ## Modes
//!
//! Every gateway is constructed in a fixed [`Mode`]: `test` serves canned
//! fixture responses with no network I/O, `live` performs real API calls.
//! [`PaymentGatewayFactory::switch_mode`] builds a second instance for the
//! other mode; both coexist in the registry under distinct keys.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hostdesk_payment_provider::{
//!     CreatePaymentIntentRequest, PaymentGateway, PaymentGatewayFactory, PaymentProvider,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let factory = PaymentGatewayFactory::new();
//!
//!     // A fully configured test gateway with canonical sandbox defaults
//!     let gateway = factory.create_test_gateway(PaymentProvider::Paystack)?;
//!     gateway.initialize().await?;
//!
//!     let intent = gateway
//!         .create_payment_intent(&CreatePaymentIntentRequest::new(100.0, "ngn"))
//!         .await?;
//!     println!("{} {} {}", intent.id, intent.amount, intent.currency);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Mobile money
//!
//! The aggregator gateway exposes network discovery and phone-initiated
//! charges through [`PaymentGateway::mobile_money()`]; other gateways return
//! `None` from that query. Feature availability (subscriptions, invoices,
//! refunds, ...) is centralized in the factory's per-provider defaults and
//! enforced with [`ProviderError::UnsupportedCapability`].

mod factory;
mod providers;
mod traits;
mod types;

// Re-export the shared core surface
pub use hostdesk_provider_core::{Mode, ProviderError, Result};

// Re-export factory and defaults
pub use factory::{PaymentGatewayFactory, test_defaults};

// Re-export the capability contracts
pub use traits::{MobileMoneyCapable, PaymentGateway};

// Re-export types
pub use types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, CreateSubscriptionRequest, Customer,
    GatewayFeatures, Invoice, InvoiceStatus, LiveKeys, MobileMoneyNetwork, PaymentConfig,
    PaymentIntent, PaymentIntentStatus, PaymentProvider, PhoneChargeRequest, Subscription,
    SubscriptionStatus, WebhookEvent, WebhookEventKind,
};

// Re-export concrete gateways (behind feature flags)
#[cfg(feature = "stripe")]
pub use providers::StripeGateway;

#[cfg(feature = "paystack")]
pub use providers::PaystackGateway;

#[cfg(feature = "flutterwave")]
pub use providers::FlutterwaveGateway;

#[cfg(feature = "mobile-money")]
pub use providers::MobileMoneyGateway;
