//! Stripe payment gateway

mod http;
mod mock;
mod provider;
mod types;

use std::sync::atomic::AtomicBool;

use hostdesk_provider_core::ApiDispatcher;

use crate::types::PaymentConfig;

pub(crate) use types::{
    StripeCustomer, StripeEvent, StripeInvoice, StripeList, StripePaymentIntent, StripeRefund,
    StripeSubscription,
};

pub(crate) const PROVIDER: &str = "stripe";
pub(crate) const API_BASE: &str = "https://api.stripe.com";

/// Stripe payment gateway.
///
/// Amounts are converted to minor units (cents) at this boundary; wire
/// currencies are lowercase and normalized to uppercase on the way out.
#[derive(Debug)]
pub struct StripeGateway {
    pub(crate) config: PaymentConfig,
    pub(crate) dispatcher: ApiDispatcher,
    pub(crate) ready: AtomicBool,
}

impl StripeGateway {
    #[must_use]
    pub fn new(config: PaymentConfig) -> Self {
        let dispatcher = ApiDispatcher::new(
            PROVIDER,
            config.mode,
            API_BASE,
            config.secret_key.clone(),
            None,
            mock::lookup,
            config.request_timeout(),
        );
        Self {
            config,
            dispatcher,
            ready: AtomicBool::new(false),
        }
    }
}
