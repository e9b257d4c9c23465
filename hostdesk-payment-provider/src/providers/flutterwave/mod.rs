//! Flutterwave payment gateway

mod http;
mod mock;
mod provider;
mod types;

use std::sync::atomic::AtomicBool;

use hostdesk_provider_core::ApiDispatcher;

use crate::types::PaymentConfig;

pub(crate) use types::{
    FlwCustomer, FlwEvent, FlwInvoice, FlwSubscription, FlwTransaction, FlutterwaveEnvelope,
};

pub(crate) const PROVIDER: &str = "flutterwave";
pub(crate) const API_BASE: &str = "https://api.flutterwave.com/v3";

/// Flutterwave payment gateway.
///
/// Responses are wrapped in a `{status: "success", message, data}` envelope.
/// Unlike Stripe/Paystack, amounts stay in major units on the wire.
#[derive(Debug)]
pub struct FlutterwaveGateway {
    pub(crate) config: PaymentConfig,
    pub(crate) dispatcher: ApiDispatcher,
    pub(crate) ready: AtomicBool,
}

impl FlutterwaveGateway {
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
