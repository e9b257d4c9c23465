//! Paystack payment gateway

mod http;
mod mock;
mod provider;
mod types;

use std::sync::atomic::AtomicBool;

use hostdesk_provider_core::ApiDispatcher;

use crate::types::PaymentConfig;

pub(crate) use types::{
    PaystackCustomer, PaystackEnvelope, PaystackEvent, PaystackInvoice, PaystackRefund,
    PaystackSubscription, PaystackTransaction,
};

pub(crate) const PROVIDER: &str = "paystack";
pub(crate) const API_BASE: &str = "https://api.paystack.co";

/// Paystack payment gateway.
///
/// Responses are wrapped in a `{status, message, data}` envelope; amounts
/// are converted to the smallest currency unit (kobo) at this boundary.
#[derive(Debug)]
pub struct PaystackGateway {
    pub(crate) config: PaymentConfig,
    pub(crate) dispatcher: ApiDispatcher,
    pub(crate) ready: AtomicBool,
}

impl PaystackGateway {
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
