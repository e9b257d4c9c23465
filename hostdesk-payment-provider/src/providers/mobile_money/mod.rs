//! Mobile-money aggregator payment gateway

mod http;
mod mock;
mod provider;
mod types;

use std::sync::atomic::AtomicBool;

use hostdesk_provider_core::ApiDispatcher;

use crate::types::PaymentConfig;

pub(crate) use types::{MmCollection, MmCustomer, MmEvent, MmNetwork};

pub(crate) const PROVIDER: &str = "mobile_money";
pub(crate) const API_BASE: &str = "https://api.momohub.africa/v1";

/// Mobile-money aggregator gateway.
///
/// Wraps a push-to-phone collections API spanning several carrier networks.
/// Amounts stay in major units; subscriptions and invoices are not offered
/// by the aggregator and are disabled through the factory defaults.
#[derive(Debug)]
pub struct MobileMoneyGateway {
    pub(crate) config: PaymentConfig,
    pub(crate) dispatcher: ApiDispatcher,
    pub(crate) ready: AtomicBool,
}

impl MobileMoneyGateway {
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
