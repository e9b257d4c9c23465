//! cPanel/WHM panel adapter

mod http;
mod mock;
mod provider;
mod types;

use std::sync::atomic::AtomicBool;

use hostdesk_provider_core::ApiDispatcher;

use crate::types::PanelConfig;

pub(crate) use types::{
    CpanelAccount, CpanelBackup, CpanelDomain, CpanelEmail, CpanelEnvelope, CpanelQuota,
    CpanelSsl, CpanelTransfer,
};

pub(crate) const PROVIDER: &str = "cpanel";

/// cPanel/WHM panel adapter.
///
/// Domain/email/SSL/backup operations use UAPI-style `/execute/...`
/// endpoints; reseller account management goes through WHM `/json-api/...`
/// endpoints. Both share the `{status, data, errors}` envelope.
pub struct CpanelAdapter {
    pub(crate) config: PanelConfig,
    pub(crate) dispatcher: ApiDispatcher,
    pub(crate) ready: AtomicBool,
}

impl CpanelAdapter {
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        let dispatcher = ApiDispatcher::new(
            PROVIDER,
            config.mode,
            config.api_url.clone(),
            config.api_key.clone(),
            config.username.clone(),
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
