//! Hostinger panel adapter

mod http;
mod mock;
mod provider;
mod types;

use std::sync::atomic::AtomicBool;

use hostdesk_provider_core::ApiDispatcher;

use crate::types::PanelConfig;

pub(crate) use types::{
    HostingerAccount, HostingerBackup, HostingerDomain, HostingerEmail, HostingerInstance,
    HostingerSsl, HostingerTransfer, HostingerUsage,
};

pub(crate) const PROVIDER: &str = "hostinger";

/// Hostinger panel adapter.
///
/// Endpoints follow Hostinger's `/api/{area}/v1/...` layout. The only panel
/// in the family with cloud-VM support (`/api/vps/v1/virtual-machines`).
pub struct HostingerAdapter {
    pub(crate) config: PanelConfig,
    pub(crate) dispatcher: ApiDispatcher,
    pub(crate) ready: AtomicBool,
}

impl HostingerAdapter {
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
