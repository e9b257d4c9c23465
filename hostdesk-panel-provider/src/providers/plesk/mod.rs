//! Plesk panel adapter

mod http;
mod mock;
mod provider;
mod types;

use std::sync::atomic::AtomicBool;

use hostdesk_provider_core::ApiDispatcher;

use crate::types::PanelConfig;

pub(crate) use types::{
    PleskBackup, PleskCertificate, PleskClient, PleskDomain, PleskMailbox, PleskStatistics,
    PleskTask,
};

pub(crate) const PROVIDER: &str = "plesk";

/// Plesk panel adapter.
///
/// Talks to the Plesk REST API (`/api/v2/...`): plain JSON bodies, errors
/// carried by HTTP status. Long-running operations (transfers, restores)
/// come back as tasks.
pub struct PleskAdapter {
    pub(crate) config: PanelConfig,
    pub(crate) dispatcher: ApiDispatcher,
    pub(crate) ready: AtomicBool,
}

impl PleskAdapter {
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
