//! Spaceship panel adapter

mod http;
mod mock;
mod provider;
mod types;

use std::sync::atomic::AtomicBool;

use hostdesk_provider_core::ApiDispatcher;

use crate::types::PanelConfig;

pub(crate) use types::{
    SpaceshipAccount, SpaceshipBackup, SpaceshipDomain, SpaceshipList, SpaceshipMailbox,
    SpaceshipSsl, SpaceshipTask, SpaceshipUsage,
};

pub(crate) const PROVIDER: &str = "spaceship";

/// Spaceship panel adapter.
///
/// Registrar-first provider: list endpoints page with `take`/`skip` and wrap
/// results in `{items, total}`.
pub struct SpaceshipAdapter {
    pub(crate) config: PanelConfig,
    pub(crate) dispatcher: ApiDispatcher,
    pub(crate) ready: AtomicBool,
}

impl SpaceshipAdapter {
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
