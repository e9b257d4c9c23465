//! Panel adapter factory/registry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hostdesk_provider_core::{ProviderError, Result};

use crate::traits::PanelProvider;
use crate::types::{PanelConfig, PanelMetadata};

#[cfg(feature = "cpanel")]
use crate::providers::CpanelAdapter;
#[cfg(feature = "hostinger")]
use crate::providers::HostingerAdapter;
#[cfg(feature = "plesk")]
use crate::providers::PleskAdapter;
#[cfg(feature = "spaceship")]
use crate::providers::SpaceshipAdapter;

type AdapterMap = HashMap<String, Arc<dyn PanelProvider>>;

/// Constructs, caches and retrieves panel adapters by identity.
///
/// One configured panel instance maps to at most one cached adapter; the
/// cache key is `"{panel_type}-{id}"`. The registry is an explicitly owned
/// object (construct one per application, or one per test) rather than
/// process-global state, and its cache is guarded so that two callers racing
/// to construct the same identity observe the same instance.
///
/// Adapters live until explicitly removed; there is no TTL.
pub struct PanelAdapterFactory {
    adapters: Mutex<AdapterMap>,
}

impl Default for PanelAdapterFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelAdapterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            adapters: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AdapterMap> {
        self.adapters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the cached adapter for this identity, constructing it on miss.
    ///
    /// Fails with [`ProviderError::UnsupportedProvider`] when the requested
    /// panel type's feature is not compiled in; never a silent default.
    pub fn create_adapter(&self, config: PanelConfig) -> Result<Arc<dyn PanelProvider>> {
        let key = config.cache_key();
        let mut adapters = self.lock();
        if let Some(existing) = adapters.get(&key) {
            return Ok(existing.clone());
        }

        let adapter: Arc<dyn PanelProvider> = match config.panel_type {
            #[cfg(feature = "cpanel")]
            crate::types::PanelType::Cpanel => Arc::new(CpanelAdapter::new(config)),
            #[cfg(feature = "plesk")]
            crate::types::PanelType::Plesk => Arc::new(PleskAdapter::new(config)),
            #[cfg(feature = "hostinger")]
            crate::types::PanelType::Hostinger => Arc::new(HostingerAdapter::new(config)),
            #[cfg(feature = "spaceship")]
            crate::types::PanelType::Spaceship => Arc::new(SpaceshipAdapter::new(config)),
            #[allow(unreachable_patterns)]
            _ => {
                return Err(ProviderError::UnsupportedProvider {
                    kind: config.panel_type.to_string(),
                });
            }
        };

        log::info!("[{key}] panel adapter created ({} mode)", adapter.mode());
        adapters.insert(key, adapter.clone());
        Ok(adapter)
    }

    /// Look up a cached adapter whose composite key contains `id`.
    ///
    /// Keys are `"{panel_type}-{id}"`, so both the bare instance id and the
    /// full key resolve. Keys are scanned in sorted order so lookups are
    /// deterministic when an id is ambiguous.
    #[must_use]
    pub fn get_adapter(&self, id: &str) -> Option<Arc<dyn PanelProvider>> {
        let adapters = self.lock();
        let mut keys: Vec<&String> = adapters.keys().collect();
        keys.sort();
        let key = keys.into_iter().find(|key| key.contains(id))?;
        adapters.get(key).cloned()
    }

    /// Evict the cached adapter whose key contains `id`.
    ///
    /// Returns whether an adapter was removed. A subsequent
    /// [`create_adapter()`](Self::create_adapter) builds a fresh instance.
    pub fn remove_adapter(&self, id: &str) -> bool {
        let mut adapters = self.lock();
        let mut keys: Vec<String> = adapters.keys().cloned().collect();
        keys.sort();
        match keys.into_iter().find(|key| key.contains(id)) {
            Some(key) => {
                adapters.remove(&key);
                log::info!("[{key}] panel adapter removed");
                true
            }
            None => false,
        }
    }

    /// Snapshot of the cache, keyed by composite cache key.
    ///
    /// The returned map is a defensive copy; mutating it does not affect the
    /// registry.
    #[must_use]
    pub fn get_all_adapters(&self) -> AdapterMap {
        self.lock().clone()
    }
}

/// Metadata for all panel providers enabled via feature flags.
///
/// Useful for building dynamic UIs that enumerate available panels and
/// their capabilities.
#[must_use]
pub fn get_all_panel_metadata() -> Vec<PanelMetadata> {
    vec![
        #[cfg(feature = "cpanel")]
        CpanelAdapter::metadata(),
        #[cfg(feature = "plesk")]
        PleskAdapter::metadata(),
        #[cfg(feature = "hostinger")]
        HostingerAdapter::metadata(),
        #[cfg(feature = "spaceship")]
        SpaceshipAdapter::metadata(),
    ]
}
