//! Panel factory/registry behavior.

mod common;

use std::sync::Arc;

use common::test_config;
use hostdesk_panel_provider::{
    PanelAdapterFactory, PanelProvider, PanelType, get_all_panel_metadata,
};

#[test]
fn create_adapter_caches_by_identity() {
    let factory = PanelAdapterFactory::new();
    let first = require_ok!(factory.create_adapter(test_config(PanelType::Cpanel, "p1")));
    let second = require_ok!(factory.create_adapter(test_config(PanelType::Cpanel, "p1")));
    assert!(
        Arc::ptr_eq(&first, &second),
        "same identity must return the same cached instance"
    );
}

#[test]
fn remove_then_create_returns_fresh_instance() {
    let factory = PanelAdapterFactory::new();
    let first = require_ok!(factory.create_adapter(test_config(PanelType::Plesk, "p2")));
    assert!(factory.remove_adapter("p2"));
    let second = require_ok!(factory.create_adapter(test_config(PanelType::Plesk, "p2")));
    assert!(
        !Arc::ptr_eq(&first, &second),
        "removal must evict the cached instance"
    );
}

#[test]
fn remove_unknown_id_is_noop() {
    let factory = PanelAdapterFactory::new();
    assert!(!factory.remove_adapter("nope"));
}

#[test]
fn distinct_identities_get_distinct_instances() {
    let factory = PanelAdapterFactory::new();
    let a = require_ok!(factory.create_adapter(test_config(PanelType::Cpanel, "a")));
    let b = require_ok!(factory.create_adapter(test_config(PanelType::Cpanel, "b")));
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn get_adapter_matches_bare_id_and_full_key() {
    let factory = PanelAdapterFactory::new();
    require_ok!(factory.create_adapter(test_config(PanelType::Hostinger, "site-9")));
    let by_id = require_some!(factory.get_adapter("site-9"));
    assert_eq!(by_id.id(), "hostinger");
    let by_key = require_some!(factory.get_adapter("hostinger-site-9"));
    assert_eq!(by_key.id(), "hostinger");
    assert!(factory.get_adapter("missing").is_none());
}

#[test]
fn get_all_adapters_is_a_defensive_copy() {
    let factory = PanelAdapterFactory::new();
    require_ok!(factory.create_adapter(test_config(PanelType::Spaceship, "s1")));
    let mut snapshot = factory.get_all_adapters();
    assert_eq!(snapshot.len(), 1);
    snapshot.clear();
    assert!(
        factory.get_adapter("s1").is_some(),
        "mutating the snapshot must not touch the registry"
    );
}

#[test]
fn metadata_lists_all_enabled_panels() {
    let metadata = get_all_panel_metadata();
    assert_eq!(metadata.len(), 4);
    let hostinger = require_some!(
        metadata
            .iter()
            .find(|entry| entry.id == PanelType::Hostinger)
    );
    assert!(hostinger.features.cloud_instances);
    let cpanel = require_some!(metadata.iter().find(|entry| entry.id == PanelType::Cpanel));
    assert!(!cpanel.features.cloud_instances);
}
