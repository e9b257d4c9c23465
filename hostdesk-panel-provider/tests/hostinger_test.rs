//! Hostinger adapter test-mode suite, including the cloud capability.

mod common;

use common::test_config;
use hostdesk_panel_provider::{
    CreateInstanceRequest, DomainStatus, InstanceStatus, PanelAdapterFactory, PanelProvider,
    PanelType, SslStatus,
};
use std::sync::Arc;

fn hostinger() -> Arc<dyn PanelProvider> {
    let factory = PanelAdapterFactory::new();
    factory
        .create_adapter(test_config(PanelType::Hostinger, "acct-7"))
        .expect("hostinger adapter")
}

#[tokio::test]
async fn pending_transfer_maps_to_transferring() {
    let panel = hostinger();
    let domains = require_ok!(panel.list_domains().await);
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].status, DomainStatus::Active);
    assert_eq!(domains[1].status, DomainStatus::Transferring);
}

#[tokio::test]
async fn ssl_install_is_pending_until_issued() {
    let panel = hostinger();
    let installed = require_ok!(
        panel
            .install_ssl(&hostdesk_panel_provider::InstallSslRequest {
                domain: "hostinger-site.com".to_string(),
                certificate: None,
                private_key: None,
            })
            .await
    );
    assert_eq!(installed.status, SslStatus::Pending);

    let current = require_ok!(panel.get_ssl_status("hostinger-site.com").await);
    assert_eq!(current.status, SslStatus::Active);
}

#[tokio::test]
async fn usage_includes_cpu_and_inodes() {
    let panel = hostinger();
    let usage = require_ok!(panel.get_resource_usage("ha_1001").await);
    assert!(usage.inodes_used.is_some());
    assert!(usage.cpu_percent.is_some());
}

#[tokio::test]
async fn cloud_capability_is_present() {
    let panel = hostinger();
    assert!(panel.cloud().is_some());
}

#[tokio::test]
async fn instance_lifecycle() {
    let panel = hostinger();

    let instances = require_ok!(panel.list_instances().await);
    assert_eq!(instances.len(), 2);
    assert_eq!(instances[0].status, InstanceStatus::Running);
    assert_eq!(instances[1].status, InstanceStatus::Stopped);

    let created = require_ok!(
        panel
            .create_instance(&CreateInstanceRequest {
                name: "new-instance".to_string(),
                region: "eu-central".to_string(),
                image: "ubuntu-24.04".to_string(),
                plan: Some("kvm2".to_string()),
            })
            .await
    );
    assert_eq!(created.status, InstanceStatus::Provisioning);
    assert!(created.id.starts_with("vps_"));

    // DELETE has no fixture: generic-ack fallback
    let ack = require_ok!(panel.delete_instance("vps_5002").await);
    assert!(ack.success);
}

#[tokio::test]
async fn instance_reads_are_pure() {
    let panel = hostinger();
    let first = require_ok!(panel.list_instances().await);
    let second = require_ok!(panel.list_instances().await);
    assert_eq!(first, second);
}
