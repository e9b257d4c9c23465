//! Plesk adapter test-mode suite.

mod common;

use common::test_config;
use hostdesk_panel_provider::{
    BackupStatus, BackupType, DomainStatus, HostingStatus, MigrationStatus, PanelAdapterFactory,
    PanelProvider, PanelType, SslStatus, TransferDomainRequest,
};
use std::sync::Arc;

fn plesk() -> Arc<dyn PanelProvider> {
    let factory = PanelAdapterFactory::new();
    factory
        .create_adapter(test_config(PanelType::Plesk, "srv-1"))
        .expect("plesk adapter")
}

#[tokio::test]
async fn authenticate_and_ready_flag() {
    let panel = plesk();
    assert!(require_ok!(panel.authenticate().await));
    assert!(panel.is_ready());
}

#[tokio::test]
async fn list_domains_maps_statuses() {
    let panel = plesk();
    let domains = require_ok!(panel.list_domains().await);
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].status, DomainStatus::Active);
    assert_eq!(domains[1].status, DomainStatus::Expired);
}

#[tokio::test]
async fn get_domain_uses_numeric_id_from_wire() {
    let panel = plesk();
    let domain = require_ok!(panel.get_domain("plesk-demo.net").await);
    assert_eq!(domain.id, "4201");
    assert_eq!(domain.name, "plesk-demo.net");
    let ssl = require_some!(domain.ssl);
    assert_eq!(ssl.status, SslStatus::Active);
}

#[tokio::test]
async fn clients_map_to_hosting_accounts() {
    let panel = plesk();
    let accounts = require_ok!(panel.list_hosting_accounts().await);
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].username.as_deref(), Some("jdoe"));
    assert_eq!(accounts[1].status, HostingStatus::Suspended);

    let detail = require_ok!(panel.get_hosting_account("101").await);
    assert_eq!(detail.id, "101");
}

#[tokio::test]
async fn suspend_and_activate_acknowledge() {
    let panel = plesk();
    assert!(require_ok!(panel.suspend_account("101").await).success);
    assert!(require_ok!(panel.unsuspend_account("101").await).success);
}

#[tokio::test]
async fn mailboxes_round_trip() {
    let panel = plesk();
    let mailboxes = require_ok!(panel.list_email_accounts("plesk-demo.net").await);
    assert_eq!(mailboxes.len(), 2);
    assert!(mailboxes[0].address.ends_with("@plesk-demo.net"));

    // DELETE /mail/addresses/... has no fixture: generic-ack fallback
    let ack = require_ok!(panel.delete_email_account("billing@plesk-demo.net").await);
    assert!(ack.success);
}

#[tokio::test]
async fn transfer_returns_queued_task() {
    let panel = plesk();
    let task = require_ok!(
        panel
            .transfer_domain(&TransferDomainRequest {
                name: "incoming.example".to_string(),
                auth_code: "epp".to_string(),
                registrar: Some("OpenSRS".to_string()),
            })
            .await
    );
    assert!(task.id.starts_with("task_"));
    assert_eq!(task.status, MigrationStatus::Pending);
}

#[tokio::test]
async fn backups_and_restore() {
    let panel = plesk();
    let backups = require_ok!(panel.list_backups().await);
    assert_eq!(backups.len(), 2);

    let started = require_ok!(panel.create_backup(BackupType::Full).await);
    assert_eq!(started.status, BackupStatus::InProgress);

    let restore = require_ok!(panel.restore_backup("backup_2025-05-18").await);
    assert_eq!(restore.status, MigrationStatus::InProgress);
}

#[tokio::test]
async fn statistics_include_cpu_and_memory() {
    let panel = plesk();
    let usage = require_ok!(panel.get_resource_usage("101").await);
    assert!(usage.cpu_percent.is_some());
    assert!(usage.memory_percent.is_some());
    assert!(usage.disk_used_mb <= usage.disk_limit_mb);
}

#[tokio::test]
async fn cloud_capability_is_absent() {
    let panel = plesk();
    assert!(panel.cloud().is_none());
    let err = panel.list_instances().await.unwrap_err();
    assert!(err.is_capability());
}
