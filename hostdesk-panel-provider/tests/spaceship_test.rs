//! Spaceship adapter test-mode suite.

mod common;

use common::test_config;
use hostdesk_panel_provider::{
    BackupStatus, DomainStatus, MigrationStatus, PanelAdapterFactory, PanelProvider, PanelType,
    TransferDomainRequest,
};
use std::sync::Arc;

fn spaceship() -> Arc<dyn PanelProvider> {
    let factory = PanelAdapterFactory::new();
    factory
        .create_adapter(test_config(PanelType::Spaceship, "reg-1"))
        .expect("spaceship adapter")
}

#[tokio::test]
async fn paged_domain_list_unwraps_items() {
    let panel = spaceship();
    let domains = require_ok!(panel.list_domains().await);
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].name, "orbit-labs.io");
    assert_eq!(domains[0].registrar.as_deref(), Some("Spaceship"));
    assert_eq!(domains[1].status, DomainStatus::Transferring);
}

#[tokio::test]
async fn transfer_task_tracks_progress() {
    let panel = spaceship();
    let task = require_ok!(
        panel
            .transfer_domain(&TransferDomainRequest {
                name: "moonbase.dev".to_string(),
                auth_code: "epp".to_string(),
                registrar: None,
            })
            .await
    );
    assert_eq!(task.status, MigrationStatus::Pending);
    assert!(task.progress <= 100);
}

#[tokio::test]
async fn failed_backup_status_is_preserved() {
    let panel = spaceship();
    let backups = require_ok!(panel.list_backups().await);
    assert_eq!(backups.len(), 2);
    assert_eq!(backups[0].status, BackupStatus::Completed);
    assert_eq!(backups[1].status, BackupStatus::Failed);
}

#[tokio::test]
async fn hosting_and_email_round_trip() {
    let panel = spaceship();
    let accounts = require_ok!(panel.list_hosting_accounts().await);
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, "sh_301");

    let mailboxes = require_ok!(panel.list_email_accounts("orbit-labs.io").await);
    assert_eq!(mailboxes.len(), 1);

    let ack = require_ok!(panel.delete_email_account("crew@orbit-labs.io").await);
    assert!(ack.success);
}

#[tokio::test]
async fn cloud_capability_is_absent() {
    let panel = spaceship();
    assert!(panel.cloud().is_none());
    let err = panel.list_instances().await.unwrap_err();
    assert!(err.is_capability());
}
