//! cPanel adapter test-mode suite.
//!
//! Runs entirely against the adapter's fixture table; no network access.

mod common;

use common::test_config;
use hostdesk_panel_provider::{
    BackupStatus, BackupType, CreateDomainRequest, CreateEmailAccountRequest,
    CreateHostingAccountRequest, CreateInstanceRequest, DomainStatus, HostingStatus,
    InstallSslRequest, MigrationStatus, Mode, PanelAdapterFactory, PanelProvider, PanelType,
    ProviderError, SslStatus, TransferDomainRequest,
};
use std::sync::Arc;

fn cpanel() -> Arc<dyn PanelProvider> {
    let factory = PanelAdapterFactory::new();
    factory
        .create_adapter(test_config(PanelType::Cpanel, "p1"))
        .expect("cpanel adapter")
}

#[tokio::test]
async fn authenticate_marks_adapter_ready() {
    let panel = cpanel();
    assert!(!panel.is_ready());
    let ok = require_ok!(panel.authenticate().await);
    assert!(ok);
    assert!(panel.is_ready());
    assert_eq!(panel.mode(), Mode::Test);
}

#[tokio::test]
async fn validate_credentials_succeeds_in_test_mode() {
    let panel = cpanel();
    assert!(require_ok!(panel.validate_credentials().await));
}

#[tokio::test]
async fn list_domains_returns_the_single_active_example_domain() {
    let panel = cpanel();
    let domains = require_ok!(panel.list_domains().await);
    assert_eq!(domains.len(), 1);
    assert_eq!(domains[0].name, "example.com");
    assert_eq!(domains[0].status, DomainStatus::Active);
}

#[tokio::test]
async fn get_domain_is_fully_populated() {
    let panel = cpanel();
    let domain = require_ok!(panel.get_domain("example.com").await);
    assert_eq!(domain.name, "example.com");
    assert_eq!(domain.registrar.as_deref(), Some("Namecheap"));
    assert!(domain.expires_at.is_some());
    assert!(!domain.dns_records.is_empty());
    let ssl = require_some!(domain.ssl);
    assert_eq!(ssl.status, SslStatus::Active);
}

#[tokio::test]
async fn read_operations_are_pure() {
    let panel = cpanel();
    let first = require_ok!(panel.list_domains().await);
    let second = require_ok!(panel.list_domains().await);
    assert_eq!(first, second, "fixtures are pure functions of the endpoint");
}

#[tokio::test]
async fn create_domain_returns_pending_domain() {
    let panel = cpanel();
    let req = CreateDomainRequest {
        name: "parked.example.com".to_string(),
        nameservers: vec![],
    };
    let domain = require_ok!(panel.create_domain(&req).await);
    assert_eq!(domain.status, DomainStatus::Pending);
}

#[tokio::test]
async fn update_dns_acknowledges() {
    let panel = cpanel();
    let ack = require_ok!(panel.update_dns("example.com", &[]).await);
    assert!(ack.success);
}

#[tokio::test]
async fn transfer_domain_returns_pending_task() {
    let panel = cpanel();
    let req = TransferDomainRequest {
        name: "example.com".to_string(),
        auth_code: "epp-code".to_string(),
        registrar: None,
    };
    let task = require_ok!(panel.transfer_domain(&req).await);
    assert!(task.id.starts_with("mig_"));
    assert_eq!(task.status, MigrationStatus::Pending);
    assert!(task.progress <= 100);
}

#[tokio::test]
async fn hosting_account_statuses_are_in_set() {
    let panel = cpanel();
    let accounts = require_ok!(panel.list_hosting_accounts().await);
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].status, HostingStatus::Active);
    assert_eq!(accounts[1].status, HostingStatus::Suspended);
}

#[tokio::test]
async fn hosting_account_lifecycle() {
    let panel = cpanel();
    let account = require_ok!(panel.get_hosting_account("examplecom").await);
    assert_eq!(account.domain, "example.com");
    assert!(account.disk_used_mb <= account.disk_limit_mb);

    let created = require_ok!(
        panel
            .create_hosting_account(&CreateHostingAccountRequest {
                domain: "new-customer.example.org".to_string(),
                username: "newcustomer".to_string(),
                plan: "starter".to_string(),
                password: "hunter2hunter2".to_string(),
                contact_email: None,
            })
            .await
    );
    assert_eq!(created.status, HostingStatus::Active);

    assert!(require_ok!(panel.suspend_account("examplecom").await).success);
    assert!(require_ok!(panel.unsuspend_account("examplecom").await).success);
}

#[tokio::test]
async fn email_account_lifecycle() {
    let panel = cpanel();
    let emails = require_ok!(panel.list_email_accounts("example.com").await);
    assert_eq!(emails.len(), 2);

    let created = require_ok!(
        panel
            .create_email_account(&CreateEmailAccountRequest {
                address: "support@example.com".to_string(),
                password: "mailbox-pass".to_string(),
                quota_mb: 1024,
            })
            .await
    );
    assert_eq!(created.used_mb, 0);

    // delete_pop has no fixture: the documented generic-ack fallback covers it
    let ack = require_ok!(panel.delete_email_account("support@example.com").await);
    assert!(ack.success);
}

#[tokio::test]
async fn ssl_statuses_are_in_set() {
    let panel = cpanel();
    let status = require_ok!(panel.get_ssl_status("example.com").await);
    assert_eq!(status.status, SslStatus::Active);

    let installed = require_ok!(
        panel
            .install_ssl(&InstallSslRequest {
                domain: "example.com".to_string(),
                certificate: None,
                private_key: None,
            })
            .await
    );
    assert_eq!(installed.status, SslStatus::Active);

    let renewed = require_ok!(panel.renew_ssl("example.com").await);
    assert_eq!(renewed.status, SslStatus::Active);
    assert!(renewed.expires_at > status.expires_at);
}

#[tokio::test]
async fn backup_lifecycle() {
    let panel = cpanel();
    let backups = require_ok!(panel.list_backups().await);
    assert_eq!(backups.len(), 2);
    assert!(backups.iter().all(|b| b.status == BackupStatus::Completed));

    let started = require_ok!(panel.create_backup(BackupType::Full).await);
    assert_eq!(started.status, BackupStatus::InProgress);
    assert!(started.id.starts_with("bk_"));

    let restore = require_ok!(panel.restore_backup("bk_20250520").await);
    assert_eq!(restore.status, MigrationStatus::InProgress);
    assert!(restore.progress <= 100);
}

#[tokio::test]
async fn resource_usage_reports_quota() {
    let panel = cpanel();
    let usage = require_ok!(panel.get_resource_usage("examplecom").await);
    assert_eq!(usage.disk_used_mb, 512);
    assert_eq!(usage.disk_limit_mb, 10240);
    assert!(usage.inodes_used.is_some());
}

#[tokio::test]
async fn cloud_instances_are_unsupported() {
    let panel = cpanel();
    assert!(panel.cloud().is_none());

    let err = panel.list_instances().await.unwrap_err();
    assert!(
        matches!(&err, ProviderError::UnsupportedCapability { provider, .. } if provider == "cpanel"),
        "unexpected error: {err}"
    );
    assert!(err.is_capability());

    let err = panel
        .create_instance(&CreateInstanceRequest {
            name: "vm".to_string(),
            region: "eu".to_string(),
            image: "ubuntu-24.04".to_string(),
            plan: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_capability());

    let err = panel.delete_instance("vps_1").await.unwrap_err();
    assert!(err.is_capability());
}
