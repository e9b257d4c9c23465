//! Spaceship `PanelProvider` trait implementation

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use serde_json::json;

use hostdesk_provider_core::{Mode, Result};

use crate::providers::common::{
    parse_backup_status, parse_backup_type, parse_datetime, parse_domain_status,
    parse_hosting_status, parse_migration_status, parse_ssl_status,
};
use crate::traits::PanelProvider;
use crate::types::{
    BackupInfo, BackupType, CreateDomainRequest, CreateEmailAccountRequest,
    CreateHostingAccountRequest, DnsRecordEntry, DomainInfo, EmailAccount, HostingAccount,
    InstallSslRequest, MigrationTask, OperationAck, PanelConfig, PanelFeatures, PanelMetadata,
    PanelType, ResourceUsage, SslInfo, TransferDomainRequest,
};

use super::{
    PROVIDER, SpaceshipAccount, SpaceshipAdapter, SpaceshipBackup, SpaceshipDomain, SpaceshipList,
    SpaceshipMailbox, SpaceshipSsl, SpaceshipTask, SpaceshipUsage,
};

/// Default page size for domain listing.
const LIST_TAKE: u32 = 50;

impl SpaceshipAdapter {
    fn domain_to_info(domain: SpaceshipDomain) -> DomainInfo {
        DomainInfo {
            id: domain.name.clone(),
            name: domain.name,
            status: parse_domain_status(&domain.status),
            registrar: domain.registrar,
            expires_at: parse_datetime(domain.expiration_date.as_deref()),
            dns_records: domain
                .dns_records
                .into_iter()
                .map(|record| DnsRecordEntry {
                    name: record.name,
                    record_type: record.record_type,
                    value: record.value,
                    ttl: record.ttl,
                })
                .collect(),
            ssl: domain.ssl.map(Self::ssl_to_info),
        }
    }

    fn ssl_to_info(ssl: SpaceshipSsl) -> SslInfo {
        SslInfo {
            domain: ssl.domain,
            status: parse_ssl_status(&ssl.status),
            issuer: ssl.issuer,
            expires_at: parse_datetime(ssl.expiration_date.as_deref()),
        }
    }

    fn account_to_info(account: SpaceshipAccount) -> HostingAccount {
        HostingAccount {
            id: account.id,
            domain: account.domain,
            username: account.username,
            plan: account.plan,
            status: parse_hosting_status(&account.status),
            disk_used_mb: account.disk_used_mb,
            disk_limit_mb: account.disk_limit_mb,
            bandwidth_used_mb: account.bandwidth_used_mb,
            bandwidth_limit_mb: account.bandwidth_limit_mb,
        }
    }

    fn mailbox_to_info(mailbox: SpaceshipMailbox) -> EmailAccount {
        EmailAccount {
            id: mailbox.address.clone(),
            address: mailbox.address,
            quota_mb: mailbox.quota_mb,
            used_mb: mailbox.used_mb,
            created_at: parse_datetime(mailbox.created_at.as_deref()),
        }
    }

    fn backup_to_info(backup: SpaceshipBackup) -> BackupInfo {
        BackupInfo {
            id: backup.id,
            backup_type: parse_backup_type(backup.backup_type.as_deref().unwrap_or("full")),
            status: parse_backup_status(&backup.status),
            created_at: parse_datetime(backup.created_at.as_deref()),
            size_mb: backup.size_mb,
        }
    }

    fn task_to_migration(task: SpaceshipTask) -> MigrationTask {
        MigrationTask {
            id: task.id,
            status: parse_migration_status(&task.status),
            progress: task.progress.min(100),
            detail: task.detail,
        }
    }

    fn usage_to_info(usage: SpaceshipUsage) -> ResourceUsage {
        ResourceUsage {
            disk_used_mb: usage.disk_used_mb,
            disk_limit_mb: usage.disk_limit_mb,
            bandwidth_used_mb: usage.bandwidth_used_mb,
            bandwidth_limit_mb: usage.bandwidth_limit_mb,
            inodes_used: usage.inodes_used,
            cpu_percent: None,
            memory_percent: None,
        }
    }
}

#[async_trait]
impl PanelProvider for SpaceshipAdapter {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    fn panel_type(&self) -> PanelType {
        PanelType::Spaceship
    }

    fn mode(&self) -> Mode {
        self.config.mode
    }

    fn config(&self) -> &PanelConfig {
        &self.config
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn metadata() -> PanelMetadata {
        PanelMetadata {
            id: PanelType::Spaceship,
            name: "Spaceship".to_string(),
            description: "Spaceship registrar and hosting platform".to_string(),
            features: PanelFeatures {
                cloud_instances: false,
            },
        }
    }

    async fn authenticate(&self) -> Result<bool> {
        match self.get::<serde_json::Value>("/api/v1/account").await {
            Ok(_) => {
                self.ready.store(true, Ordering::Release);
                Ok(true)
            }
            Err(e) => {
                log::warn!("[{PROVIDER}:{}] authentication failed: {e}", self.config.mode);
                Ok(false)
            }
        }
    }

    async fn validate_credentials(&self) -> Result<bool> {
        match self.get::<serde_json::Value>("/api/v1/account").await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    async fn list_domains(&self) -> Result<Vec<DomainInfo>> {
        let endpoint = format!("/api/v1/domains?take={LIST_TAKE}&skip=0");
        let list: SpaceshipList<SpaceshipDomain> = self.get(&endpoint).await?;
        Ok(list.items.into_iter().map(Self::domain_to_info).collect())
    }

    async fn get_domain(&self, domain: &str) -> Result<DomainInfo> {
        let endpoint = format!("/api/v1/domains/{}", urlencoding::encode(domain));
        let wire: SpaceshipDomain = self.get(&endpoint).await?;
        Ok(Self::domain_to_info(wire))
    }

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<DomainInfo> {
        let body = json!({ "name": req.name, "nameservers": req.nameservers });
        let wire: SpaceshipDomain = self.post("/api/v1/domains", body).await?;
        Ok(Self::domain_to_info(wire))
    }

    async fn update_dns(&self, domain: &str, records: &[DnsRecordEntry]) -> Result<OperationAck> {
        let endpoint = format!("/api/v1/dns/records/{}", urlencoding::encode(domain));
        self.put_ack(&endpoint, json!({ "records": records })).await
    }

    async fn transfer_domain(&self, req: &TransferDomainRequest) -> Result<MigrationTask> {
        let endpoint = format!("/api/v1/domains/{}/transfer", urlencoding::encode(&req.name));
        let body = json!({ "authCode": req.auth_code, "registrar": req.registrar });
        let wire: SpaceshipTask = self.post(&endpoint, body).await?;
        Ok(Self::task_to_migration(wire))
    }

    async fn list_hosting_accounts(&self) -> Result<Vec<HostingAccount>> {
        let accounts: Vec<SpaceshipAccount> = self.get("/api/v1/hosting/accounts").await?;
        Ok(accounts.into_iter().map(Self::account_to_info).collect())
    }

    async fn get_hosting_account(&self, account_id: &str) -> Result<HostingAccount> {
        let endpoint = format!("/api/v1/hosting/accounts/{}", urlencoding::encode(account_id));
        let wire: SpaceshipAccount = self.get(&endpoint).await?;
        Ok(Self::account_to_info(wire))
    }

    async fn create_hosting_account(
        &self,
        req: &CreateHostingAccountRequest,
    ) -> Result<HostingAccount> {
        let body = json!({
            "domain": req.domain,
            "username": req.username,
            "plan": req.plan,
            "password": req.password,
            "contactEmail": req.contact_email,
        });
        let wire: SpaceshipAccount = self.post("/api/v1/hosting/accounts", body).await?;
        Ok(Self::account_to_info(wire))
    }

    async fn suspend_account(&self, account_id: &str) -> Result<OperationAck> {
        let endpoint = format!(
            "/api/v1/hosting/accounts/{}/suspend",
            urlencoding::encode(account_id)
        );
        self.post_ack(&endpoint, None).await
    }

    async fn unsuspend_account(&self, account_id: &str) -> Result<OperationAck> {
        let endpoint = format!(
            "/api/v1/hosting/accounts/{}/resume",
            urlencoding::encode(account_id)
        );
        self.post_ack(&endpoint, None).await
    }

    async fn list_email_accounts(&self, domain: &str) -> Result<Vec<EmailAccount>> {
        let endpoint = format!(
            "/api/v1/email/mailboxes?domain={}",
            urlencoding::encode(domain)
        );
        let mailboxes: Vec<SpaceshipMailbox> = self.get(&endpoint).await?;
        Ok(mailboxes.into_iter().map(Self::mailbox_to_info).collect())
    }

    async fn create_email_account(&self, req: &CreateEmailAccountRequest) -> Result<EmailAccount> {
        let body = json!({
            "address": req.address,
            "password": req.password,
            "quotaMb": req.quota_mb,
        });
        let wire: SpaceshipMailbox = self.post("/api/v1/email/mailboxes", body).await?;
        Ok(Self::mailbox_to_info(wire))
    }

    async fn delete_email_account(&self, address: &str) -> Result<OperationAck> {
        let endpoint = format!("/api/v1/email/mailboxes/{}", urlencoding::encode(address));
        self.delete_ack(&endpoint).await
    }

    async fn get_ssl_status(&self, domain: &str) -> Result<SslInfo> {
        let endpoint = format!("/api/v1/ssl/certificates/{}", urlencoding::encode(domain));
        let wire: SpaceshipSsl = self.get(&endpoint).await?;
        Ok(Self::ssl_to_info(wire))
    }

    async fn install_ssl(&self, req: &InstallSslRequest) -> Result<SslInfo> {
        let body = json!({
            "domain": req.domain,
            "certificate": req.certificate,
            "privateKey": req.private_key,
        });
        let wire: SpaceshipSsl = self.post("/api/v1/ssl/certificates", body).await?;
        Ok(Self::ssl_to_info(wire))
    }

    async fn renew_ssl(&self, domain: &str) -> Result<SslInfo> {
        let endpoint = format!(
            "/api/v1/ssl/certificates/{}/renew",
            urlencoding::encode(domain)
        );
        let wire: SpaceshipSsl = self.post(&endpoint, json!({})).await?;
        Ok(Self::ssl_to_info(wire))
    }

    async fn list_backups(&self) -> Result<Vec<BackupInfo>> {
        let backups: Vec<SpaceshipBackup> = self.get("/api/v1/backups").await?;
        Ok(backups.into_iter().map(Self::backup_to_info).collect())
    }

    async fn create_backup(&self, backup_type: BackupType) -> Result<BackupInfo> {
        let wire: SpaceshipBackup = self
            .post("/api/v1/backups", json!({ "type": backup_type }))
            .await?;
        Ok(Self::backup_to_info(wire))
    }

    async fn restore_backup(&self, backup_id: &str) -> Result<MigrationTask> {
        let endpoint = format!("/api/v1/backups/{}/restore", urlencoding::encode(backup_id));
        let wire: SpaceshipTask = self.post(&endpoint, json!({})).await?;
        Ok(Self::task_to_migration(wire))
    }

    async fn get_resource_usage(&self, account_id: &str) -> Result<ResourceUsage> {
        let endpoint = format!(
            "/api/v1/hosting/accounts/{}/usage",
            urlencoding::encode(account_id)
        );
        let wire: SpaceshipUsage = self.get(&endpoint).await?;
        Ok(Self::usage_to_info(wire))
    }
}
