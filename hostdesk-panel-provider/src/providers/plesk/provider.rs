//! Plesk `PanelProvider` trait implementation

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
    PROVIDER, PleskAdapter, PleskBackup, PleskCertificate, PleskClient, PleskDomain, PleskMailbox,
    PleskStatistics, PleskTask,
};

impl PleskAdapter {
    fn domain_to_info(domain: PleskDomain) -> DomainInfo {
        DomainInfo {
            id: domain.id.to_string(),
            name: domain.name,
            status: parse_domain_status(&domain.status),
            registrar: domain.registrar,
            expires_at: parse_datetime(domain.expiration_date.as_deref()),
            dns_records: domain
                .dns_records
                .into_iter()
                .map(|record| DnsRecordEntry {
                    name: record.host,
                    record_type: record.record_type,
                    value: record.value,
                    ttl: record.ttl,
                })
                .collect(),
            ssl: domain.certificate.map(Self::certificate_to_info),
        }
    }

    fn certificate_to_info(cert: PleskCertificate) -> SslInfo {
        SslInfo {
            domain: cert.domain,
            status: parse_ssl_status(&cert.status),
            issuer: cert.issuer,
            expires_at: parse_datetime(cert.expiration_date.as_deref()),
        }
    }

    fn client_to_info(client: PleskClient) -> HostingAccount {
        HostingAccount {
            id: client.id.to_string(),
            domain: client.domain,
            username: Some(client.login),
            plan: client.plan,
            status: parse_hosting_status(&client.status),
            disk_used_mb: client.disk_used_mb,
            disk_limit_mb: client.disk_limit_mb,
            bandwidth_used_mb: client.bandwidth_used_mb,
            bandwidth_limit_mb: client.bandwidth_limit_mb,
        }
    }

    fn mailbox_to_info(mailbox: PleskMailbox) -> EmailAccount {
        EmailAccount {
            id: mailbox.name.clone(),
            address: mailbox.name,
            quota_mb: mailbox.quota_mb,
            used_mb: mailbox.used_mb,
            created_at: parse_datetime(mailbox.created.as_deref()),
        }
    }

    fn backup_to_info(backup: PleskBackup) -> BackupInfo {
        BackupInfo {
            id: backup.id,
            backup_type: parse_backup_type(backup.backup_type.as_deref().unwrap_or("full")),
            status: parse_backup_status(&backup.status),
            created_at: parse_datetime(backup.created_at.as_deref()),
            size_mb: backup.size_mb,
        }
    }

    fn task_to_migration(task: PleskTask) -> MigrationTask {
        MigrationTask {
            id: task.id,
            status: parse_migration_status(&task.status),
            progress: task.progress.min(100),
            detail: task.detail,
        }
    }

    fn statistics_to_usage(stats: PleskStatistics) -> ResourceUsage {
        ResourceUsage {
            disk_used_mb: stats.disk_used_mb,
            disk_limit_mb: stats.disk_limit_mb,
            bandwidth_used_mb: stats.bandwidth_used_mb,
            bandwidth_limit_mb: stats.bandwidth_limit_mb,
            inodes_used: stats.inodes_used,
            cpu_percent: stats.cpu_percent,
            memory_percent: stats.memory_percent,
        }
    }
}

#[async_trait]
impl PanelProvider for PleskAdapter {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    fn panel_type(&self) -> PanelType {
        PanelType::Plesk
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
            id: PanelType::Plesk,
            name: "Plesk".to_string(),
            description: "Plesk Obsidian control panel (REST API v2)".to_string(),
            features: PanelFeatures {
                cloud_instances: false,
            },
        }
    }

    async fn authenticate(&self) -> Result<bool> {
        match self.get::<serde_json::Value>("/api/v2/server").await {
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
        match self.get::<serde_json::Value>("/api/v2/server").await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    async fn list_domains(&self) -> Result<Vec<DomainInfo>> {
        let domains: Vec<PleskDomain> = self.get("/api/v2/domains").await?;
        Ok(domains.into_iter().map(Self::domain_to_info).collect())
    }

    async fn get_domain(&self, domain: &str) -> Result<DomainInfo> {
        let endpoint = format!("/api/v2/domains/{}", urlencoding::encode(domain));
        let wire: PleskDomain = self.get(&endpoint).await?;
        Ok(Self::domain_to_info(wire))
    }

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<DomainInfo> {
        let body = json!({ "name": req.name, "nameservers": req.nameservers });
        let wire: PleskDomain = self.post("/api/v2/domains", body).await?;
        Ok(Self::domain_to_info(wire))
    }

    async fn update_dns(&self, domain: &str, records: &[DnsRecordEntry]) -> Result<OperationAck> {
        let body = json!({ "domain": domain, "records": records });
        self.put_ack("/api/v2/dns/records", body).await
    }

    async fn transfer_domain(&self, req: &TransferDomainRequest) -> Result<MigrationTask> {
        let body = json!({
            "domain": req.name,
            "auth_code": req.auth_code,
            "registrar": req.registrar,
        });
        let wire: PleskTask = self.post("/api/v2/domain-transfers", body).await?;
        Ok(Self::task_to_migration(wire))
    }

    async fn list_hosting_accounts(&self) -> Result<Vec<HostingAccount>> {
        let clients: Vec<PleskClient> = self.get("/api/v2/clients").await?;
        Ok(clients.into_iter().map(Self::client_to_info).collect())
    }

    async fn get_hosting_account(&self, account_id: &str) -> Result<HostingAccount> {
        let endpoint = format!("/api/v2/clients/{}", urlencoding::encode(account_id));
        let wire: PleskClient = self.get(&endpoint).await?;
        Ok(Self::client_to_info(wire))
    }

    async fn create_hosting_account(
        &self,
        req: &CreateHostingAccountRequest,
    ) -> Result<HostingAccount> {
        let body = json!({
            "login": req.username,
            "domain": req.domain,
            "plan": req.plan,
            "password": req.password,
            "email": req.contact_email,
        });
        let wire: PleskClient = self.post("/api/v2/clients", body).await?;
        Ok(Self::client_to_info(wire))
    }

    async fn suspend_account(&self, account_id: &str) -> Result<OperationAck> {
        let endpoint = format!("/api/v2/clients/{}/suspend", urlencoding::encode(account_id));
        self.post_ack(&endpoint, None).await
    }

    async fn unsuspend_account(&self, account_id: &str) -> Result<OperationAck> {
        let endpoint = format!(
            "/api/v2/clients/{}/activate",
            urlencoding::encode(account_id)
        );
        self.post_ack(&endpoint, None).await
    }

    async fn list_email_accounts(&self, domain: &str) -> Result<Vec<EmailAccount>> {
        let endpoint = format!("/api/v2/mail/addresses?domain={}", urlencoding::encode(domain));
        let mailboxes: Vec<PleskMailbox> = self.get(&endpoint).await?;
        Ok(mailboxes.into_iter().map(Self::mailbox_to_info).collect())
    }

    async fn create_email_account(&self, req: &CreateEmailAccountRequest) -> Result<EmailAccount> {
        let body = json!({
            "name": req.address,
            "password": req.password,
            "quota_mb": req.quota_mb,
        });
        let wire: PleskMailbox = self.post("/api/v2/mail/addresses", body).await?;
        Ok(Self::mailbox_to_info(wire))
    }

    async fn delete_email_account(&self, address: &str) -> Result<OperationAck> {
        let endpoint = format!("/api/v2/mail/addresses/{}", urlencoding::encode(address));
        self.delete_ack(&endpoint).await
    }

    async fn get_ssl_status(&self, domain: &str) -> Result<SslInfo> {
        let endpoint = format!(
            "/api/v2/domains/{}/certificates",
            urlencoding::encode(domain)
        );
        let wire: PleskCertificate = self.get(&endpoint).await?;
        Ok(Self::certificate_to_info(wire))
    }

    async fn install_ssl(&self, req: &InstallSslRequest) -> Result<SslInfo> {
        let endpoint = format!(
            "/api/v2/domains/{}/certificates",
            urlencoding::encode(&req.domain)
        );
        let body = json!({
            "certificate": req.certificate,
            "private_key": req.private_key,
        });
        let wire: PleskCertificate = self.post(&endpoint, body).await?;
        Ok(Self::certificate_to_info(wire))
    }

    async fn renew_ssl(&self, domain: &str) -> Result<SslInfo> {
        let endpoint = format!(
            "/api/v2/domains/{}/certificates/renew",
            urlencoding::encode(domain)
        );
        let wire: PleskCertificate = self.post(&endpoint, json!({})).await?;
        Ok(Self::certificate_to_info(wire))
    }

    async fn list_backups(&self) -> Result<Vec<BackupInfo>> {
        let backups: Vec<PleskBackup> = self.get("/api/v2/backups").await?;
        Ok(backups.into_iter().map(Self::backup_to_info).collect())
    }

    async fn create_backup(&self, backup_type: BackupType) -> Result<BackupInfo> {
        let wire: PleskBackup = self
            .post("/api/v2/backups", json!({ "type": backup_type }))
            .await?;
        Ok(Self::backup_to_info(wire))
    }

    async fn restore_backup(&self, backup_id: &str) -> Result<MigrationTask> {
        let endpoint = format!("/api/v2/backups/{}/restore", urlencoding::encode(backup_id));
        let wire: PleskTask = self.post(&endpoint, json!({})).await?;
        Ok(Self::task_to_migration(wire))
    }

    async fn get_resource_usage(&self, account_id: &str) -> Result<ResourceUsage> {
        let endpoint = format!(
            "/api/v2/clients/{}/statistics",
            urlencoding::encode(account_id)
        );
        let wire: PleskStatistics = self.get(&endpoint).await?;
        Ok(Self::statistics_to_usage(wire))
    }
}
