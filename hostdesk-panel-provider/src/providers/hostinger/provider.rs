//! Hostinger `PanelProvider` and `CloudCapable` trait implementations

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use serde_json::json;

use hostdesk_provider_core::{Mode, Result};

use crate::providers::common::{
    parse_backup_status, parse_backup_type, parse_datetime, parse_domain_status,
    parse_hosting_status, parse_instance_status, parse_migration_status, parse_ssl_status,
};
use crate::traits::{CloudCapable, PanelProvider};
use crate::types::{
    BackupInfo, BackupType, CloudInstance, CreateDomainRequest, CreateEmailAccountRequest,
    CreateHostingAccountRequest, CreateInstanceRequest, DnsRecordEntry, DomainInfo, EmailAccount,
    HostingAccount, InstallSslRequest, MigrationTask, OperationAck, PanelConfig, PanelFeatures,
    PanelMetadata, PanelType, ResourceUsage, SslInfo, TransferDomainRequest,
};

use super::{
    HostingerAccount, HostingerAdapter, HostingerBackup, HostingerDomain, HostingerEmail,
    HostingerInstance, HostingerSsl, HostingerTransfer, HostingerUsage, PROVIDER,
};

impl HostingerAdapter {
    fn domain_to_info(domain: HostingerDomain) -> DomainInfo {
        DomainInfo {
            id: domain.domain.clone(),
            name: domain.domain,
            status: parse_domain_status(&domain.status),
            registrar: domain.registrar,
            expires_at: parse_datetime(domain.expires_at.as_deref()),
            dns_records: domain
                .dns_records
                .into_iter()
                .map(|record| DnsRecordEntry {
                    name: record.name,
                    record_type: record.record_type,
                    value: record.content,
                    ttl: record.ttl,
                })
                .collect(),
            ssl: domain.ssl.map(Self::ssl_to_info),
        }
    }

    fn ssl_to_info(ssl: HostingerSsl) -> SslInfo {
        SslInfo {
            domain: ssl.domain,
            status: parse_ssl_status(&ssl.status),
            issuer: ssl.issuer,
            expires_at: parse_datetime(ssl.expires_at.as_deref()),
        }
    }

    fn account_to_info(account: HostingerAccount) -> HostingAccount {
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

    fn email_to_info(email: HostingerEmail) -> EmailAccount {
        EmailAccount {
            id: email.address.clone(),
            address: email.address,
            quota_mb: email.quota_mb,
            used_mb: email.used_mb,
            created_at: parse_datetime(email.created_at.as_deref()),
        }
    }

    fn backup_to_info(backup: HostingerBackup) -> BackupInfo {
        BackupInfo {
            id: backup.id,
            backup_type: parse_backup_type(backup.backup_type.as_deref().unwrap_or("full")),
            status: parse_backup_status(&backup.status),
            created_at: parse_datetime(backup.created_at.as_deref()),
            size_mb: backup.size_mb,
        }
    }

    fn transfer_to_task(transfer: HostingerTransfer) -> MigrationTask {
        MigrationTask {
            id: transfer.id,
            status: parse_migration_status(&transfer.status),
            progress: transfer.progress.min(100),
            detail: transfer.detail,
        }
    }

    fn usage_to_info(usage: HostingerUsage) -> ResourceUsage {
        ResourceUsage {
            disk_used_mb: usage.disk_used_mb,
            disk_limit_mb: usage.disk_limit_mb,
            bandwidth_used_mb: usage.bandwidth_used_mb,
            bandwidth_limit_mb: usage.bandwidth_limit_mb,
            inodes_used: usage.inodes_used,
            cpu_percent: usage.cpu_percent,
            memory_percent: usage.memory_percent,
        }
    }

    fn instance_to_info(instance: HostingerInstance) -> CloudInstance {
        CloudInstance {
            id: instance.id,
            name: instance.name,
            status: parse_instance_status(&instance.status),
            region: instance.region,
            image: instance.image,
            ip_address: instance.ip_address,
        }
    }
}

#[async_trait]
impl PanelProvider for HostingerAdapter {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    fn panel_type(&self) -> PanelType {
        PanelType::Hostinger
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
            id: PanelType::Hostinger,
            name: "Hostinger".to_string(),
            description: "Hostinger hPanel hosting platform with VPS support".to_string(),
            features: PanelFeatures {
                cloud_instances: true,
            },
        }
    }

    async fn authenticate(&self) -> Result<bool> {
        match self.get::<serde_json::Value>("/api/account/v1/profile").await {
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
        match self.get::<serde_json::Value>("/api/account/v1/profile").await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    async fn list_domains(&self) -> Result<Vec<DomainInfo>> {
        let domains: Vec<HostingerDomain> = self.get("/api/domains/v1/portfolio").await?;
        Ok(domains.into_iter().map(Self::domain_to_info).collect())
    }

    async fn get_domain(&self, domain: &str) -> Result<DomainInfo> {
        let endpoint = format!("/api/domains/v1/portfolio/{}", urlencoding::encode(domain));
        let wire: HostingerDomain = self.get(&endpoint).await?;
        Ok(Self::domain_to_info(wire))
    }

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<DomainInfo> {
        let body = json!({ "domain": req.name, "nameservers": req.nameservers });
        let wire: HostingerDomain = self.post("/api/domains/v1/portfolio", body).await?;
        Ok(Self::domain_to_info(wire))
    }

    async fn update_dns(&self, domain: &str, records: &[DnsRecordEntry]) -> Result<OperationAck> {
        let endpoint = format!("/api/dns/v1/zones/{}", urlencoding::encode(domain));
        self.put_ack(&endpoint, json!({ "records": records })).await
    }

    async fn transfer_domain(&self, req: &TransferDomainRequest) -> Result<MigrationTask> {
        let body = json!({
            "domain": req.name,
            "authCode": req.auth_code,
            "registrar": req.registrar,
        });
        let wire: HostingerTransfer = self.post("/api/domains/v1/transfers", body).await?;
        Ok(Self::transfer_to_task(wire))
    }

    async fn list_hosting_accounts(&self) -> Result<Vec<HostingAccount>> {
        let accounts: Vec<HostingerAccount> = self.get("/api/hosting/v1/accounts").await?;
        Ok(accounts.into_iter().map(Self::account_to_info).collect())
    }

    async fn get_hosting_account(&self, account_id: &str) -> Result<HostingAccount> {
        let endpoint = format!("/api/hosting/v1/accounts/{}", urlencoding::encode(account_id));
        let wire: HostingerAccount = self.get(&endpoint).await?;
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
        let wire: HostingerAccount = self.post("/api/hosting/v1/accounts", body).await?;
        Ok(Self::account_to_info(wire))
    }

    async fn suspend_account(&self, account_id: &str) -> Result<OperationAck> {
        let endpoint = format!(
            "/api/hosting/v1/accounts/{}/suspend",
            urlencoding::encode(account_id)
        );
        self.post_ack(&endpoint, None).await
    }

    async fn unsuspend_account(&self, account_id: &str) -> Result<OperationAck> {
        let endpoint = format!(
            "/api/hosting/v1/accounts/{}/unsuspend",
            urlencoding::encode(account_id)
        );
        self.post_ack(&endpoint, None).await
    }

    async fn list_email_accounts(&self, domain: &str) -> Result<Vec<EmailAccount>> {
        let endpoint = format!("/api/email/v1/accounts?domain={}", urlencoding::encode(domain));
        let emails: Vec<HostingerEmail> = self.get(&endpoint).await?;
        Ok(emails.into_iter().map(Self::email_to_info).collect())
    }

    async fn create_email_account(&self, req: &CreateEmailAccountRequest) -> Result<EmailAccount> {
        let body = json!({
            "address": req.address,
            "password": req.password,
            "quotaMb": req.quota_mb,
        });
        let wire: HostingerEmail = self.post("/api/email/v1/accounts", body).await?;
        Ok(Self::email_to_info(wire))
    }

    async fn delete_email_account(&self, address: &str) -> Result<OperationAck> {
        let endpoint = format!("/api/email/v1/accounts/{}", urlencoding::encode(address));
        self.delete_ack(&endpoint).await
    }

    async fn get_ssl_status(&self, domain: &str) -> Result<SslInfo> {
        let endpoint = format!("/api/ssl/v1/certificates/{}", urlencoding::encode(domain));
        let wire: HostingerSsl = self.get(&endpoint).await?;
        Ok(Self::ssl_to_info(wire))
    }

    async fn install_ssl(&self, req: &InstallSslRequest) -> Result<SslInfo> {
        let body = json!({
            "domain": req.domain,
            "certificate": req.certificate,
            "privateKey": req.private_key,
        });
        let wire: HostingerSsl = self.post("/api/ssl/v1/certificates", body).await?;
        Ok(Self::ssl_to_info(wire))
    }

    async fn renew_ssl(&self, domain: &str) -> Result<SslInfo> {
        let wire: HostingerSsl = self
            .post(
                "/api/ssl/v1/certificates/renew",
                json!({ "domain": domain }),
            )
            .await?;
        Ok(Self::ssl_to_info(wire))
    }

    async fn list_backups(&self) -> Result<Vec<BackupInfo>> {
        let backups: Vec<HostingerBackup> = self.get("/api/backups/v1/snapshots").await?;
        Ok(backups.into_iter().map(Self::backup_to_info).collect())
    }

    async fn create_backup(&self, backup_type: BackupType) -> Result<BackupInfo> {
        let wire: HostingerBackup = self
            .post("/api/backups/v1/snapshots", json!({ "type": backup_type }))
            .await?;
        Ok(Self::backup_to_info(wire))
    }

    async fn restore_backup(&self, backup_id: &str) -> Result<MigrationTask> {
        let endpoint = format!(
            "/api/backups/v1/snapshots/{}/restore",
            urlencoding::encode(backup_id)
        );
        let wire: HostingerTransfer = self.post(&endpoint, json!({})).await?;
        Ok(Self::transfer_to_task(wire))
    }

    async fn get_resource_usage(&self, account_id: &str) -> Result<ResourceUsage> {
        let endpoint = format!(
            "/api/hosting/v1/accounts/{}/usage",
            urlencoding::encode(account_id)
        );
        let wire: HostingerUsage = self.get(&endpoint).await?;
        Ok(Self::usage_to_info(wire))
    }

    fn cloud(&self) -> Option<&dyn CloudCapable> {
        Some(self)
    }
}

#[async_trait]
impl CloudCapable for HostingerAdapter {
    async fn list_instances(&self) -> Result<Vec<CloudInstance>> {
        let instances: Vec<HostingerInstance> = self.get("/api/vps/v1/virtual-machines").await?;
        Ok(instances.into_iter().map(Self::instance_to_info).collect())
    }

    async fn create_instance(&self, req: &CreateInstanceRequest) -> Result<CloudInstance> {
        let body = json!({
            "name": req.name,
            "region": req.region,
            "image": req.image,
            "plan": req.plan,
        });
        let wire: HostingerInstance = self.post("/api/vps/v1/virtual-machines", body).await?;
        Ok(Self::instance_to_info(wire))
    }

    async fn delete_instance(&self, instance_id: &str) -> Result<OperationAck> {
        let endpoint = format!(
            "/api/vps/v1/virtual-machines/{}",
            urlencoding::encode(instance_id)
        );
        self.delete_ack(&endpoint).await
    }
}
