//! cPanel `PanelProvider` trait implementation

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use serde_json::json;

use hostdesk_provider_core::{Mode, Result};

use crate::providers::common::{
    parse_backup_status, parse_backup_type, parse_datetime, parse_domain_status,
    parse_migration_status, parse_ssl_status,
};
use crate::traits::PanelProvider;
use crate::types::{
    BackupInfo, BackupType, CreateDomainRequest, CreateEmailAccountRequest,
    CreateHostingAccountRequest, DnsRecordEntry, DomainInfo, EmailAccount, HostingAccount,
    HostingStatus, InstallSslRequest, MigrationTask, OperationAck, PanelConfig, PanelFeatures,
    PanelMetadata, PanelType, ResourceUsage, SslInfo, TransferDomainRequest,
};

use super::{
    CpanelAccount, CpanelAdapter, CpanelBackup, CpanelDomain, CpanelEmail, CpanelQuota, CpanelSsl,
    CpanelTransfer, PROVIDER,
};

impl CpanelAdapter {
    /// cPanel addresses domains by name, so the name doubles as the id.
    fn domain_to_info(domain: CpanelDomain) -> DomainInfo {
        DomainInfo {
            id: domain.domain.clone(),
            name: domain.domain,
            status: parse_domain_status(&domain.status),
            registrar: domain.registrar,
            expires_at: parse_datetime(domain.expires_on.as_deref()),
            dns_records: domain
                .dns_records
                .into_iter()
                .map(|record| DnsRecordEntry {
                    name: record.name,
                    record_type: record.record_type,
                    value: record.record,
                    ttl: record.ttl,
                })
                .collect(),
            ssl: domain.ssl.map(Self::ssl_to_info),
        }
    }

    fn ssl_to_info(ssl: CpanelSsl) -> SslInfo {
        SslInfo {
            domain: ssl.domain,
            status: parse_ssl_status(&ssl.status),
            issuer: ssl.issuer,
            expires_at: parse_datetime(ssl.not_after.as_deref()),
        }
    }

    fn account_to_info(account: CpanelAccount) -> HostingAccount {
        let status = if account.suspended != 0 {
            HostingStatus::Suspended
        } else {
            HostingStatus::Active
        };
        HostingAccount {
            id: account.user.clone(),
            domain: account.domain,
            username: Some(account.user),
            plan: account.plan,
            status,
            disk_used_mb: account.disk_used_mb,
            disk_limit_mb: account.disk_limit_mb,
            bandwidth_used_mb: account.bandwidth_used_mb,
            bandwidth_limit_mb: account.bandwidth_limit_mb,
        }
    }

    fn email_to_info(email: CpanelEmail) -> EmailAccount {
        EmailAccount {
            id: email.email.clone(),
            address: email.email,
            quota_mb: email.diskquota,
            used_mb: email.diskused,
            created_at: parse_datetime(email.created.as_deref()),
        }
    }

    fn backup_to_info(backup: CpanelBackup) -> BackupInfo {
        BackupInfo {
            id: backup.backupid,
            backup_type: parse_backup_type(backup.backup_type.as_deref().unwrap_or("full")),
            status: parse_backup_status(&backup.status),
            created_at: parse_datetime(backup.time.as_deref()),
            size_mb: backup.size_mb,
        }
    }

    fn transfer_to_task(transfer: CpanelTransfer) -> MigrationTask {
        MigrationTask {
            id: transfer.transfer_id,
            status: parse_migration_status(&transfer.status),
            progress: transfer.progress.min(100),
            detail: transfer.detail,
        }
    }

    fn quota_to_usage(quota: CpanelQuota) -> ResourceUsage {
        ResourceUsage {
            disk_used_mb: quota.megabytes_used,
            disk_limit_mb: quota.megabyte_limit,
            bandwidth_used_mb: quota.bandwidth_used_mb,
            bandwidth_limit_mb: quota.bandwidth_limit_mb,
            inodes_used: quota.inodes_used,
            cpu_percent: None,
            memory_percent: None,
        }
    }
}

#[async_trait]
impl PanelProvider for CpanelAdapter {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    fn panel_type(&self) -> PanelType {
        PanelType::Cpanel
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
            id: PanelType::Cpanel,
            name: "cPanel".to_string(),
            description: "cPanel/WHM shared hosting control panel".to_string(),
            features: PanelFeatures {
                cloud_instances: false,
            },
        }
    }

    async fn authenticate(&self) -> Result<bool> {
        match self.get::<serde_json::Value>("/json-api/version").await {
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
        match self.get::<serde_json::Value>("/json-api/version").await {
            Ok(_) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    async fn list_domains(&self) -> Result<Vec<DomainInfo>> {
        let domains: Vec<CpanelDomain> = self.get("/execute/DomainInfo/list_domains").await?;
        Ok(domains.into_iter().map(Self::domain_to_info).collect())
    }

    async fn get_domain(&self, domain: &str) -> Result<DomainInfo> {
        let endpoint = format!(
            "/execute/DomainInfo/domains_data?domain={}",
            urlencoding::encode(domain)
        );
        let wire: CpanelDomain = self.get(&endpoint).await?;
        Ok(Self::domain_to_info(wire))
    }

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<DomainInfo> {
        let body = json!({ "domain": req.name, "nameservers": req.nameservers });
        let wire: CpanelDomain = self.post("/execute/Park/park", body).await?;
        Ok(Self::domain_to_info(wire))
    }

    async fn update_dns(&self, domain: &str, records: &[DnsRecordEntry]) -> Result<OperationAck> {
        let body = json!({ "domain": domain, "records": records });
        self.post_ack("/json-api/mass_edit_dns_zone", body).await
    }

    async fn transfer_domain(&self, req: &TransferDomainRequest) -> Result<MigrationTask> {
        let body = json!({
            "domain": req.name,
            "auth_code": req.auth_code,
            "registrar": req.registrar,
        });
        let wire: CpanelTransfer = self.post("/json-api/start_transfer", body).await?;
        Ok(Self::transfer_to_task(wire))
    }

    async fn list_hosting_accounts(&self) -> Result<Vec<HostingAccount>> {
        let accounts: Vec<CpanelAccount> = self.get("/json-api/listaccts").await?;
        Ok(accounts.into_iter().map(Self::account_to_info).collect())
    }

    async fn get_hosting_account(&self, account_id: &str) -> Result<HostingAccount> {
        let endpoint = format!(
            "/json-api/accountsummary?user={}",
            urlencoding::encode(account_id)
        );
        let wire: CpanelAccount = self.get(&endpoint).await?;
        Ok(Self::account_to_info(wire))
    }

    async fn create_hosting_account(
        &self,
        req: &CreateHostingAccountRequest,
    ) -> Result<HostingAccount> {
        let body = json!({
            "username": req.username,
            "domain": req.domain,
            "plan": req.plan,
            "password": req.password,
            "contactemail": req.contact_email,
        });
        let wire: CpanelAccount = self.post("/json-api/createacct", body).await?;
        Ok(Self::account_to_info(wire))
    }

    async fn suspend_account(&self, account_id: &str) -> Result<OperationAck> {
        self.post_ack("/json-api/suspendacct", json!({ "user": account_id }))
            .await
    }

    async fn unsuspend_account(&self, account_id: &str) -> Result<OperationAck> {
        self.post_ack("/json-api/unsuspendacct", json!({ "user": account_id }))
            .await
    }

    async fn list_email_accounts(&self, domain: &str) -> Result<Vec<EmailAccount>> {
        let endpoint = format!(
            "/execute/Email/list_pops?domain={}",
            urlencoding::encode(domain)
        );
        let emails: Vec<CpanelEmail> = self.get(&endpoint).await?;
        Ok(emails.into_iter().map(Self::email_to_info).collect())
    }

    async fn create_email_account(&self, req: &CreateEmailAccountRequest) -> Result<EmailAccount> {
        let body = json!({
            "email": req.address,
            "password": req.password,
            "quota": req.quota_mb,
        });
        let wire: CpanelEmail = self.post("/execute/Email/add_pop", body).await?;
        Ok(Self::email_to_info(wire))
    }

    async fn delete_email_account(&self, address: &str) -> Result<OperationAck> {
        self.post_ack("/execute/Email/delete_pop", json!({ "email": address }))
            .await
    }

    async fn get_ssl_status(&self, domain: &str) -> Result<SslInfo> {
        let endpoint = format!(
            "/execute/SSL/installed_host?domain={}",
            urlencoding::encode(domain)
        );
        let wire: CpanelSsl = self.get(&endpoint).await?;
        Ok(Self::ssl_to_info(wire))
    }

    async fn install_ssl(&self, req: &InstallSslRequest) -> Result<SslInfo> {
        let body = json!({
            "domain": req.domain,
            "cert": req.certificate,
            "key": req.private_key,
        });
        let wire: CpanelSsl = self.post("/execute/SSL/install_ssl", body).await?;
        Ok(Self::ssl_to_info(wire))
    }

    async fn renew_ssl(&self, domain: &str) -> Result<SslInfo> {
        let wire: CpanelSsl = self
            .post("/execute/SSL/renew_ssl", json!({ "domain": domain }))
            .await?;
        Ok(Self::ssl_to_info(wire))
    }

    async fn list_backups(&self) -> Result<Vec<BackupInfo>> {
        let backups: Vec<CpanelBackup> = self.get("/execute/Backup/list_backups").await?;
        Ok(backups.into_iter().map(Self::backup_to_info).collect())
    }

    async fn create_backup(&self, backup_type: BackupType) -> Result<BackupInfo> {
        let body = json!({ "type": backup_type });
        let wire: CpanelBackup = self
            .post("/execute/Backup/fullbackup_to_homedir", body)
            .await?;
        Ok(Self::backup_to_info(wire))
    }

    async fn restore_backup(&self, backup_id: &str) -> Result<MigrationTask> {
        let wire: CpanelTransfer = self
            .post(
                "/execute/Backup/restore_files",
                json!({ "backupid": backup_id }),
            )
            .await?;
        Ok(Self::transfer_to_task(wire))
    }

    async fn get_resource_usage(&self, account_id: &str) -> Result<ResourceUsage> {
        let endpoint = format!(
            "/execute/Quota/get_quota_info?user={}",
            urlencoding::encode(account_id)
        );
        let wire: CpanelQuota = self.get(&endpoint).await?;
        Ok(Self::quota_to_usage(wire))
    }
}
