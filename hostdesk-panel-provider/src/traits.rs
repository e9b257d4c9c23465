use async_trait::async_trait;

use hostdesk_provider_core::{Mode, ProviderError, Result};

use crate::types::{
    BackupInfo, BackupType, CloudInstance, CreateDomainRequest, CreateEmailAccountRequest,
    CreateHostingAccountRequest, CreateInstanceRequest, DnsRecordEntry, DomainInfo, EmailAccount,
    HostingAccount, InstallSslRequest, MigrationTask, OperationAck, PanelConfig, PanelMetadata,
    PanelType, ResourceUsage, SslInfo, TransferDomainRequest,
};

fn unsupported_cloud(provider: &str) -> ProviderError {
    ProviderError::UnsupportedCapability {
        provider: provider.to_string(),
        capability: "cloud-instances".to_string(),
    }
}

/// Hosting panel capability contract.
///
/// Every adapter of the panel family implements this full operation set
/// against its provider's wire shapes and returns the normalized domain
/// objects from [`crate::types`]. Mode-dependent behavior (fixture vs. live
/// call) lives entirely in the adapter's dispatcher, never here.
#[async_trait]
pub trait PanelProvider: Send + Sync {
    /// Provider identifier, e.g. `"cpanel"`.
    fn id(&self) -> &'static str;

    /// The panel type of this adapter.
    fn panel_type(&self) -> PanelType;

    /// The fixed mode of this instance.
    fn mode(&self) -> Mode;

    /// The configuration this adapter was constructed from.
    fn config(&self) -> &PanelConfig;

    /// Whether a prior [`authenticate()`](Self::authenticate) succeeded.
    ///
    /// Operations do not require this; it exists for UIs that surface
    /// connection state. Set at most once per instance.
    fn is_ready(&self) -> bool;

    /// Type-level metadata (name, description, capability flags).
    ///
    /// Does not need an instance; callable before building an adapter.
    fn metadata() -> PanelMetadata
    where
        Self: Sized;

    /// Check the connection and mark the adapter ready on success.
    async fn authenticate(&self) -> Result<bool>;

    /// Check whether the configured credentials are accepted.
    async fn validate_credentials(&self) -> Result<bool>;

    // ---- domains ----

    async fn list_domains(&self) -> Result<Vec<DomainInfo>>;

    async fn get_domain(&self, domain: &str) -> Result<DomainInfo>;

    async fn create_domain(&self, req: &CreateDomainRequest) -> Result<DomainInfo>;

    /// Replace the DNS records of a domain.
    async fn update_dns(&self, domain: &str, records: &[DnsRecordEntry]) -> Result<OperationAck>;

    /// Start a registrar transfer. Returns a progress-tracked task.
    async fn transfer_domain(&self, req: &TransferDomainRequest) -> Result<MigrationTask>;

    // ---- hosting accounts ----

    async fn list_hosting_accounts(&self) -> Result<Vec<HostingAccount>>;

    async fn get_hosting_account(&self, account_id: &str) -> Result<HostingAccount>;

    async fn create_hosting_account(
        &self,
        req: &CreateHostingAccountRequest,
    ) -> Result<HostingAccount>;

    async fn suspend_account(&self, account_id: &str) -> Result<OperationAck>;

    async fn unsuspend_account(&self, account_id: &str) -> Result<OperationAck>;

    // ---- email ----

    async fn list_email_accounts(&self, domain: &str) -> Result<Vec<EmailAccount>>;

    async fn create_email_account(&self, req: &CreateEmailAccountRequest) -> Result<EmailAccount>;

    async fn delete_email_account(&self, address: &str) -> Result<OperationAck>;

    // ---- ssl ----

    async fn get_ssl_status(&self, domain: &str) -> Result<SslInfo>;

    async fn install_ssl(&self, req: &InstallSslRequest) -> Result<SslInfo>;

    async fn renew_ssl(&self, domain: &str) -> Result<SslInfo>;

    // ---- backups ----

    async fn list_backups(&self) -> Result<Vec<BackupInfo>>;

    async fn create_backup(&self, backup_type: BackupType) -> Result<BackupInfo>;

    /// Restore from a backup. Returns a progress-tracked task.
    async fn restore_backup(&self, backup_id: &str) -> Result<MigrationTask>;

    // ---- usage ----

    async fn get_resource_usage(&self, account_id: &str) -> Result<ResourceUsage>;

    // ---- cloud instances (optional capability) ----

    /// Cloud capability query. Panels with VM support return `Some`; the
    /// default is `None`.
    fn cloud(&self) -> Option<&dyn CloudCapable> {
        None
    }

    /// List cloud instances.
    ///
    /// Fails with [`ProviderError::UnsupportedCapability`], before any
    /// request is attempted, on panels without cloud support. Never a
    /// silently empty list.
    async fn list_instances(&self) -> Result<Vec<CloudInstance>> {
        match self.cloud() {
            Some(cloud) => cloud.list_instances().await,
            None => Err(unsupported_cloud(self.id())),
        }
    }

    /// Provision a cloud instance. Same capability rules as
    /// [`list_instances()`](Self::list_instances).
    async fn create_instance(&self, req: &CreateInstanceRequest) -> Result<CloudInstance> {
        match self.cloud() {
            Some(cloud) => cloud.create_instance(req).await,
            None => Err(unsupported_cloud(self.id())),
        }
    }

    /// Destroy a cloud instance. Same capability rules as
    /// [`list_instances()`](Self::list_instances).
    async fn delete_instance(&self, instance_id: &str) -> Result<OperationAck> {
        match self.cloud() {
            Some(cloud) => cloud.delete_instance(instance_id).await,
            None => Err(unsupported_cloud(self.id())),
        }
    }
}

/// Optional cloud-VM capability.
///
/// Implemented only by panels that actually manage instances; everyone else
/// leaves [`PanelProvider::cloud()`] at its `None` default so callers can
/// hide the feature instead of surfacing errors.
#[async_trait]
pub trait CloudCapable: Send + Sync {
    async fn list_instances(&self) -> Result<Vec<CloudInstance>>;

    async fn create_instance(&self, req: &CreateInstanceRequest) -> Result<CloudInstance>;

    async fn delete_instance(&self, instance_id: &str) -> Result<OperationAck>;
}
