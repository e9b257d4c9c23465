use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hostdesk_provider_core::Mode;

// ============ Panel Types ============

/// Identifies which panel provider implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PanelType {
    /// cPanel/WHM. Requires feature `cpanel`.
    #[cfg(feature = "cpanel")]
    Cpanel,
    /// Plesk. Requires feature `plesk`.
    #[cfg(feature = "plesk")]
    Plesk,
    /// Hostinger. Requires feature `hostinger`.
    #[cfg(feature = "hostinger")]
    Hostinger,
    /// Spaceship. Requires feature `spaceship`.
    #[cfg(feature = "spaceship")]
    Spaceship,
}

impl std::fmt::Display for PanelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "cpanel")]
            Self::Cpanel => write!(f, "cpanel"),
            #[cfg(feature = "plesk")]
            Self::Plesk => write!(f, "plesk"),
            #[cfg(feature = "hostinger")]
            Self::Hostinger => write!(f, "hostinger"),
            #[cfg(feature = "spaceship")]
            Self::Spaceship => write!(f, "spaceship"),
        }
    }
}

// ============ Configuration ============

/// Immutable configuration for one panel provider instance.
///
/// Owned by the collaborator store (settings UI); this library treats it as
/// opaque, read-only input. The `(panel_type, id)` pair is the adapter's
/// identity in the registry; `mode` is fixed once an adapter is built from
/// this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Caller-assigned instance identifier.
    pub id: String,
    /// Which panel provider this instance talks to.
    pub panel_type: PanelType,
    /// Base URL of the panel API (per-instance; panels are self-hosted).
    pub api_url: String,
    /// API key, sent as a bearer token.
    pub api_key: String,
    /// Secondary secret, for panels that require one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
    /// Panel username, sent as `X-Username` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Fixed mode for adapters built from this record.
    pub mode: Mode,
    /// Per-instance deadline override for live requests, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl PanelConfig {
    /// Build a config with the optional fields unset.
    pub fn new(
        id: impl Into<String>,
        panel_type: PanelType,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        mode: Mode,
    ) -> Self {
        Self {
            id: id.into(),
            panel_type,
            api_url: api_url.into(),
            api_key: api_key.into(),
            api_secret: None,
            username: None,
            mode,
            request_timeout_secs: None,
        }
    }

    /// Registry cache key: `"{panel_type}-{id}"`.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!("{}-{}", self.panel_type, self.id)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

// ============ Status Enums ============

/// Status of a domain within a panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    /// Domain is active and resolving.
    Active,
    /// Domain is pending registration or verification.
    Pending,
    /// Domain registration has expired.
    Expired,
    /// Domain is mid-transfer between registrars.
    Transferring,
}

/// Status of a hosting account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HostingStatus {
    Active,
    Suspended,
    Pending,
}

/// Status of an SSL certificate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SslStatus {
    Active,
    Pending,
    Expired,
    /// No certificate installed or no usable certificate state.
    None,
}

/// Kind of backup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackupType {
    Full,
    Incremental,
    Database,
}

/// Status of a backup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackupStatus {
    Completed,
    InProgress,
    Failed,
}

/// Status of a cloud instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InstanceStatus {
    Running,
    Stopped,
    Provisioning,
}

/// Status of a long-running migration (domain transfer, backup restore).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MigrationStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

// ============ Domain Objects ============

/// A DNS record attached to a domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecordEntry {
    /// Record name (`"@"` for apex).
    pub name: String,
    /// Record type (`"A"`, `"CNAME"`, `"MX"`, ...). Kept as a string: panels
    /// disagree on the supported set.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
}

/// A domain as seen through a panel provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    /// Provider-specific domain identifier.
    pub id: String,
    /// Domain name (e.g. `"example.com"`).
    pub name: String,
    /// Current domain status.
    pub status: DomainStatus,
    /// Registrar of record, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
    /// Registration expiry, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// DNS records, when the provider returns them with the domain.
    #[serde(default)]
    pub dns_records: Vec<DnsRecordEntry>,
    /// Certificate state, when the provider returns it with the domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssl: Option<SslInfo>,
}

/// A hosting account with its quota counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HostingAccount {
    /// Provider-specific account identifier.
    pub id: String,
    /// Primary domain of the account.
    pub domain: String,
    /// Panel login, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Hosting plan name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Current account status.
    pub status: HostingStatus,
    pub disk_used_mb: u64,
    pub disk_limit_mb: u64,
    pub bandwidth_used_mb: u64,
    pub bandwidth_limit_mb: u64,
}

/// A mailbox on a hosted domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailAccount {
    /// Provider-specific identifier (usually the address itself).
    pub id: String,
    /// Full email address.
    pub address: String,
    pub quota_mb: u64,
    pub used_mb: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Certificate state for one domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SslInfo {
    /// Domain the certificate covers.
    pub domain: String,
    /// Current certificate status.
    pub status: SslStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// A backup artifact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub backup_type: BackupType,
    pub status: BackupStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_mb: Option<u64>,
}

/// A cloud VM instance (optional capability; see
/// [`CloudCapable`](crate::CloudCapable)).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloudInstance {
    pub id: String,
    pub name: String,
    pub status: InstanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

/// A progress-tracked long-running task (domain transfer, backup restore).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MigrationTask {
    pub id: String,
    pub status: MigrationStatus,
    /// Completion percentage, `0..=100`.
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Account-level resource consumption counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsage {
    pub disk_used_mb: u64,
    pub disk_limit_mb: u64,
    pub bandwidth_used_mb: u64,
    pub bandwidth_limit_mb: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inodes_used: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_percent: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_percent: Option<f32>,
}

/// Generic success acknowledgement for operations without a richer result.
///
/// Deserialization is tolerant: any object parses as a success ack unless it
/// explicitly carries `success: false`, which lets acknowledgement-shaped
/// provider payloads and the dispatcher's generic ack share one type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationAck {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Default for OperationAck {
    fn default() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

fn default_true() -> bool {
    true
}

// ============ Request Types ============

/// Request to create (register or park) a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDomainRequest {
    pub name: String,
    #[serde(default)]
    pub nameservers: Vec<String>,
}

/// Request to transfer a domain in from another registrar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDomainRequest {
    pub name: String,
    /// EPP/auth code from the losing registrar.
    pub auth_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,
}

/// Request to provision a hosting account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostingAccountRequest {
    pub domain: String,
    pub username: String,
    pub plan: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// Request to create a mailbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmailAccountRequest {
    /// Full address, e.g. `"info@example.com"`.
    pub address: String,
    pub password: String,
    pub quota_mb: u64,
}

/// Request to install a certificate. Leave `certificate`/`private_key`
/// unset to request a provider-issued certificate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallSslRequest {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

/// Request to provision a cloud instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
    pub name: String,
    pub region: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

// ============ Panel Metadata ============

/// Capability flags for a panel provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanelFeatures {
    /// Whether the panel manages cloud VM instances.
    pub cloud_instances: bool,
}

/// Static metadata describing a panel provider.
///
/// Obtain via [`PanelProvider::metadata()`](crate::PanelProvider::metadata)
/// or [`get_all_panel_metadata()`](crate::get_all_panel_metadata).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelMetadata {
    /// Panel type identifier.
    pub id: PanelType,
    /// Human-readable provider name.
    pub name: String,
    /// Short description of the provider.
    pub description: String,
    /// Capability flags for this provider.
    pub features: PanelFeatures,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ============ PanelType / PanelConfig ============

    #[test]
    fn panel_type_display_matches_serde() {
        for panel_type in [
            PanelType::Cpanel,
            PanelType::Plesk,
            PanelType::Hostinger,
            PanelType::Spaceship,
        ] {
            let json = serde_json::to_string(&panel_type).unwrap();
            assert_eq!(json, format!("\"{panel_type}\""));
        }
    }

    #[test]
    fn cache_key_is_type_dash_id() {
        let config = PanelConfig::new(
            "p1",
            PanelType::Cpanel,
            "https://host.example",
            "key",
            Mode::Test,
        );
        assert_eq!(config.cache_key(), "cpanel-p1");
    }

    #[test]
    fn request_timeout_from_secs() {
        let mut config = PanelConfig::new(
            "p1",
            PanelType::Plesk,
            "https://host.example",
            "key",
            Mode::Live,
        );
        assert!(config.request_timeout().is_none());
        config.request_timeout_secs = Some(5);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }

    // ============ Status serde ============

    #[test]
    fn status_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&DomainStatus::Transferring).unwrap(),
            "\"transferring\""
        );
        assert_eq!(
            serde_json::to_string(&SslStatus::None).unwrap(),
            "\"none\""
        );
        assert_eq!(
            serde_json::to_string(&BackupStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&MigrationStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&HostingStatus::Suspended).unwrap(),
            "\"suspended\""
        );
    }

    #[test]
    fn status_enums_deserialize() {
        let status: DomainStatus = serde_json::from_str("\"expired\"").unwrap();
        assert_eq!(status, DomainStatus::Expired);
        let status: InstanceStatus = serde_json::from_str("\"provisioning\"").unwrap();
        assert_eq!(status, InstanceStatus::Provisioning);
    }

    // ============ OperationAck tolerance ============

    #[test]
    fn ack_parses_generic_ack() {
        let ack: OperationAck =
            serde_json::from_value(json!({ "success": true, "message": "ok" })).unwrap();
        assert!(ack.success);
        assert_eq!(ack.message.as_deref(), Some("ok"));
    }

    #[test]
    fn ack_defaults_to_success_on_foreign_payload() {
        let ack: OperationAck = serde_json::from_value(json!({ "result": 1 })).unwrap();
        assert!(ack.success);
        assert!(ack.message.is_none());
    }

    #[test]
    fn ack_respects_explicit_failure() {
        let ack: OperationAck =
            serde_json::from_value(json!({ "success": false, "message": "denied" })).unwrap();
        assert!(!ack.success);
    }

    // ============ Domain object serde ============

    #[test]
    fn domain_info_round_trip() {
        let info = DomainInfo {
            id: "example.com".to_string(),
            name: "example.com".to_string(),
            status: DomainStatus::Active,
            registrar: Some("Namecheap".to_string()),
            expires_at: None,
            dns_records: vec![DnsRecordEntry {
                name: "@".to_string(),
                record_type: "A".to_string(),
                value: "203.0.113.10".to_string(),
                ttl: 14400,
            }],
            ssl: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains("\"dnsRecords\""));
        assert!(json.contains("\"type\":\"A\""));
        let back: DomainInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn migration_progress_bounds() {
        let task = MigrationTask {
            id: "mig_1".to_string(),
            status: MigrationStatus::InProgress,
            progress: 42,
            detail: None,
        };
        assert!(task.progress <= 100);
    }
}
