//! cPanel wire types (UAPI/WHM response shapes).

use serde::Deserialize;

/// UAPI-style response envelope: `status` is 1 on success.
#[derive(Debug, Deserialize)]
pub(crate) struct CpanelEnvelope {
    pub status: i64,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CpanelDnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub record: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

fn default_ttl() -> u32 {
    14400
}

#[derive(Debug, Deserialize)]
pub(crate) struct CpanelSsl {
    pub domain: String,
    pub status: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub not_after: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CpanelDomain {
    pub domain: String,
    pub status: String,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub expires_on: Option<String>,
    #[serde(default)]
    pub dns_records: Vec<CpanelDnsRecord>,
    #[serde(default)]
    pub ssl: Option<CpanelSsl>,
}

/// WHM account entry (`listaccts` / `accountsummary`).
#[derive(Debug, Deserialize)]
pub(crate) struct CpanelAccount {
    pub user: String,
    pub domain: String,
    #[serde(default)]
    pub plan: Option<String>,
    /// WHM flag: non-zero when suspended.
    #[serde(default)]
    pub suspended: i64,
    #[serde(default)]
    pub disk_used_mb: u64,
    #[serde(default)]
    pub disk_limit_mb: u64,
    #[serde(default)]
    pub bandwidth_used_mb: u64,
    #[serde(default)]
    pub bandwidth_limit_mb: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CpanelEmail {
    pub email: String,
    #[serde(default)]
    pub diskquota: u64,
    #[serde(default)]
    pub diskused: u64,
    #[serde(default)]
    pub created: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CpanelBackup {
    pub backupid: String,
    #[serde(rename = "type", default)]
    pub backup_type: Option<String>,
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub size_mb: Option<u64>,
}

/// `Quota::get_quota_info` payload, extended with bandwidth counters.
#[derive(Debug, Deserialize)]
pub(crate) struct CpanelQuota {
    #[serde(default)]
    pub megabytes_used: u64,
    #[serde(default)]
    pub megabyte_limit: u64,
    #[serde(default)]
    pub bandwidth_used_mb: u64,
    #[serde(default)]
    pub bandwidth_limit_mb: u64,
    #[serde(default)]
    pub inodes_used: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CpanelTransfer {
    pub transfer_id: String,
    pub status: String,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub detail: Option<String>,
}
