//! Hostinger wire types (camelCase JSON payloads).

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HostingerDnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

fn default_ttl() -> u32 {
    300
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HostingerSsl {
    pub domain: String,
    pub status: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HostingerDomain {
    pub domain: String,
    pub status: String,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub dns_records: Vec<HostingerDnsRecord>,
    #[serde(default)]
    pub ssl: Option<HostingerSsl>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HostingerAccount {
    pub id: String,
    pub domain: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    pub status: String,
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
#[serde(rename_all = "camelCase")]
pub(crate) struct HostingerEmail {
    pub address: String,
    #[serde(default)]
    pub quota_mb: u64,
    #[serde(default)]
    pub used_mb: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HostingerBackup {
    pub id: String,
    #[serde(rename = "type", default)]
    pub backup_type: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub size_mb: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HostingerUsage {
    #[serde(default)]
    pub disk_used_mb: u64,
    #[serde(default)]
    pub disk_limit_mb: u64,
    #[serde(default)]
    pub bandwidth_used_mb: u64,
    #[serde(default)]
    pub bandwidth_limit_mb: u64,
    #[serde(default)]
    pub inodes_used: Option<u64>,
    #[serde(default)]
    pub cpu_percent: Option<f32>,
    #[serde(default)]
    pub memory_percent: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HostingerTransfer {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub detail: Option<String>,
}

/// VPS entry (`/api/vps/v1/virtual-machines`).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HostingerInstance {
    pub id: String,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
}
