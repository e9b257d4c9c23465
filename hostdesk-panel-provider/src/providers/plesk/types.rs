//! Plesk wire types (REST API v2 shapes).

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct PleskDnsRecord {
    pub host: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

fn default_ttl() -> u32 {
    3600
}

#[derive(Debug, Deserialize)]
pub(crate) struct PleskCertificate {
    pub domain: String,
    pub status: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PleskDomain {
    pub id: u64,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub dns_records: Vec<PleskDnsRecord>,
    #[serde(default)]
    pub certificate: Option<PleskCertificate>,
}

/// A Plesk client (customer) record with its usage counters.
#[derive(Debug, Deserialize)]
pub(crate) struct PleskClient {
    pub id: u64,
    pub login: String,
    pub status: String,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub domain: String,
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
pub(crate) struct PleskMailbox {
    /// Full address.
    pub name: String,
    #[serde(default)]
    pub quota_mb: u64,
    #[serde(default)]
    pub used_mb: u64,
    #[serde(default)]
    pub created: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PleskBackup {
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
pub(crate) struct PleskStatistics {
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

/// Plesk async task handle (transfers, restores).
#[derive(Debug, Deserialize)]
pub(crate) struct PleskTask {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub detail: Option<String>,
}
