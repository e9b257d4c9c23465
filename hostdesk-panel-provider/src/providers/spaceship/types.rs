//! Spaceship wire types.

use serde::Deserialize;

/// Paged list wrapper used by Spaceship list endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct SpaceshipList<T> {
    pub items: Vec<T>,
    #[serde(default)]
    #[allow(dead_code)]
    pub total: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpaceshipDnsRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

fn default_ttl() -> u32 {
    1800
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpaceshipSsl {
    pub domain: String,
    pub status: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpaceshipDomain {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub dns_records: Vec<SpaceshipDnsRecord>,
    #[serde(default)]
    pub ssl: Option<SpaceshipSsl>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpaceshipAccount {
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
pub(crate) struct SpaceshipMailbox {
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
pub(crate) struct SpaceshipBackup {
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
pub(crate) struct SpaceshipUsage {
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
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SpaceshipTask {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub detail: Option<String>,
}
