//! Shared helpers for panel adapter implementations.

use chrono::{DateTime, Utc};

use crate::types::{
    BackupStatus, BackupType, DomainStatus, HostingStatus, InstanceStatus, MigrationStatus,
    SslStatus,
};

/// Parse an RFC 3339 timestamp, tolerating absent or malformed values.
pub(crate) fn parse_datetime(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

// Status parsers are total: unrecognized provider strings degrade to a
// documented in-set default, so adapters can never emit an out-of-set value.

pub(crate) fn parse_domain_status(status: &str) -> DomainStatus {
    match status.to_ascii_lowercase().as_str() {
        "active" | "ok" | "resolving" => DomainStatus::Active,
        "expired" | "grace_period" | "redemption" => DomainStatus::Expired,
        "transferring" | "transfer_in" | "transfer_out" | "pendingtransfer" => {
            DomainStatus::Transferring
        }
        _ => DomainStatus::Pending,
    }
}

pub(crate) fn parse_hosting_status(status: &str) -> HostingStatus {
    match status.to_ascii_lowercase().as_str() {
        "active" | "ok" | "enabled" => HostingStatus::Active,
        "suspended" | "disabled" | "locked" => HostingStatus::Suspended,
        _ => HostingStatus::Pending,
    }
}

pub(crate) fn parse_ssl_status(status: &str) -> SslStatus {
    match status.to_ascii_lowercase().as_str() {
        "active" | "valid" | "issued" | "installed" => SslStatus::Active,
        "pending" | "processing" | "ordered" => SslStatus::Pending,
        "expired" => SslStatus::Expired,
        _ => SslStatus::None,
    }
}

pub(crate) fn parse_backup_type(backup_type: &str) -> BackupType {
    match backup_type.to_ascii_lowercase().as_str() {
        "incremental" => BackupType::Incremental,
        "database" | "db" => BackupType::Database,
        _ => BackupType::Full,
    }
}

pub(crate) fn parse_backup_status(status: &str) -> BackupStatus {
    match status.to_ascii_lowercase().as_str() {
        "completed" | "complete" | "success" | "ok" => BackupStatus::Completed,
        "in_progress" | "running" | "pending" | "scheduled" => BackupStatus::InProgress,
        _ => BackupStatus::Failed,
    }
}

pub(crate) fn parse_instance_status(status: &str) -> InstanceStatus {
    match status.to_ascii_lowercase().as_str() {
        "running" | "active" => InstanceStatus::Running,
        "stopped" | "halted" | "powered_off" => InstanceStatus::Stopped,
        _ => InstanceStatus::Provisioning,
    }
}

pub(crate) fn parse_migration_status(status: &str) -> MigrationStatus {
    match status.to_ascii_lowercase().as_str() {
        "pending" | "queued" => MigrationStatus::Pending,
        "in_progress" | "running" | "transferring" => MigrationStatus::InProgress,
        "completed" | "complete" | "success" => MigrationStatus::Completed,
        _ => MigrationStatus::Failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_parses_rfc3339() {
        let parsed = parse_datetime(Some("2026-01-15T00:00:00Z"));
        assert!(parsed.is_some());
    }

    #[test]
    fn datetime_tolerates_garbage() {
        assert!(parse_datetime(Some("not a date")).is_none());
        assert!(parse_datetime(None).is_none());
    }

    #[test]
    fn domain_status_known_values() {
        assert_eq!(parse_domain_status("active"), DomainStatus::Active);
        assert_eq!(parse_domain_status("EXPIRED"), DomainStatus::Expired);
        assert_eq!(
            parse_domain_status("pendingTransfer"),
            DomainStatus::Transferring
        );
    }

    #[test]
    fn domain_status_unknown_degrades_to_pending() {
        assert_eq!(parse_domain_status("weird"), DomainStatus::Pending);
    }

    #[test]
    fn hosting_status_suspended_aliases() {
        assert_eq!(parse_hosting_status("disabled"), HostingStatus::Suspended);
        assert_eq!(parse_hosting_status("locked"), HostingStatus::Suspended);
    }

    #[test]
    fn ssl_status_unknown_degrades_to_none() {
        assert_eq!(parse_ssl_status("revoked?"), SslStatus::None);
        assert_eq!(parse_ssl_status("valid"), SslStatus::Active);
    }

    #[test]
    fn backup_status_unknown_degrades_to_failed() {
        assert_eq!(parse_backup_status("exploded"), BackupStatus::Failed);
        assert_eq!(parse_backup_status("running"), BackupStatus::InProgress);
    }

    #[test]
    fn migration_status_unknown_degrades_to_failed() {
        assert_eq!(parse_migration_status("???"), MigrationStatus::Failed);
        assert_eq!(parse_migration_status("queued"), MigrationStatus::Pending);
    }
}
