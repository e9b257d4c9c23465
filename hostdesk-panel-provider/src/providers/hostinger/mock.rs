//! Canned Hostinger responses served in test mode.
//!
//! Plain camelCase payloads, no envelope. Ordered most-specific first;
//! instance and mailbox deletions fall back to the generic ack.

use serde_json::{Value, json};

use hostdesk_provider_core::id::generate_id;

type Fixture = (&'static str, fn() -> Value);

const FIXTURES: &[Fixture] = &[
    ("GET /api/account/v1/profile", profile),
    ("POST /api/domains/v1/transfers", transfer_started),
    ("GET /api/domains/v1/portfolio/", domain_detail),
    ("GET /api/domains/v1/portfolio", domain_list),
    ("POST /api/domains/v1/portfolio", domain_created),
    ("PUT /api/dns/v1/zones/", dns_updated),
    ("/usage", usage),
    ("/unsuspend", unsuspend_ack),
    ("/suspend", suspend_ack),
    ("GET /api/hosting/v1/accounts/", account_detail),
    ("GET /api/hosting/v1/accounts", account_list),
    ("POST /api/hosting/v1/accounts", account_created),
    ("GET /api/email/v1/accounts", email_list),
    ("POST /api/email/v1/accounts", email_created),
    ("/certificates/renew", ssl_renewed),
    ("GET /api/ssl/v1/certificates/", ssl_status),
    ("POST /api/ssl/v1/certificates", ssl_installed),
    ("/restore", restore_started),
    ("GET /api/backups/v1/snapshots", backup_list),
    ("POST /api/backups/v1/snapshots", backup_started),
    ("GET /api/vps/v1/virtual-machines", instance_list),
    ("POST /api/vps/v1/virtual-machines", instance_created),
];

pub(super) fn lookup(target: &str) -> Option<Value> {
    FIXTURES
        .iter()
        .find(|(key, _)| target.contains(key))
        .map(|(_, build)| build())
}

fn profile() -> Value {
    json!({ "email": "reseller@hostdesk.example", "plan": "Reseller 50" })
}

fn site_domain() -> Value {
    json!({
        "domain": "hostinger-site.com",
        "status": "active",
        "registrar": "Hostinger",
        "expiresAt": "2026-09-12T00:00:00Z",
        "dnsRecords": [
            { "name": "@", "type": "A", "content": "203.0.113.77", "ttl": 300 },
            { "name": "www", "type": "CNAME", "content": "hostinger-site.com", "ttl": 300 }
        ],
        "ssl": {
            "domain": "hostinger-site.com",
            "status": "active",
            "issuer": "Google Trust Services",
            "expiresAt": "2026-01-20T00:00:00Z"
        }
    })
}

fn domain_list() -> Value {
    json!([
        site_domain(),
        {
            "domain": "incoming-transfer.net",
            "status": "pendingTransfer",
            "registrar": "GoDaddy",
            "dnsRecords": []
        }
    ])
}

fn domain_detail() -> Value {
    site_domain()
}

fn domain_created() -> Value {
    json!({
        "domain": "brand-new.site",
        "status": "pending",
        "registrar": "Hostinger",
        "dnsRecords": []
    })
}

fn dns_updated() -> Value {
    json!({ "success": true, "message": "zone updated" })
}

fn transfer_started() -> Value {
    json!({
        "id": generate_id("xfer"),
        "status": "pending",
        "progress": 0,
        "detail": "waiting for EPP code validation"
    })
}

fn account_list() -> Value {
    json!([
        {
            "id": "ha_1001",
            "domain": "hostinger-site.com",
            "username": "u1001",
            "plan": "Premium",
            "status": "active",
            "diskUsedMb": 3072,
            "diskLimitMb": 102_400,
            "bandwidthUsedMb": 20_480,
            "bandwidthLimitMb": 1_048_576
        },
        {
            "id": "ha_1002",
            "domain": "incoming-transfer.net",
            "username": "u1002",
            "plan": "Business",
            "status": "pending",
            "diskUsedMb": 0,
            "diskLimitMb": 204_800,
            "bandwidthUsedMb": 0,
            "bandwidthLimitMb": 2_097_152
        }
    ])
}

fn account_detail() -> Value {
    json!({
        "id": "ha_1001",
        "domain": "hostinger-site.com",
        "username": "u1001",
        "plan": "Premium",
        "status": "active",
        "diskUsedMb": 3072,
        "diskLimitMb": 102_400,
        "bandwidthUsedMb": 20_480,
        "bandwidthLimitMb": 1_048_576
    })
}

fn account_created() -> Value {
    json!({
        "id": generate_id("ha"),
        "domain": "brand-new.site",
        "username": "u1003",
        "plan": "Premium",
        "status": "pending",
        "diskUsedMb": 0,
        "diskLimitMb": 102_400,
        "bandwidthUsedMb": 0,
        "bandwidthLimitMb": 1_048_576
    })
}

fn suspend_ack() -> Value {
    json!({ "success": true, "message": "account suspended" })
}

fn unsuspend_ack() -> Value {
    json!({ "success": true, "message": "account unsuspended" })
}

fn email_list() -> Value {
    json!([
        {
            "address": "hello@hostinger-site.com",
            "quotaMb": 10_240,
            "usedMb": 1024,
            "createdAt": "2025-01-20T10:00:00Z"
        }
    ])
}

fn email_created() -> Value {
    json!({
        "address": "noreply@hostinger-site.com",
        "quotaMb": 10_240,
        "usedMb": 0,
        "createdAt": "2025-06-01T12:00:00Z"
    })
}

fn ssl_status() -> Value {
    json!({
        "domain": "hostinger-site.com",
        "status": "active",
        "issuer": "Google Trust Services",
        "expiresAt": "2026-01-20T00:00:00Z"
    })
}

fn ssl_installed() -> Value {
    json!({
        "domain": "hostinger-site.com",
        "status": "pending",
        "issuer": "Google Trust Services"
    })
}

fn ssl_renewed() -> Value {
    json!({
        "domain": "hostinger-site.com",
        "status": "active",
        "issuer": "Google Trust Services",
        "expiresAt": "2026-04-20T00:00:00Z"
    })
}

fn backup_list() -> Value {
    json!([
        {
            "id": "snap_0519",
            "type": "full",
            "status": "completed",
            "createdAt": "2025-05-19T03:00:00Z",
            "sizeMb": 6144
        },
        {
            "id": "snap_0526",
            "type": "incremental",
            "status": "completed",
            "createdAt": "2025-05-26T03:00:00Z",
            "sizeMb": 768
        }
    ])
}

fn backup_started() -> Value {
    json!({
        "id": generate_id("snap"),
        "type": "full",
        "status": "running",
        "createdAt": "2025-06-01T12:00:00Z"
    })
}

fn restore_started() -> Value {
    json!({
        "id": generate_id("xfer"),
        "status": "running",
        "progress": 15,
        "detail": "restoring snapshot"
    })
}

fn usage() -> Value {
    json!({
        "diskUsedMb": 3072,
        "diskLimitMb": 102_400,
        "bandwidthUsedMb": 20_480,
        "bandwidthLimitMb": 1_048_576,
        "inodesUsed": 88_200,
        "cpuPercent": 7.5,
        "memoryPercent": 41.0
    })
}

fn instance_list() -> Value {
    json!([
        {
            "id": "vps_5001",
            "name": "app-server-1",
            "status": "running",
            "region": "eu-central",
            "image": "ubuntu-24.04",
            "ipAddress": "198.51.100.41"
        },
        {
            "id": "vps_5002",
            "name": "staging",
            "status": "stopped",
            "region": "us-east",
            "image": "debian-12",
            "ipAddress": "198.51.100.42"
        }
    ])
}

fn instance_created() -> Value {
    json!({
        "id": generate_id("vps"),
        "name": "new-instance",
        "status": "provisioning",
        "region": "eu-central",
        "image": "ubuntu-24.04"
    })
}
