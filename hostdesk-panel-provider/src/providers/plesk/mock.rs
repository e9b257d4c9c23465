//! Canned Plesk REST responses served in test mode.
//!
//! Plain payloads, no envelope; errors never occur here by construction.
//! Entries are ordered most-specific first because several operations share
//! path prefixes (`/domains/{name}/certificates` vs `/domains/{name}`).
//! Mail deletions fall back to the dispatcher's generic ack.

use serde_json::{Value, json};

use hostdesk_provider_core::id::generate_id;

type Fixture = (&'static str, fn() -> Value);

const FIXTURES: &[Fixture] = &[
    ("GET /api/v2/server", server_info),
    ("POST /api/v2/domain-transfers", transfer_started),
    ("certificates/renew", ssl_renewed),
    ("POST /api/v2/domains/", ssl_installed),
    ("/certificates", ssl_status),
    ("GET /api/v2/domains/", domain_detail),
    ("GET /api/v2/domains", domain_list),
    ("POST /api/v2/domains", domain_created),
    ("PUT /api/v2/dns/records", dns_updated),
    ("/statistics", statistics),
    ("/suspend", suspend_ack),
    ("/activate", activate_ack),
    ("GET /api/v2/clients/", client_detail),
    ("GET /api/v2/clients", client_list),
    ("POST /api/v2/clients", client_created),
    ("GET /api/v2/mail/addresses", mailbox_list),
    ("POST /api/v2/mail/addresses", mailbox_created),
    ("/restore", restore_started),
    ("GET /api/v2/backups", backup_list),
    ("POST /api/v2/backups", backup_started),
];

pub(super) fn lookup(target: &str) -> Option<Value> {
    FIXTURES
        .iter()
        .find(|(key, _)| target.contains(key))
        .map(|(_, build)| build())
}

fn server_info() -> Value {
    json!({ "platform": "Ubuntu 22.04", "version": "18.0.62" })
}

fn demo_domain() -> Value {
    json!({
        "id": 4201,
        "name": "plesk-demo.net",
        "status": "active",
        "registrar": "OpenSRS",
        "expiration_date": "2027-03-10T00:00:00Z",
        "dns_records": [
            { "host": "@", "type": "A", "value": "198.51.100.24", "ttl": 3600 },
            { "host": "mail", "type": "A", "value": "198.51.100.25", "ttl": 3600 }
        ],
        "certificate": {
            "domain": "plesk-demo.net",
            "status": "valid",
            "issuer": "Sectigo",
            "expiration_date": "2026-04-18T00:00:00Z"
        }
    })
}

fn domain_list() -> Value {
    json!([
        demo_domain(),
        {
            "id": 4202,
            "name": "old-site.example",
            "status": "expired",
            "registrar": "OpenSRS",
            "expiration_date": "2025-01-02T00:00:00Z",
            "dns_records": []
        }
    ])
}

fn domain_detail() -> Value {
    demo_domain()
}

fn domain_created() -> Value {
    json!({
        "id": 4203,
        "name": "fresh-site.example",
        "status": "pending",
        "dns_records": []
    })
}

fn dns_updated() -> Value {
    json!({ "success": true, "message": "DNS zone updated" })
}

fn transfer_started() -> Value {
    json!({
        "id": generate_id("task"),
        "status": "queued",
        "progress": 0,
        "detail": "transfer request submitted"
    })
}

fn client_list() -> Value {
    json!([
        {
            "id": 101,
            "login": "jdoe",
            "status": "active",
            "plan": "Web Pro",
            "domain": "plesk-demo.net",
            "disk_used_mb": 2048,
            "disk_limit_mb": 20480,
            "bandwidth_used_mb": 10240,
            "bandwidth_limit_mb": 512_000
        },
        {
            "id": 102,
            "login": "acme",
            "status": "suspended",
            "plan": "Web Admin",
            "domain": "old-site.example",
            "disk_used_mb": 18230,
            "disk_limit_mb": 20480,
            "bandwidth_used_mb": 498_000,
            "bandwidth_limit_mb": 512_000
        }
    ])
}

fn client_detail() -> Value {
    json!({
        "id": 101,
        "login": "jdoe",
        "status": "active",
        "plan": "Web Pro",
        "domain": "plesk-demo.net",
        "disk_used_mb": 2048,
        "disk_limit_mb": 20480,
        "bandwidth_used_mb": 10240,
        "bandwidth_limit_mb": 512_000
    })
}

fn client_created() -> Value {
    json!({
        "id": 103,
        "login": "newclient",
        "status": "active",
        "plan": "Web Admin",
        "domain": "fresh-site.example",
        "disk_used_mb": 0,
        "disk_limit_mb": 10240,
        "bandwidth_used_mb": 0,
        "bandwidth_limit_mb": 256_000
    })
}

fn statistics() -> Value {
    json!({
        "disk_used_mb": 2048,
        "disk_limit_mb": 20480,
        "bandwidth_used_mb": 10240,
        "bandwidth_limit_mb": 512_000,
        "inodes_used": 48_213,
        "cpu_percent": 12.5,
        "memory_percent": 38.0
    })
}

fn suspend_ack() -> Value {
    json!({ "success": true, "message": "client suspended" })
}

fn activate_ack() -> Value {
    json!({ "success": true, "message": "client activated" })
}

fn mailbox_list() -> Value {
    json!([
        {
            "name": "contact@plesk-demo.net",
            "quota_mb": 1024,
            "used_mb": 310,
            "created": "2025-02-11T08:00:00Z"
        },
        {
            "name": "billing@plesk-demo.net",
            "quota_mb": 512,
            "used_mb": 44,
            "created": "2025-02-11T08:05:00Z"
        }
    ])
}

fn mailbox_created() -> Value {
    json!({
        "name": "team@plesk-demo.net",
        "quota_mb": 1024,
        "used_mb": 0,
        "created": "2025-06-01T12:00:00Z"
    })
}

fn ssl_status() -> Value {
    json!({
        "domain": "plesk-demo.net",
        "status": "valid",
        "issuer": "Sectigo",
        "expiration_date": "2026-04-18T00:00:00Z"
    })
}

fn ssl_installed() -> Value {
    json!({
        "domain": "plesk-demo.net",
        "status": "valid",
        "issuer": "Sectigo",
        "expiration_date": "2026-07-18T00:00:00Z"
    })
}

fn ssl_renewed() -> Value {
    json!({
        "domain": "plesk-demo.net",
        "status": "valid",
        "issuer": "Sectigo",
        "expiration_date": "2026-10-18T00:00:00Z"
    })
}

fn backup_list() -> Value {
    json!([
        {
            "id": "backup_2025-05-18",
            "type": "full",
            "status": "completed",
            "created_at": "2025-05-18T01:30:00Z",
            "size_mb": 4096
        },
        {
            "id": "backup_2025-05-25",
            "type": "incremental",
            "status": "completed",
            "created_at": "2025-05-25T01:30:00Z",
            "size_mb": 512
        }
    ])
}

fn backup_started() -> Value {
    json!({
        "id": generate_id("backup"),
        "type": "full",
        "status": "running",
        "created_at": "2025-06-01T12:00:00Z"
    })
}

fn restore_started() -> Value {
    json!({
        "id": generate_id("task"),
        "status": "running",
        "progress": 10,
        "detail": "restoring subscription data"
    })
}
