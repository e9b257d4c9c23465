//! Canned Spaceship responses served in test mode.
//!
//! List endpoints are wrapped in `{items, total}` like the live API; detail
//! endpoints return plain objects. Mailbox deletions fall back to the
//! generic ack.

use serde_json::{Value, json};

use hostdesk_provider_core::id::generate_id;

type Fixture = (&'static str, fn() -> Value);

const FIXTURES: &[Fixture] = &[
    ("GET /api/v1/account", account_info),
    ("/transfer", transfer_started),
    ("GET /api/v1/domains/", domain_detail),
    ("GET /api/v1/domains", domain_list),
    ("POST /api/v1/domains", domain_created),
    ("PUT /api/v1/dns/records/", dns_updated),
    ("/usage", usage),
    ("/resume", resume_ack),
    ("/suspend", suspend_ack),
    ("GET /api/v1/hosting/accounts/", hosting_detail),
    ("GET /api/v1/hosting/accounts", hosting_list),
    ("POST /api/v1/hosting/accounts", hosting_created),
    ("GET /api/v1/email/mailboxes", mailbox_list),
    ("POST /api/v1/email/mailboxes", mailbox_created),
    ("/renew", ssl_renewed),
    ("GET /api/v1/ssl/certificates/", ssl_status),
    ("POST /api/v1/ssl/certificates", ssl_installed),
    ("/restore", restore_started),
    ("GET /api/v1/backups", backup_list),
    ("POST /api/v1/backups", backup_started),
];

pub(super) fn lookup(target: &str) -> Option<Value> {
    FIXTURES
        .iter()
        .find(|(key, _)| target.contains(key))
        .map(|(_, build)| build())
}

fn account_info() -> Value {
    json!({ "email": "ops@hostdesk.example", "balance": 125.40 })
}

fn orbit_domain() -> Value {
    json!({
        "name": "orbit-labs.io",
        "status": "active",
        "registrar": "Spaceship",
        "expirationDate": "2027-07-04T00:00:00Z",
        "dnsRecords": [
            { "name": "@", "type": "A", "value": "192.0.2.200", "ttl": 1800 },
            { "name": "@", "type": "TXT", "value": "v=spf1 include:_spf.orbit-labs.io ~all", "ttl": 1800 }
        ],
        "ssl": {
            "domain": "orbit-labs.io",
            "status": "active",
            "issuer": "ZeroSSL",
            "expirationDate": "2026-03-09T00:00:00Z"
        }
    })
}

fn domain_list() -> Value {
    json!({
        "items": [
            orbit_domain(),
            {
                "name": "moonbase.dev",
                "status": "pendingTransfer",
                "registrar": "Spaceship",
                "dnsRecords": []
            }
        ],
        "total": 2
    })
}

fn domain_detail() -> Value {
    orbit_domain()
}

fn domain_created() -> Value {
    json!({
        "name": "launchpad.app",
        "status": "pending",
        "registrar": "Spaceship",
        "dnsRecords": []
    })
}

fn dns_updated() -> Value {
    json!({ "success": true, "message": "records replaced" })
}

fn transfer_started() -> Value {
    json!({
        "id": generate_id("task"),
        "status": "pending",
        "progress": 0,
        "detail": "transfer lock check"
    })
}

fn hosting_list() -> Value {
    json!([
        {
            "id": "sh_301",
            "domain": "orbit-labs.io",
            "username": "orbit",
            "plan": "Nebula",
            "status": "active",
            "diskUsedMb": 1024,
            "diskLimitMb": 51_200,
            "bandwidthUsedMb": 4096,
            "bandwidthLimitMb": 256_000
        }
    ])
}

fn hosting_detail() -> Value {
    json!({
        "id": "sh_301",
        "domain": "orbit-labs.io",
        "username": "orbit",
        "plan": "Nebula",
        "status": "active",
        "diskUsedMb": 1024,
        "diskLimitMb": 51_200,
        "bandwidthUsedMb": 4096,
        "bandwidthLimitMb": 256_000
    })
}

fn hosting_created() -> Value {
    json!({
        "id": generate_id("sh"),
        "domain": "launchpad.app",
        "username": "launchpad",
        "plan": "Nebula",
        "status": "pending",
        "diskUsedMb": 0,
        "diskLimitMb": 51_200,
        "bandwidthUsedMb": 0,
        "bandwidthLimitMb": 256_000
    })
}

fn suspend_ack() -> Value {
    json!({ "success": true, "message": "account suspended" })
}

fn resume_ack() -> Value {
    json!({ "success": true, "message": "account resumed" })
}

fn mailbox_list() -> Value {
    json!([
        {
            "address": "crew@orbit-labs.io",
            "quotaMb": 5120,
            "usedMb": 980,
            "createdAt": "2025-03-01T11:00:00Z"
        }
    ])
}

fn mailbox_created() -> Value {
    json!({
        "address": "mission@orbit-labs.io",
        "quotaMb": 5120,
        "usedMb": 0,
        "createdAt": "2025-06-01T12:00:00Z"
    })
}

fn ssl_status() -> Value {
    json!({
        "domain": "orbit-labs.io",
        "status": "active",
        "issuer": "ZeroSSL",
        "expirationDate": "2026-03-09T00:00:00Z"
    })
}

fn ssl_installed() -> Value {
    json!({
        "domain": "orbit-labs.io",
        "status": "pending",
        "issuer": "ZeroSSL"
    })
}

fn ssl_renewed() -> Value {
    json!({
        "domain": "orbit-labs.io",
        "status": "active",
        "issuer": "ZeroSSL",
        "expirationDate": "2026-06-09T00:00:00Z"
    })
}

fn backup_list() -> Value {
    json!([
        {
            "id": "bak_0515",
            "type": "full",
            "status": "completed",
            "createdAt": "2025-05-15T04:00:00Z",
            "sizeMb": 1536
        },
        {
            "id": "bak_0522",
            "type": "database",
            "status": "failed",
            "createdAt": "2025-05-22T04:00:00Z"
        }
    ])
}

fn backup_started() -> Value {
    json!({
        "id": generate_id("bak"),
        "type": "full",
        "status": "running",
        "createdAt": "2025-06-01T12:00:00Z"
    })
}

fn restore_started() -> Value {
    json!({
        "id": generate_id("task"),
        "status": "running",
        "progress": 20,
        "detail": "restore queued on storage node"
    })
}

fn usage() -> Value {
    json!({
        "diskUsedMb": 1024,
        "diskLimitMb": 51_200,
        "bandwidthUsedMb": 4096,
        "bandwidthLimitMb": 256_000,
        "inodesUsed": 20_150
    })
}
