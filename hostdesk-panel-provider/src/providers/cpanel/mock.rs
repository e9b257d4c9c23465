//! Canned UAPI/WHM responses served in test mode.
//!
//! Fixtures are shaped exactly like live responses, envelope included, so
//! the same normalization path runs in both modes. Entries are ordered
//! most-specific first; `lookup` returns the first key that is a substring
//! of the resolved `"{VERB} {endpoint}"` target. Acknowledgement-only
//! endpoints (`Email/delete_pop`) intentionally have no entry and fall back
//! to the dispatcher's generic ack.

use serde_json::{Value, json};

use hostdesk_provider_core::id::generate_id;

type Fixture = (&'static str, fn() -> Value);

const FIXTURES: &[Fixture] = &[
    ("GET /json-api/version", version),
    ("GET /execute/DomainInfo/domains_data", domain_detail),
    ("GET /execute/DomainInfo/list_domains", domain_list),
    ("POST /execute/Park/park", domain_created),
    ("POST /json-api/mass_edit_dns_zone", dns_updated),
    ("POST /json-api/start_transfer", transfer_started),
    ("GET /json-api/listaccts", account_list),
    ("GET /json-api/accountsummary", account_detail),
    ("POST /json-api/createacct", account_created),
    ("POST /json-api/suspendacct", suspend_ack),
    ("POST /json-api/unsuspendacct", unsuspend_ack),
    ("GET /execute/Email/list_pops", email_list),
    ("POST /execute/Email/add_pop", email_created),
    ("GET /execute/SSL/installed_host", ssl_status),
    ("POST /execute/SSL/install_ssl", ssl_installed),
    ("POST /execute/SSL/renew_ssl", ssl_renewed),
    ("GET /execute/Backup/list_backups", backup_list),
    ("POST /execute/Backup/fullbackup_to_homedir", backup_started),
    ("POST /execute/Backup/restore_files", restore_started),
    ("GET /execute/Quota/get_quota_info", quota),
];

pub(super) fn lookup(target: &str) -> Option<Value> {
    FIXTURES
        .iter()
        .find(|(key, _)| target.contains(key))
        .map(|(_, build)| build())
}

fn envelope(data: Value) -> Value {
    json!({ "status": 1, "data": data, "errors": null })
}

fn version() -> Value {
    envelope(json!({ "version": "11.110.0" }))
}

fn example_domain() -> Value {
    json!({
        "domain": "example.com",
        "status": "active",
        "registrar": "Namecheap",
        "expires_on": "2026-11-30T00:00:00Z",
        "dns_records": [
            { "name": "@", "type": "A", "record": "203.0.113.10", "ttl": 14400 },
            { "name": "www", "type": "CNAME", "record": "example.com", "ttl": 14400 },
            { "name": "@", "type": "MX", "record": "mail.example.com", "ttl": 3600 }
        ],
        "ssl": {
            "domain": "example.com",
            "status": "active",
            "issuer": "Let's Encrypt",
            "not_after": "2026-02-01T00:00:00Z"
        }
    })
}

fn domain_list() -> Value {
    envelope(json!([example_domain()]))
}

fn domain_detail() -> Value {
    envelope(example_domain())
}

fn domain_created() -> Value {
    envelope(json!({
        "domain": "parked.example.com",
        "status": "pending",
        "registrar": "Namecheap",
        "dns_records": []
    }))
}

fn dns_updated() -> Value {
    envelope(json!({ "success": true, "message": "zone updated" }))
}

fn transfer_started() -> Value {
    envelope(json!({
        "transfer_id": generate_id("mig"),
        "status": "pending",
        "progress": 0,
        "detail": "awaiting registrar approval"
    }))
}

fn account_list() -> Value {
    envelope(json!([
        {
            "user": "examplecom",
            "domain": "example.com",
            "plan": "starter",
            "suspended": 0,
            "disk_used_mb": 512,
            "disk_limit_mb": 10240,
            "bandwidth_used_mb": 2048,
            "bandwidth_limit_mb": 102_400
        },
        {
            "user": "suspendeduser",
            "domain": "suspended.example.net",
            "plan": "starter",
            "suspended": 1,
            "disk_used_mb": 8192,
            "disk_limit_mb": 10240,
            "bandwidth_used_mb": 99_328,
            "bandwidth_limit_mb": 102_400
        }
    ]))
}

fn account_detail() -> Value {
    envelope(json!({
        "user": "examplecom",
        "domain": "example.com",
        "plan": "starter",
        "suspended": 0,
        "disk_used_mb": 512,
        "disk_limit_mb": 10240,
        "bandwidth_used_mb": 2048,
        "bandwidth_limit_mb": 102_400
    }))
}

fn account_created() -> Value {
    envelope(json!({
        "user": "newcustomer",
        "domain": "new-customer.example.org",
        "plan": "starter",
        "suspended": 0,
        "disk_used_mb": 0,
        "disk_limit_mb": 10240,
        "bandwidth_used_mb": 0,
        "bandwidth_limit_mb": 102_400
    }))
}

fn suspend_ack() -> Value {
    envelope(json!({ "success": true, "message": "account suspended" }))
}

fn unsuspend_ack() -> Value {
    envelope(json!({ "success": true, "message": "account unsuspended" }))
}

fn email_list() -> Value {
    envelope(json!([
        {
            "email": "info@example.com",
            "diskquota": 1024,
            "diskused": 128,
            "created": "2025-03-14T09:30:00Z"
        },
        {
            "email": "sales@example.com",
            "diskquota": 2048,
            "diskused": 640,
            "created": "2025-04-02T16:45:00Z"
        }
    ]))
}

fn email_created() -> Value {
    envelope(json!({
        "email": "support@example.com",
        "diskquota": 1024,
        "diskused": 0,
        "created": "2025-06-01T12:00:00Z"
    }))
}

fn ssl_status() -> Value {
    envelope(json!({
        "domain": "example.com",
        "status": "active",
        "issuer": "Let's Encrypt",
        "not_after": "2026-02-01T00:00:00Z"
    }))
}

fn ssl_installed() -> Value {
    envelope(json!({
        "domain": "example.com",
        "status": "active",
        "issuer": "Let's Encrypt",
        "not_after": "2026-05-01T00:00:00Z"
    }))
}

fn ssl_renewed() -> Value {
    envelope(json!({
        "domain": "example.com",
        "status": "active",
        "issuer": "Let's Encrypt",
        "not_after": "2026-08-01T00:00:00Z"
    }))
}

fn backup_list() -> Value {
    envelope(json!([
        {
            "backupid": "bk_20250520",
            "type": "full",
            "status": "completed",
            "time": "2025-05-20T02:00:00Z",
            "size_mb": 2048
        },
        {
            "backupid": "bk_20250527",
            "type": "incremental",
            "status": "completed",
            "time": "2025-05-27T02:00:00Z",
            "size_mb": 256
        }
    ]))
}

fn backup_started() -> Value {
    envelope(json!({
        "backupid": generate_id("bk"),
        "type": "full",
        "status": "in_progress",
        "time": "2025-06-01T12:00:00Z"
    }))
}

fn restore_started() -> Value {
    envelope(json!({
        "transfer_id": generate_id("mig"),
        "status": "in_progress",
        "progress": 5,
        "detail": "restoring home directory"
    }))
}

fn quota() -> Value {
    envelope(json!({
        "megabytes_used": 512,
        "megabyte_limit": 10240,
        "bandwidth_used_mb": 2048,
        "bandwidth_limit_mb": 102_400,
        "inodes_used": 14230
    }))
}
