//! Canned aggregator responses served in test mode.
//!
//! Plain payloads. The network catalog is returned whole; the adapter
//! filters by country, so discovery behaves identically in both modes.

use serde_json::{Value, json};

use hostdesk_provider_core::id::generate_id;

type Fixture = (&'static str, fn() -> Value);

const FIXTURES: &[Fixture] = &[
    ("GET /status", status_ok),
    ("POST /collections/charge", charge_created),
    ("/confirm", collection_confirmed),
    ("/refund", refund_processed),
    ("GET /collections/", collection_detail),
    ("POST /collections", collection_created),
    ("GET /customers/", customer_detail),
    ("POST /customers", customer_created),
    ("GET /providers", network_list),
];

pub(super) fn lookup(target: &str) -> Option<Value> {
    FIXTURES
        .iter()
        .find(|(key, _)| target.contains(key))
        .map(|(_, build)| build())
}

fn status_ok() -> Value {
    json!({ "operational": true, "region": "africa-west" })
}

fn collection_created() -> Value {
    json!({
        "id": generate_id("mm"),
        "status": "pending",
        "created_at": "2025-06-01T12:00:00Z"
    })
}

fn charge_created() -> Value {
    json!({
        "id": generate_id("mm"),
        "status": "pending",
        "created_at": "2025-06-01T12:00:00Z"
    })
}

fn collection_confirmed() -> Value {
    json!({
        "status": "successful",
        "amount": 100.0,
        "currency": "GHS",
        "created_at": "2025-06-01T12:00:00Z"
    })
}

fn collection_detail() -> Value {
    json!({
        "status": "processing",
        "amount": 100.0,
        "currency": "GHS",
        "created_at": "2025-06-01T12:00:00Z"
    })
}

fn refund_processed() -> Value {
    json!({
        "status": "refunded",
        "amount": 100.0,
        "currency": "GHS"
    })
}

fn customer_created() -> Value {
    json!({
        "id": generate_id("cus"),
        "created_at": "2025-06-01T12:00:00Z"
    })
}

fn customer_detail() -> Value {
    json!({
        "id": "cus_mm0001",
        "email": "kofi@example.gh",
        "name": "Kofi Mensah",
        "phone": "+233201234567",
        "created_at": "2025-03-12T14:00:00Z"
    })
}

fn network_list() -> Value {
    json!([
        { "id": "mtn-gh", "name": "MTN Mobile Money", "country": "GH", "currency": "GHS" },
        { "id": "vodafone-gh", "name": "Telecel Cash", "country": "GH", "currency": "GHS" },
        { "id": "mpesa-ke", "name": "M-Pesa", "country": "KE", "currency": "KES" },
        { "id": "airtel-ug", "name": "Airtel Money", "country": "UG", "currency": "UGX" },
        { "id": "mixx-tz", "name": "Mixx by Yas", "country": "TZ", "currency": "TZS" }
    ])
}
