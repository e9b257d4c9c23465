//! Canned Paystack responses served in test mode.
//!
//! Everything is wrapped in the live `{status, message, data}` envelope.
//! Create fixtures omit request-echoed fields (amount, currency, email);
//! normalization falls back to request values. Initialize references are
//! generated with a `txn_` prefix.

use serde_json::{Value, json};

use hostdesk_provider_core::id::generate_id;

type Fixture = (&'static str, fn() -> Value);

const FIXTURES: &[Fixture] = &[
    ("GET /transaction/totals", totals),
    ("GET /transaction/verify/", tx_verified),
    ("POST /transaction/initialize", tx_initialized),
    ("GET /transaction/", tx_detail),
    ("POST /refund", refund_processed),
    ("GET /customer/", customer_detail),
    ("POST /customer", customer_created),
    ("POST /subscription/disable", subscription_disabled),
    ("GET /subscription/", subscription_detail),
    ("POST /subscription", subscription_created),
    ("GET /paymentrequest/", invoice_detail),
    ("GET /paymentrequest", invoice_list),
];

pub(super) fn lookup(target: &str) -> Option<Value> {
    FIXTURES
        .iter()
        .find(|(key, _)| target.contains(key))
        .map(|(_, build)| build())
}

fn envelope(message: &str, data: Value) -> Value {
    json!({ "status": true, "message": message, "data": data })
}

fn totals() -> Value {
    envelope(
        "Transaction totals",
        json!({ "total_transactions": 124, "total_volume": 8_450_000 }),
    )
}

fn tx_initialized() -> Value {
    envelope(
        "Authorization URL created",
        json!({
            "reference": generate_id("txn"),
            "access_code": "ac_mock0001",
            "authorization_url": "https://checkout.paystack.com/ac_mock0001"
        }),
    )
}

fn tx_verified() -> Value {
    envelope(
        "Verification successful",
        json!({
            "amount": 10_000.0,
            "currency": "NGN",
            "status": "success",
            "created_at": "2025-06-01T12:00:00Z"
        }),
    )
}

fn tx_detail() -> Value {
    envelope(
        "Transaction retrieved",
        json!({
            "amount": 10_000.0,
            "currency": "NGN",
            "status": "success",
            "created_at": "2025-06-01T12:00:00Z"
        }),
    )
}

fn refund_processed() -> Value {
    envelope(
        "Refund has been queued for processing",
        json!({
            "amount": 10_000.0,
            "currency": "NGN",
            "status": "processed"
        }),
    )
}

fn customer_created() -> Value {
    envelope(
        "Customer created",
        json!({
            "customer_code": generate_id("cus"),
            "createdAt": "2025-06-01T12:00:00Z"
        }),
    )
}

fn customer_detail() -> Value {
    envelope(
        "Customer retrieved",
        json!({
            "customer_code": "CUS_mock0001",
            "email": "ade@example.ng",
            "first_name": "Ade",
            "last_name": "Okafor",
            "phone": "+2348012345678",
            "createdAt": "2025-01-05T10:00:00Z"
        }),
    )
}

fn subscription_created() -> Value {
    envelope(
        "Subscription successfully created",
        json!({
            "subscription_code": generate_id("sub"),
            "status": "active",
            "next_payment_date": "2025-07-01T00:00:00Z",
            "createdAt": "2025-06-01T12:00:00Z"
        }),
    )
}

fn subscription_detail() -> Value {
    envelope(
        "Subscription retrieved",
        json!({
            "subscription_code": "SUB_mock0001",
            "customer": "CUS_mock0001",
            "plan": "PLN_starter",
            "status": "active",
            "next_payment_date": "2025-07-01T00:00:00Z",
            "createdAt": "2025-01-05T10:00:00Z"
        }),
    )
}

fn subscription_disabled() -> Value {
    envelope(
        "Subscription disabled",
        json!({
            "status": "complete"
        }),
    )
}

fn invoice_list() -> Value {
    envelope(
        "Payment requests retrieved",
        json!([
            {
                "request_code": "PRQ_mock0001",
                "customer": "CUS_mock0001",
                "amount": 50_000.0,
                "currency": "NGN",
                "status": "pending",
                "due_date": "2025-07-15T00:00:00Z",
                "createdAt": "2025-06-01T12:00:00Z"
            },
            {
                "request_code": "PRQ_mock0002",
                "customer": "CUS_mock0001",
                "amount": 25_000.0,
                "currency": "NGN",
                "status": "success",
                "createdAt": "2025-05-01T12:00:00Z"
            }
        ]),
    )
}

fn invoice_detail() -> Value {
    envelope(
        "Payment request retrieved",
        json!({
            "request_code": "PRQ_mock0001",
            "customer": "CUS_mock0001",
            "amount": 50_000.0,
            "currency": "NGN",
            "status": "pending",
            "due_date": "2025-07-15T00:00:00Z",
            "createdAt": "2025-06-01T12:00:00Z"
        }),
    )
}
