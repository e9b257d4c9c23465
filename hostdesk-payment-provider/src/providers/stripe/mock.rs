//! Canned Stripe responses served in test mode.
//!
//! Shapes mirror live responses. Fixtures for create operations omit the
//! request-echoed fields (amount, currency, customer); the wire structs
//! model those as `Option` and normalization falls back to request values,
//! so the mock behaves like the echoing live API without any mode branch in
//! the operations.

use serde_json::{Value, json};

use hostdesk_provider_core::id::generate_id;

type Fixture = (&'static str, fn() -> Value);

const FIXTURES: &[Fixture] = &[
    ("GET /v1/balance", balance),
    ("/confirm", intent_confirmed),
    ("GET /v1/payment_intents/", intent_detail),
    ("POST /v1/payment_intents", intent_created),
    ("POST /v1/refunds", refund_processed),
    ("GET /v1/customers/", customer_detail),
    ("POST /v1/customers", customer_created),
    ("DELETE /v1/subscriptions/", subscription_cancelled),
    ("GET /v1/subscriptions/", subscription_detail),
    ("POST /v1/subscriptions", subscription_created),
    ("GET /v1/invoices/", invoice_detail),
    ("GET /v1/invoices", invoice_list),
];

pub(super) fn lookup(target: &str) -> Option<Value> {
    FIXTURES
        .iter()
        .find(|(key, _)| target.contains(key))
        .map(|(_, build)| build())
}

fn balance() -> Value {
    json!({
        "object": "balance",
        "available": [{ "amount": 250_000, "currency": "usd" }],
        "livemode": false
    })
}

fn intent_created() -> Value {
    json!({
        "id": generate_id("pi"),
        "object": "payment_intent",
        "status": "requires_confirmation",
        "created": 1_748_736_000
    })
}

fn intent_detail() -> Value {
    json!({
        "id": "pi_mock000001",
        "object": "payment_intent",
        "amount": 5050.0,
        "currency": "usd",
        "status": "succeeded",
        "customer": "cus_mock000001",
        "created": 1_748_736_000
    })
}

fn intent_confirmed() -> Value {
    json!({
        "id": "pi_mock000001",
        "object": "payment_intent",
        "amount": 5050.0,
        "currency": "usd",
        "status": "succeeded",
        "created": 1_748_736_000
    })
}

fn refund_processed() -> Value {
    json!({
        "id": generate_id("re"),
        "object": "refund",
        "amount": 5050.0,
        "currency": "usd",
        "status": "succeeded"
    })
}

fn customer_created() -> Value {
    json!({
        "id": generate_id("cus"),
        "object": "customer",
        "created": 1_748_736_000
    })
}

fn customer_detail() -> Value {
    json!({
        "id": "cus_mock000001",
        "object": "customer",
        "email": "billing@example.com",
        "name": "Example Billing Co",
        "created": 1_717_243_200
    })
}

fn subscription_created() -> Value {
    json!({
        "id": generate_id("sub"),
        "object": "subscription",
        "status": "trialing",
        "current_period_end": 1_764_547_200,
        "created": 1_748_736_000
    })
}

fn subscription_detail() -> Value {
    json!({
        "id": "sub_mock000001",
        "object": "subscription",
        "customer": "cus_mock000001",
        "price": "price_pro_monthly",
        "status": "active",
        "current_period_end": 1_764_547_200,
        "created": 1_717_243_200
    })
}

fn subscription_cancelled() -> Value {
    json!({
        "id": "sub_mock000001",
        "object": "subscription",
        "customer": "cus_mock000001",
        "price": "price_pro_monthly",
        "status": "canceled",
        "created": 1_717_243_200
    })
}

fn invoice_list() -> Value {
    json!({
        "object": "list",
        "data": [
            {
                "id": "in_mock000001",
                "object": "invoice",
                "customer": "cus_mock000001",
                "amount_due": 2900.0,
                "currency": "usd",
                "status": "paid",
                "created": 1_746_057_600
            },
            {
                "id": "in_mock000002",
                "object": "invoice",
                "customer": "cus_mock000001",
                "amount_due": 2900.0,
                "currency": "usd",
                "status": "open",
                "due_date": 1_751_328_000,
                "created": 1_748_736_000
            }
        ]
    })
}

fn invoice_detail() -> Value {
    json!({
        "id": "in_mock000001",
        "object": "invoice",
        "customer": "cus_mock000001",
        "amount_due": 2900.0,
        "currency": "usd",
        "status": "paid",
        "created": 1_746_057_600
    })
}
