//! Canned Flutterwave responses served in test mode.
//!
//! Wrapped in the live `{status: "success", message, data}` envelope.
//! Amounts are major units throughout; create fixtures omit echoed fields.

use serde_json::{Value, json};

use hostdesk_provider_core::id::generate_id;

type Fixture = (&'static str, fn() -> Value);

const FIXTURES: &[Fixture] = &[
    ("GET /balances", balances),
    ("/verify", tx_verified),
    ("/refund", refund_processed),
    ("GET /transactions/", tx_detail),
    ("POST /payments", payment_created),
    ("GET /customers/", customer_detail),
    ("POST /customers", customer_created),
    ("/cancel", subscription_cancelled),
    ("GET /subscriptions/", subscription_detail),
    ("POST /subscriptions", subscription_created),
    ("GET /invoices/", invoice_detail),
    ("GET /invoices", invoice_list),
];

pub(super) fn lookup(target: &str) -> Option<Value> {
    FIXTURES
        .iter()
        .find(|(key, _)| target.contains(key))
        .map(|(_, build)| build())
}

fn envelope(message: &str, data: Value) -> Value {
    json!({ "status": "success", "message": message, "data": data })
}

fn balances() -> Value {
    envelope(
        "Balances fetched",
        json!([{ "currency": "NGN", "available_balance": 1_250_000.0 }]),
    )
}

fn payment_created() -> Value {
    envelope(
        "Hosted payment link created",
        json!({
            "tx_ref": generate_id("flw"),
            "link": "https://checkout.flutterwave.com/v3/hosted/pay/mockflw"
        }),
    )
}

fn tx_verified() -> Value {
    envelope(
        "Transaction fetched successfully",
        json!({
            "amount": 100.0,
            "currency": "NGN",
            "status": "successful",
            "created_at": "2025-06-01T12:00:00Z"
        }),
    )
}

fn tx_detail() -> Value {
    envelope(
        "Transaction fetched successfully",
        json!({
            "amount": 100.0,
            "currency": "NGN",
            "status": "pending",
            "created_at": "2025-06-01T12:00:00Z"
        }),
    )
}

fn refund_processed() -> Value {
    envelope(
        "Refund initiated",
        json!({
            "amount": 100.0,
            "currency": "NGN",
            "status": "completed"
        }),
    )
}

fn customer_created() -> Value {
    envelope(
        "Customer created",
        json!({
            "id": generate_id("flwcus"),
            "created_at": "2025-06-01T12:00:00Z"
        }),
    )
}

fn customer_detail() -> Value {
    envelope(
        "Customer fetched",
        json!({
            "id": "flwcus_mock0001",
            "email": "amina@example.ke",
            "name": "Amina Wanjiru",
            "phone_number": "+254712345678",
            "created_at": "2025-02-10T09:00:00Z"
        }),
    )
}

fn subscription_created() -> Value {
    envelope(
        "Subscription created",
        json!({
            "id": generate_id("flwsub"),
            "status": "active",
            "next_due": "2025-07-01T00:00:00Z",
            "created_at": "2025-06-01T12:00:00Z"
        }),
    )
}

fn subscription_detail() -> Value {
    envelope(
        "Subscription fetched",
        json!({
            "id": "flwsub_mock0001",
            "customer": "flwcus_mock0001",
            "plan": "plan_hosting_monthly",
            "status": "active",
            "next_due": "2025-07-01T00:00:00Z",
            "created_at": "2025-02-10T09:00:00Z"
        }),
    )
}

fn subscription_cancelled() -> Value {
    envelope(
        "Subscription cancelled",
        json!({
            "status": "cancelled"
        }),
    )
}

fn invoice_list() -> Value {
    envelope(
        "Invoices fetched",
        json!([
            {
                "id": "flwinv_mock0001",
                "customer": "flwcus_mock0001",
                "amount": 4500.0,
                "currency": "KES",
                "status": "paid",
                "created_at": "2025-05-02T08:00:00Z"
            },
            {
                "id": "flwinv_mock0002",
                "customer": "flwcus_mock0001",
                "amount": 4500.0,
                "currency": "KES",
                "status": "unpaid",
                "due_date": "2025-07-02T00:00:00Z",
                "created_at": "2025-06-02T08:00:00Z"
            }
        ]),
    )
}

fn invoice_detail() -> Value {
    envelope(
        "Invoice fetched",
        json!({
            "id": "flwinv_mock0001",
            "customer": "flwcus_mock0001",
            "amount": 4500.0,
            "currency": "KES",
            "status": "paid",
            "created_at": "2025-05-02T08:00:00Z"
        }),
    )
}
