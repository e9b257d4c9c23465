//! Paystack gateway test-mode suite.

mod common;

use common::sign_sha512;
use hostdesk_payment_provider::{
    CreateCustomerRequest, CreatePaymentIntentRequest, CreateSubscriptionRequest, InvoiceStatus,
    PaymentGateway, PaymentGatewayFactory, PaymentIntentStatus, PaymentProvider,
    SubscriptionStatus, WebhookEventKind,
};
use std::sync::Arc;

fn paystack() -> Arc<dyn PaymentGateway> {
    let factory = PaymentGatewayFactory::new();
    factory
        .create_test_gateway(PaymentProvider::Paystack)
        .expect("paystack gateway")
}

#[tokio::test]
async fn initialize_marks_gateway_ready() {
    let gateway = paystack();
    assert!(!gateway.is_ready());
    assert!(require_ok!(gateway.initialize().await));
    assert!(gateway.is_ready());
}

#[tokio::test]
async fn create_intent_converts_to_kobo_and_uppercases_currency() {
    let gateway = paystack();
    let intent = require_ok!(
        gateway
            .create_payment_intent(&CreatePaymentIntentRequest::new(100.0, "ngn"))
            .await
    );
    assert!(intent.id.starts_with("txn_"), "got id {}", intent.id);
    assert!((intent.amount - 10_000.0).abs() < f64::EPSILON);
    assert_eq!(intent.currency, "NGN");
    assert_eq!(intent.status, PaymentIntentStatus::Pending);
    assert!(intent.checkout_url.is_some());
}

#[tokio::test]
async fn fractional_amounts_round_to_whole_kobo() {
    let gateway = paystack();
    let intent = require_ok!(
        gateway
            .create_payment_intent(&CreatePaymentIntentRequest::new(125.5, "ngn"))
            .await
    );
    assert!((intent.amount - 12_550.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn confirm_echoes_the_reference_and_succeeds() {
    let gateway = paystack();
    let confirmed = require_ok!(gateway.confirm_payment("txn_under_test").await);
    assert_eq!(confirmed.id, "txn_under_test");
    assert_eq!(confirmed.status, PaymentIntentStatus::Successful);
    assert!((confirmed.amount - 10_000.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn refund_returns_refunded_intent() {
    let gateway = paystack();
    let refunded = require_ok!(gateway.refund_payment("txn_under_test", None).await);
    assert_eq!(refunded.id, "txn_under_test");
    assert_eq!(refunded.status, PaymentIntentStatus::Refunded);
}

#[tokio::test]
async fn customer_lifecycle() {
    let gateway = paystack();
    let created = require_ok!(
        gateway
            .create_customer(&CreateCustomerRequest {
                email: "ops@reseller.ng".to_string(),
                name: None,
                phone: None,
            })
            .await
    );
    assert!(created.id.starts_with("cus_"));
    assert_eq!(created.email, "ops@reseller.ng");

    let fetched = require_ok!(gateway.get_customer("CUS_mock0001").await);
    assert_eq!(fetched.name.as_deref(), Some("Ade Okafor"));
    assert_eq!(fetched.email, "ade@example.ng");
}

#[tokio::test]
async fn subscription_lifecycle() {
    let gateway = paystack();
    let created = require_ok!(
        gateway
            .create_subscription(&CreateSubscriptionRequest {
                customer_id: "CUS_mock0001".to_string(),
                plan_id: "PLN_starter".to_string(),
                trial_days: None,
            })
            .await
    );
    assert_eq!(created.status, SubscriptionStatus::Active);
    assert_eq!(created.customer_id, "CUS_mock0001");
    assert_eq!(created.plan_id, "PLN_starter");

    let cancelled = require_ok!(gateway.cancel_subscription("SUB_mock0001").await);
    assert_eq!(cancelled.id, "SUB_mock0001");
    assert_eq!(cancelled.status, SubscriptionStatus::Cancelled);
}

#[tokio::test]
async fn invoices_map_payment_requests() {
    let gateway = paystack();
    let invoices = require_ok!(gateway.list_invoices(Some("CUS_mock0001")).await);
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[0].status, InvoiceStatus::Open);
    assert_eq!(invoices[1].status, InvoiceStatus::Paid);

    let invoice = require_ok!(gateway.get_invoice("PRQ_mock0001").await);
    assert_eq!(invoice.currency, "NGN");
    assert_eq!(invoice.status, InvoiceStatus::Open);
}

#[tokio::test]
async fn webhook_signature_falls_back_to_secret_key() {
    let gateway = paystack();
    let payload = br#"{"event":"charge.success","data":{"reference":"txn_1"}}"#;
    // No webhook secret in the paystack defaults, so the secret key signs
    let signature = sign_sha512(&gateway.config().secret_key, payload);
    assert!(require_ok!(gateway.verify_webhook_signature(payload, &signature)));
    assert!(!require_ok!(
        gateway.verify_webhook_signature(payload, "deadbeef")
    ));
}

#[tokio::test]
async fn webhook_events_normalize() {
    let gateway = paystack();
    let event = require_ok!(
        gateway
            .handle_webhook(r#"{"event":"charge.success","data":{"reference":"txn_1"}}"#)
            .await
    );
    assert_eq!(event.kind, WebhookEventKind::PaymentSucceeded);

    let event = require_ok!(
        gateway
            .handle_webhook(r#"{"event":"subscription.disable","data":{}}"#)
            .await
    );
    assert_eq!(event.kind, WebhookEventKind::SubscriptionCancelled);

    let event = require_ok!(
        gateway
            .handle_webhook(r#"{"event":"transfer.success","data":{}}"#)
            .await
    );
    assert_eq!(event.kind, WebhookEventKind::Other);
}

#[tokio::test]
async fn mobile_money_capability_is_absent() {
    let gateway = paystack();
    assert!(gateway.mobile_money().is_none());
}
