//! Flutterwave gateway test-mode suite.

mod common;

use hostdesk_payment_provider::{
    CreatePaymentIntentRequest, InvoiceStatus, PaymentGateway, PaymentGatewayFactory,
    PaymentIntentStatus, PaymentProvider, SubscriptionStatus, WebhookEventKind,
};
use std::sync::Arc;

fn flutterwave() -> Arc<dyn PaymentGateway> {
    let factory = PaymentGatewayFactory::new();
    factory
        .create_test_gateway(PaymentProvider::Flutterwave)
        .expect("flutterwave gateway")
}

#[tokio::test]
async fn amounts_stay_in_major_units() {
    let gateway = flutterwave();
    let intent = require_ok!(
        gateway
            .create_payment_intent(&CreatePaymentIntentRequest::new(100.0, "ngn"))
            .await
    );
    assert!(intent.id.starts_with("flw_"));
    assert!((intent.amount - 100.0).abs() < f64::EPSILON);
    assert_eq!(intent.currency, "NGN");
    assert_eq!(intent.status, PaymentIntentStatus::Pending);
    assert!(require_some!(intent.checkout_url).contains("checkout.flutterwave.com"));
}

#[tokio::test]
async fn confirm_maps_successful_status() {
    let gateway = flutterwave();
    let confirmed = require_ok!(gateway.confirm_payment("flw_under_test").await);
    assert_eq!(confirmed.id, "flw_under_test");
    assert_eq!(confirmed.status, PaymentIntentStatus::Successful);

    let status = require_ok!(gateway.get_payment_status("flw_under_test").await);
    assert_eq!(status.status, PaymentIntentStatus::Pending);
}

#[tokio::test]
async fn refund_maps_completed_to_refunded() {
    let gateway = flutterwave();
    let refunded = require_ok!(gateway.refund_payment("flw_under_test", None).await);
    assert_eq!(refunded.id, "flw_under_test");
    assert_eq!(refunded.status, PaymentIntentStatus::Refunded);
}

#[tokio::test]
async fn subscription_cancel_echoes_id() {
    let gateway = flutterwave();
    let cancelled = require_ok!(gateway.cancel_subscription("flwsub_mock0001").await);
    assert_eq!(cancelled.id, "flwsub_mock0001");
    assert_eq!(cancelled.status, SubscriptionStatus::Cancelled);
}

#[tokio::test]
async fn unpaid_invoices_map_to_open() {
    let gateway = flutterwave();
    let invoices = require_ok!(gateway.list_invoices(None).await);
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[0].status, InvoiceStatus::Paid);
    assert_eq!(invoices[1].status, InvoiceStatus::Open);
    assert_eq!(invoices[1].currency, "KES");
}

#[tokio::test]
async fn webhook_verification_is_hash_equality() {
    let gateway = flutterwave();
    let secret = require_some!(gateway.config().webhook_secret.clone());
    let payload = br#"{"event":"charge.completed","data":{}}"#;
    assert!(require_ok!(gateway.verify_webhook_signature(payload, &secret)));
    assert!(!require_ok!(
        gateway.verify_webhook_signature(payload, "some-other-hash")
    ));
}

#[tokio::test]
async fn webhook_events_normalize() {
    let gateway = flutterwave();
    let event = require_ok!(
        gateway
            .handle_webhook(r#"{"event":"charge.completed","data":{"tx_ref":"flw_1"}}"#)
            .await
    );
    assert_eq!(event.kind, WebhookEventKind::PaymentSucceeded);

    let event = require_ok!(
        gateway
            .handle_webhook(r#"{"event":"subscription.cancelled","data":{}}"#)
            .await
    );
    assert_eq!(event.kind, WebhookEventKind::SubscriptionCancelled);
}

#[tokio::test]
async fn mobile_money_capability_is_absent() {
    let gateway = flutterwave();
    assert!(gateway.mobile_money().is_none());
}
