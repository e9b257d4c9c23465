//! Mobile-money aggregator test-mode suite.

mod common;

use common::sign_sha256;
use hostdesk_payment_provider::{
    CreatePaymentIntentRequest, CreateSubscriptionRequest, MobileMoneyCapable, PaymentGateway,
    PaymentGatewayFactory, PaymentIntentStatus, PaymentProvider, PhoneChargeRequest,
    WebhookEventKind,
};
use std::sync::Arc;

fn mobile_money() -> Arc<dyn PaymentGateway> {
    let factory = PaymentGatewayFactory::new();
    factory
        .create_test_gateway(PaymentProvider::MobileMoney)
        .expect("mobile money gateway")
}

#[tokio::test]
async fn mobile_money_capability_is_present() {
    let gateway = mobile_money();
    assert!(gateway.mobile_money().is_some());
}

#[tokio::test]
async fn network_discovery_filters_by_country() {
    let gateway = mobile_money();
    let capability = require_some!(gateway.mobile_money());

    let ghana = require_ok!(capability.list_networks("GH").await);
    assert_eq!(ghana.len(), 2);
    assert!(ghana.iter().all(|network| network.country == "GH"));
    assert!(ghana.iter().all(|network| network.currency == "GHS"));

    let kenya = require_ok!(capability.list_networks("ke").await);
    assert_eq!(kenya.len(), 1);
    assert_eq!(kenya[0].name, "M-Pesa");
}

#[tokio::test]
async fn phone_charge_starts_pending_with_major_units() {
    let gateway = mobile_money();
    let capability = require_some!(gateway.mobile_money());

    let intent = require_ok!(
        capability
            .charge_phone(&PhoneChargeRequest {
                phone_number: "+233201234567".to_string(),
                amount: 75.5,
                currency: "ghs".to_string(),
                network_id: Some("mtn-gh".to_string()),
            })
            .await
    );
    assert!(intent.id.starts_with("mm_"));
    assert_eq!(intent.status, PaymentIntentStatus::Pending);
    assert!((intent.amount - 75.5).abs() < f64::EPSILON);
    assert_eq!(intent.currency, "GHS");
}

#[tokio::test]
async fn generic_intent_call_also_works() {
    let gateway = mobile_money();
    let intent = require_ok!(
        gateway
            .create_payment_intent(&CreatePaymentIntentRequest::new(100.0, "ghs"))
            .await
    );
    assert_eq!(intent.status, PaymentIntentStatus::Pending);
    assert!((intent.amount - 100.0).abs() < f64::EPSILON);

    let confirmed = require_ok!(gateway.confirm_payment(&intent.id).await);
    assert_eq!(confirmed.status, PaymentIntentStatus::Successful);

    let status = require_ok!(gateway.get_payment_status(&intent.id).await);
    assert_eq!(status.status, PaymentIntentStatus::Processing);

    let refunded = require_ok!(gateway.refund_payment(&intent.id, None).await);
    assert_eq!(refunded.status, PaymentIntentStatus::Refunded);
}

#[tokio::test]
async fn subscriptions_and_invoices_are_unsupported_capabilities() {
    let gateway = mobile_money();

    let err = gateway
        .create_subscription(&CreateSubscriptionRequest {
            customer_id: "cus_mm0001".to_string(),
            plan_id: "plan_x".to_string(),
            trial_days: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_capability(), "unexpected error: {err}");

    let err = gateway.list_invoices(None).await.unwrap_err();
    assert!(err.is_capability(), "unexpected error: {err}");

    let err = gateway.get_invoice("inv_1").await.unwrap_err();
    assert!(err.is_capability(), "unexpected error: {err}");
}

#[tokio::test]
async fn webhook_signature_and_events() {
    let gateway = mobile_money();
    let secret = require_some!(gateway.config().webhook_secret.clone());
    let payload = br#"{"id":"evt_mm1","event":"collection.success","data":{}}"#;
    let signature = sign_sha256(&secret, payload);
    assert!(require_ok!(gateway.verify_webhook_signature(payload, &signature)));

    let event = require_ok!(
        gateway
            .handle_webhook(r#"{"id":"evt_mm1","event":"collection.success","data":{}}"#)
            .await
    );
    assert_eq!(event.kind, WebhookEventKind::PaymentSucceeded);
    assert_eq!(event.id.as_deref(), Some("evt_mm1"));
}
