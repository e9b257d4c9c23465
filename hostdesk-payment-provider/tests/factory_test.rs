//! Payment factory/registry behavior: caching, defaults, mode switching.

mod common;

use std::sync::Arc;

use hostdesk_payment_provider::{
    GatewayFeatures, LiveKeys, Mode, PaymentConfig, PaymentGateway, PaymentGatewayFactory,
    PaymentProvider, ProviderError, test_defaults,
};

fn live_config(provider: PaymentProvider) -> PaymentConfig {
    PaymentConfig {
        provider,
        public_key: "pk_live_custom".to_string(),
        secret_key: "sk_live_custom".to_string(),
        webhook_secret: Some("whsec_live_custom".to_string()),
        mode: Mode::Live,
        supported_currencies: vec!["USD".to_string(), "JPY".to_string()],
        supported_countries: vec!["US".to_string(), "JP".to_string()],
        features: GatewayFeatures {
            subscriptions: true,
            cards: true,
            ..GatewayFeatures::default()
        },
        request_timeout_secs: None,
    }
}

#[test]
fn create_test_gateway_caches_by_provider_and_mode() {
    let factory = PaymentGatewayFactory::new();
    let first = require_ok!(factory.create_test_gateway(PaymentProvider::Paystack));
    let second = require_ok!(factory.create_test_gateway(PaymentProvider::Paystack));
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn remove_then_create_returns_fresh_instance() {
    let factory = PaymentGatewayFactory::new();
    let first = require_ok!(factory.create_test_gateway(PaymentProvider::Stripe));
    assert!(factory.remove_gateway(PaymentProvider::Stripe, Mode::Test));
    let second = require_ok!(factory.create_test_gateway(PaymentProvider::Stripe));
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn get_gateway_is_exact_key_lookup() {
    let factory = PaymentGatewayFactory::new();
    require_ok!(factory.create_test_gateway(PaymentProvider::Flutterwave));
    assert!(factory.get_gateway(PaymentProvider::Flutterwave, Mode::Test).is_some());
    assert!(factory.get_gateway(PaymentProvider::Flutterwave, Mode::Live).is_none());
    assert!(factory.get_gateway(PaymentProvider::Stripe, Mode::Test).is_none());
}

#[test]
fn get_all_gateways_is_a_defensive_copy() {
    let factory = PaymentGatewayFactory::new();
    require_ok!(factory.create_test_gateway(PaymentProvider::MobileMoney));
    let mut snapshot = factory.get_all_gateways();
    assert_eq!(snapshot.len(), 1);
    snapshot.clear();
    assert!(
        factory
            .get_gateway(PaymentProvider::MobileMoney, Mode::Test)
            .is_some()
    );
}

#[test]
fn test_defaults_centralize_features_and_regions() {
    let stripe = test_defaults(PaymentProvider::Stripe);
    assert!(stripe.public_key.starts_with("pk_test_"));
    assert!(stripe.webhook_secret.is_some());
    assert!(stripe.features.subscriptions);
    assert!(!stripe.features.mobile_money);
    assert!(stripe.supports_currency("usd"));

    let paystack = test_defaults(PaymentProvider::Paystack);
    assert!(paystack.supports_currency("NGN"));
    assert!(paystack.supports_country("ng"));
    assert!(paystack.features.ussd);
    assert!(paystack.features.mobile_money);

    let momo = test_defaults(PaymentProvider::MobileMoney);
    assert!(!momo.features.subscriptions);
    assert!(!momo.features.invoices);
    assert!(!momo.features.cards);
    assert!(momo.features.mobile_money);
}

#[tokio::test]
async fn switch_to_live_without_keys_is_a_configuration_error() {
    let factory = PaymentGatewayFactory::new();
    require_ok!(factory.create_test_gateway(PaymentProvider::Paystack));

    let err = factory
        .switch_mode(PaymentProvider::Paystack, Mode::Live, None)
        .await
        .unwrap_err();
    assert!(
        matches!(&err, ProviderError::MissingLiveKeys { provider } if provider == "paystack"),
        "unexpected error: {err}"
    );
    assert!(err.is_configuration());
}

#[tokio::test]
async fn switch_to_live_without_prior_test_config_fails() {
    let factory = PaymentGatewayFactory::new();
    let keys = LiveKeys {
        public_key: "pk_live_x".to_string(),
        secret_key: "sk_live_x".to_string(),
        webhook_secret: None,
    };
    let err = factory
        .switch_mode(PaymentProvider::Stripe, Mode::Live, Some(keys))
        .await
        .unwrap_err();
    assert!(
        matches!(
            &err,
            ProviderError::NoPriorConfiguration { provider, mode }
                if provider == "stripe" && *mode == Mode::Test
        ),
        "unexpected error: {err}"
    );
    assert!(err.is_configuration());
}

#[tokio::test]
async fn switch_back_to_test_derives_from_live_config_and_initializes() {
    let factory = PaymentGatewayFactory::new();
    let live = require_ok!(factory.create_gateway(live_config(PaymentProvider::Stripe)));

    let test = require_ok!(
        factory
            .switch_mode(PaymentProvider::Stripe, Mode::Test, None)
            .await
    );
    assert_eq!(test.mode(), Mode::Test);
    assert!(test.is_ready(), "switch_mode initializes the new gateway");

    // Keys come from the canonical sandbox table, regions/features from the
    // prior live configuration
    assert!(test.config().public_key.starts_with("pk_test_"));
    assert_eq!(
        test.config().supported_currencies,
        vec!["USD".to_string(), "JPY".to_string()]
    );
    assert!(test.config().features.subscriptions);

    // The live instance stays cached untouched; both modes coexist
    let still_live = require_some!(factory.get_gateway(PaymentProvider::Stripe, Mode::Live));
    assert!(Arc::ptr_eq(&live, &still_live));
    assert!(factory.get_gateway(PaymentProvider::Stripe, Mode::Test).is_some());
}
