//! Aggregator `PaymentGateway` and `MobileMoneyCapable` implementations

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use serde_json::{Value, json};

use hostdesk_provider_core::{HttpUtils, Mode, ProviderError, Result};

use crate::providers::common::{
    ensure_feature, hmac_sha256_hex, parse_datetime, parse_intent_status, parse_refund_status,
};
use crate::traits::{MobileMoneyCapable, PaymentGateway};
use crate::types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, CreateSubscriptionRequest, Customer,
    Invoice, MobileMoneyNetwork, PaymentConfig, PaymentIntent, PaymentIntentStatus,
    PaymentProvider, PhoneChargeRequest, Subscription, WebhookEvent, WebhookEventKind,
};

use super::{MmCollection, MmCustomer, MmEvent, MmNetwork, MobileMoneyGateway, PROVIDER};

impl MobileMoneyGateway {
    fn collection_to_intent(
        wire: MmCollection,
        fallback_id: Option<&str>,
        fallback_amount: Option<f64>,
        fallback_currency: Option<&str>,
    ) -> PaymentIntent {
        let currency = wire
            .currency
            .as_deref()
            .or(fallback_currency)
            .map(str::to_uppercase)
            .unwrap_or_default();
        PaymentIntent {
            id: wire
                .id
                .or_else(|| fallback_id.map(str::to_string))
                .unwrap_or_default(),
            provider: PaymentProvider::MobileMoney,
            amount: wire.amount.or(fallback_amount).unwrap_or_default(),
            currency,
            status: wire
                .status
                .as_deref()
                .map_or(PaymentIntentStatus::Pending, parse_intent_status),
            customer_id: None,
            metadata: None,
            created_at: parse_datetime(wire.created_at.as_deref()),
            checkout_url: None,
        }
    }

    fn customer_from_wire(wire: MmCustomer, fallback: Option<&CreateCustomerRequest>) -> Customer {
        Customer {
            id: wire.id.unwrap_or_default(),
            email: wire
                .email
                .or_else(|| fallback.map(|req| req.email.clone()))
                .unwrap_or_default(),
            name: wire.name.or_else(|| fallback.and_then(|req| req.name.clone())),
            phone: wire.phone.or_else(|| fallback.and_then(|req| req.phone.clone())),
            created_at: parse_datetime(wire.created_at.as_deref()),
        }
    }
}

#[async_trait]
impl PaymentGateway for MobileMoneyGateway {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    fn provider(&self) -> PaymentProvider {
        PaymentProvider::MobileMoney
    }

    fn mode(&self) -> Mode {
        self.config.mode
    }

    fn config(&self) -> &PaymentConfig {
        &self.config
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    async fn initialize(&self) -> Result<bool> {
        match self.get::<Value>("/status").await {
            Ok(_) => {
                self.ready.store(true, Ordering::Release);
                Ok(true)
            }
            Err(e) => {
                log::warn!("[{PROVIDER}:{}] initialize failed: {e}", self.config.mode);
                Ok(false)
            }
        }
    }

    async fn create_payment_intent(
        &self,
        req: &CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent> {
        // The aggregator takes major units on the wire; no conversion.
        let body = json!({
            "amount": req.amount,
            "currency": req.currency.to_uppercase(),
            "customer": req.customer_id,
            "metadata": req.metadata,
        });
        let wire: MmCollection = self.post("/collections", body).await?;
        Ok(Self::collection_to_intent(
            wire,
            None,
            Some(req.amount),
            Some(&req.currency),
        ))
    }

    async fn confirm_payment(&self, payment_id: &str) -> Result<PaymentIntent> {
        let endpoint = format!("/collections/{}/confirm", urlencoding::encode(payment_id));
        let wire: MmCollection = self.post(&endpoint, json!({})).await?;
        Ok(Self::collection_to_intent(wire, Some(payment_id), None, None))
    }

    async fn get_payment_status(&self, payment_id: &str) -> Result<PaymentIntent> {
        let endpoint = format!("/collections/{}", urlencoding::encode(payment_id));
        let wire: MmCollection = self.get(&endpoint).await?;
        Ok(Self::collection_to_intent(wire, Some(payment_id), None, None))
    }

    async fn refund_payment(&self, payment_id: &str, amount: Option<f64>) -> Result<PaymentIntent> {
        ensure_feature(PROVIDER, "refunds", self.config.features.refunds)?;
        let endpoint = format!("/collections/{}/refund", urlencoding::encode(payment_id));
        let wire: MmCollection = self.post(&endpoint, json!({ "amount": amount })).await?;
        Ok(PaymentIntent {
            id: wire.id.unwrap_or_else(|| payment_id.to_string()),
            provider: PaymentProvider::MobileMoney,
            amount: wire.amount.or(amount).unwrap_or_default(),
            currency: wire
                .currency
                .map(|c| c.to_uppercase())
                .unwrap_or_default(),
            status: wire
                .status
                .as_deref()
                .map_or(PaymentIntentStatus::Refunded, parse_refund_status),
            customer_id: None,
            metadata: None,
            created_at: parse_datetime(wire.created_at.as_deref()),
            checkout_url: None,
        })
    }

    async fn create_customer(&self, req: &CreateCustomerRequest) -> Result<Customer> {
        let body = json!({
            "email": req.email,
            "name": req.name,
            "phone": req.phone,
        });
        let wire: MmCustomer = self.post("/customers", body).await?;
        Ok(Self::customer_from_wire(wire, Some(req)))
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        let endpoint = format!("/customers/{}", urlencoding::encode(customer_id));
        let wire: MmCustomer = self.get(&endpoint).await?;
        Ok(Self::customer_from_wire(wire, None))
    }

    // The aggregator has no subscription or invoice API at all, so these
    // fail on the capability regardless of configuration; the factory
    // defaults mirror this with disabled flags.

    async fn create_subscription(&self, _req: &CreateSubscriptionRequest) -> Result<Subscription> {
        Err(unsupported("subscriptions"))
    }

    async fn cancel_subscription(&self, _subscription_id: &str) -> Result<Subscription> {
        Err(unsupported("subscriptions"))
    }

    async fn get_subscription(&self, _subscription_id: &str) -> Result<Subscription> {
        Err(unsupported("subscriptions"))
    }

    async fn list_invoices(&self, _customer_id: Option<&str>) -> Result<Vec<Invoice>> {
        Err(unsupported("invoices"))
    }

    async fn get_invoice(&self, _invoice_id: &str) -> Result<Invoice> {
        Err(unsupported("invoices"))
    }

    fn verify_webhook_signature(&self, payload: &[u8], signature: &str) -> Result<bool> {
        let Some(secret) = &self.config.webhook_secret else {
            return Err(ProviderError::MissingWebhookSecret {
                provider: PROVIDER.to_string(),
                mode: self.config.mode,
            });
        };
        Ok(hmac_sha256_hex(secret.as_bytes(), payload) == signature)
    }

    async fn handle_webhook(&self, payload: &str) -> Result<WebhookEvent> {
        let event: MmEvent = HttpUtils::parse_json(payload, PROVIDER, self.config.mode)?;
        let kind = match event.event.as_str() {
            "collection.success" => WebhookEventKind::PaymentSucceeded,
            "collection.failed" => WebhookEventKind::PaymentFailed,
            "refund.success" => WebhookEventKind::RefundCompleted,
            _ => WebhookEventKind::Other,
        };
        log::debug!(
            "[{PROVIDER}:{}] webhook event {}",
            self.config.mode,
            event.event
        );
        Ok(WebhookEvent {
            id: event.id,
            kind,
            data: event.data.unwrap_or(Value::Null),
        })
    }

    fn mobile_money(&self) -> Option<&dyn MobileMoneyCapable> {
        Some(self)
    }
}

fn unsupported(capability: &str) -> ProviderError {
    ProviderError::UnsupportedCapability {
        provider: PROVIDER.to_string(),
        capability: capability.to_string(),
    }
}

#[async_trait]
impl MobileMoneyCapable for MobileMoneyGateway {
    async fn list_networks(&self, country: &str) -> Result<Vec<MobileMoneyNetwork>> {
        let endpoint = format!("/providers?country={}", urlencoding::encode(country));
        let networks: Vec<MmNetwork> = self.get(&endpoint).await?;
        Ok(networks
            .into_iter()
            .filter(|network| network.country.eq_ignore_ascii_case(country))
            .map(|network| MobileMoneyNetwork {
                id: network.id,
                name: network.name,
                country: network.country.to_uppercase(),
                currency: network.currency.to_uppercase(),
            })
            .collect())
    }

    async fn charge_phone(&self, req: &PhoneChargeRequest) -> Result<PaymentIntent> {
        let body = json!({
            "phone_number": req.phone_number,
            "amount": req.amount,
            "currency": req.currency.to_uppercase(),
            "network": req.network_id,
        });
        let wire: MmCollection = self.post("/collections/charge", body).await?;
        Ok(Self::collection_to_intent(
            wire,
            None,
            Some(req.amount),
            Some(&req.currency),
        ))
    }
}
