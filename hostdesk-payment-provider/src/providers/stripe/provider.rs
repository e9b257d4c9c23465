//! Stripe `PaymentGateway` trait implementation

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use serde_json::{Value, json};

use hostdesk_provider_core::{HttpUtils, Mode, ProviderError, Result};

use crate::providers::common::{
    ensure_feature, parse_intent_status, parse_invoice_status, parse_refund_status,
    parse_subscription_status, timestamp_to_datetime,
};
use crate::traits::PaymentGateway;
use crate::types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, CreateSubscriptionRequest, Customer,
    Invoice, InvoiceStatus, PaymentConfig, PaymentIntent, PaymentIntentStatus, PaymentProvider,
    Subscription, SubscriptionStatus, WebhookEvent, WebhookEventKind,
};

use super::{
    PROVIDER, StripeCustomer, StripeEvent, StripeGateway, StripeInvoice, StripeList,
    StripePaymentIntent, StripeRefund, StripeSubscription,
};

/// Stripe operates in the smallest currency unit.
const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

impl StripeGateway {
    fn to_minor(amount: f64) -> f64 {
        (amount * MINOR_UNITS_PER_MAJOR).round()
    }

    /// Normalize a wire intent, falling back to request-derived values for
    /// fields the response omitted.
    fn intent_from_wire(
        wire: StripePaymentIntent,
        fallback_amount: Option<f64>,
        fallback_currency: Option<&str>,
        fallback_customer: Option<&str>,
        fallback_metadata: Option<Value>,
    ) -> PaymentIntent {
        let currency = wire
            .currency
            .as_deref()
            .or(fallback_currency)
            .map(str::to_uppercase)
            .unwrap_or_default();
        PaymentIntent {
            id: wire.id,
            provider: PaymentProvider::Stripe,
            amount: wire.amount.or(fallback_amount).unwrap_or_default(),
            currency,
            status: wire
                .status
                .as_deref()
                .map_or(PaymentIntentStatus::Pending, parse_intent_status),
            customer_id: wire.customer.or_else(|| fallback_customer.map(str::to_string)),
            metadata: wire.metadata.or(fallback_metadata),
            created_at: timestamp_to_datetime(wire.created),
            checkout_url: None,
        }
    }

    fn customer_from_wire(wire: StripeCustomer, fallback: Option<&CreateCustomerRequest>) -> Customer {
        Customer {
            id: wire.id,
            email: wire
                .email
                .or_else(|| fallback.map(|req| req.email.clone()))
                .unwrap_or_default(),
            name: wire.name.or_else(|| fallback.and_then(|req| req.name.clone())),
            phone: wire.phone.or_else(|| fallback.and_then(|req| req.phone.clone())),
            created_at: timestamp_to_datetime(wire.created),
        }
    }

    fn subscription_from_wire(
        wire: StripeSubscription,
        fallback: Option<&CreateSubscriptionRequest>,
    ) -> Subscription {
        Subscription {
            id: wire.id,
            customer_id: wire
                .customer
                .or_else(|| fallback.map(|req| req.customer_id.clone()))
                .unwrap_or_default(),
            plan_id: wire
                .price
                .or_else(|| fallback.map(|req| req.plan_id.clone()))
                .unwrap_or_default(),
            status: wire
                .status
                .as_deref()
                .map_or(SubscriptionStatus::Active, parse_subscription_status),
            current_period_end: timestamp_to_datetime(wire.current_period_end),
            created_at: timestamp_to_datetime(wire.created),
        }
    }

    fn invoice_from_wire(wire: StripeInvoice) -> Invoice {
        Invoice {
            id: wire.id,
            customer_id: wire.customer,
            amount: wire.amount_due.unwrap_or_default(),
            currency: wire
                .currency
                .map(|c| c.to_uppercase())
                .unwrap_or_default(),
            status: wire
                .status
                .as_deref()
                .map_or(InvoiceStatus::Open, parse_invoice_status),
            due_date: timestamp_to_datetime(wire.due_date),
            created_at: timestamp_to_datetime(wire.created),
        }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    fn provider(&self) -> PaymentProvider {
        PaymentProvider::Stripe
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
        match self.get::<Value>("/v1/balance").await {
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
        let minor = Self::to_minor(req.amount);
        let body = json!({
            "amount": minor,
            "currency": req.currency.to_lowercase(),
            "customer": req.customer_id,
            "description": req.description,
            "metadata": req.metadata,
        });
        let wire: StripePaymentIntent = self.post("/v1/payment_intents", body).await?;
        Ok(Self::intent_from_wire(
            wire,
            Some(minor),
            Some(&req.currency),
            req.customer_id.as_deref(),
            req.metadata.clone(),
        ))
    }

    async fn confirm_payment(&self, payment_id: &str) -> Result<PaymentIntent> {
        let endpoint = format!(
            "/v1/payment_intents/{}/confirm",
            urlencoding::encode(payment_id)
        );
        let wire: StripePaymentIntent = self.post(&endpoint, json!({})).await?;
        Ok(Self::intent_from_wire(wire, None, None, None, None))
    }

    async fn get_payment_status(&self, payment_id: &str) -> Result<PaymentIntent> {
        let endpoint = format!("/v1/payment_intents/{}", urlencoding::encode(payment_id));
        let wire: StripePaymentIntent = self.get(&endpoint).await?;
        Ok(Self::intent_from_wire(wire, None, None, None, None))
    }

    async fn refund_payment(&self, payment_id: &str, amount: Option<f64>) -> Result<PaymentIntent> {
        ensure_feature(PROVIDER, "refunds", self.config.features.refunds)?;
        let body = json!({
            "payment_intent": payment_id,
            "amount": amount.map(Self::to_minor),
        });
        let wire: StripeRefund = self.post("/v1/refunds", body).await?;
        Ok(PaymentIntent {
            id: wire
                .payment_intent
                .unwrap_or_else(|| payment_id.to_string()),
            provider: PaymentProvider::Stripe,
            amount: wire.amount.unwrap_or_default(),
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
            created_at: None,
            checkout_url: None,
        })
    }

    async fn create_customer(&self, req: &CreateCustomerRequest) -> Result<Customer> {
        let body = json!({
            "email": req.email,
            "name": req.name,
            "phone": req.phone,
        });
        let wire: StripeCustomer = self.post("/v1/customers", body).await?;
        Ok(Self::customer_from_wire(wire, Some(req)))
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        let endpoint = format!("/v1/customers/{}", urlencoding::encode(customer_id));
        let wire: StripeCustomer = self.get(&endpoint).await?;
        Ok(Self::customer_from_wire(wire, None))
    }

    async fn create_subscription(&self, req: &CreateSubscriptionRequest) -> Result<Subscription> {
        ensure_feature(PROVIDER, "subscriptions", self.config.features.subscriptions)?;
        let body = json!({
            "customer": req.customer_id,
            "items": [{ "price": req.plan_id }],
            "trial_period_days": req.trial_days,
        });
        let wire: StripeSubscription = self.post("/v1/subscriptions", body).await?;
        Ok(Self::subscription_from_wire(wire, Some(req)))
    }

    async fn cancel_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        ensure_feature(PROVIDER, "subscriptions", self.config.features.subscriptions)?;
        let endpoint = format!("/v1/subscriptions/{}", urlencoding::encode(subscription_id));
        let wire: StripeSubscription = self.delete(&endpoint).await?;
        Ok(Self::subscription_from_wire(wire, None))
    }

    async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        ensure_feature(PROVIDER, "subscriptions", self.config.features.subscriptions)?;
        let endpoint = format!("/v1/subscriptions/{}", urlencoding::encode(subscription_id));
        let wire: StripeSubscription = self.get(&endpoint).await?;
        Ok(Self::subscription_from_wire(wire, None))
    }

    async fn list_invoices(&self, customer_id: Option<&str>) -> Result<Vec<Invoice>> {
        ensure_feature(PROVIDER, "invoices", self.config.features.invoices)?;
        let endpoint = match customer_id {
            Some(customer) => format!("/v1/invoices?customer={}", urlencoding::encode(customer)),
            None => "/v1/invoices".to_string(),
        };
        let list: StripeList<StripeInvoice> = self.get(&endpoint).await?;
        Ok(list.data.into_iter().map(Self::invoice_from_wire).collect())
    }

    async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        ensure_feature(PROVIDER, "invoices", self.config.features.invoices)?;
        let endpoint = format!("/v1/invoices/{}", urlencoding::encode(invoice_id));
        let wire: StripeInvoice = self.get(&endpoint).await?;
        Ok(Self::invoice_from_wire(wire))
    }

    fn verify_webhook_signature(&self, payload: &[u8], signature: &str) -> Result<bool> {
        let Some(secret) = &self.config.webhook_secret else {
            return Err(ProviderError::MissingWebhookSecret {
                provider: PROVIDER.to_string(),
                mode: self.config.mode,
            });
        };
        let expected = crate::providers::common::hmac_sha256_hex(secret.as_bytes(), payload);
        Ok(expected == signature)
    }

    async fn handle_webhook(&self, payload: &str) -> Result<WebhookEvent> {
        let event: StripeEvent = HttpUtils::parse_json(payload, PROVIDER, self.config.mode)?;
        let kind = match event.event_type.as_str() {
            "payment_intent.succeeded" => WebhookEventKind::PaymentSucceeded,
            "payment_intent.payment_failed" => WebhookEventKind::PaymentFailed,
            "charge.refunded" => WebhookEventKind::RefundCompleted,
            "customer.subscription.created" => WebhookEventKind::SubscriptionCreated,
            "customer.subscription.deleted" => WebhookEventKind::SubscriptionCancelled,
            "invoice.paid" => WebhookEventKind::InvoicePaid,
            "invoice.payment_failed" => WebhookEventKind::InvoicePaymentFailed,
            _ => WebhookEventKind::Other,
        };
        log::debug!(
            "[{PROVIDER}:{}] webhook event {}",
            self.config.mode,
            event.event_type
        );
        Ok(WebhookEvent {
            id: event.id,
            kind,
            data: event.data.unwrap_or(Value::Null),
        })
    }
}
