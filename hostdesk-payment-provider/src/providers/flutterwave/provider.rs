//! Flutterwave `PaymentGateway` trait implementation

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use serde_json::{Value, json};

use hostdesk_provider_core::{HttpUtils, Mode, ProviderError, Result};

use crate::providers::common::{
    ensure_feature, parse_datetime, parse_intent_status, parse_invoice_status,
    parse_refund_status, parse_subscription_status,
};
use crate::traits::PaymentGateway;
use crate::types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, CreateSubscriptionRequest, Customer,
    Invoice, InvoiceStatus, PaymentConfig, PaymentIntent, PaymentIntentStatus, PaymentProvider,
    Subscription, SubscriptionStatus, WebhookEvent, WebhookEventKind,
};

use super::{
    FlwCustomer, FlwEvent, FlwInvoice, FlwSubscription, FlwTransaction, FlutterwaveGateway,
    PROVIDER,
};

impl FlutterwaveGateway {
    fn tx_to_intent(
        wire: FlwTransaction,
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
                .tx_ref
                .or_else(|| fallback_id.map(str::to_string))
                .unwrap_or_default(),
            provider: PaymentProvider::Flutterwave,
            amount: wire.amount.or(fallback_amount).unwrap_or_default(),
            currency,
            status: wire
                .status
                .as_deref()
                .map_or(PaymentIntentStatus::Pending, parse_intent_status),
            customer_id: None,
            metadata: None,
            created_at: parse_datetime(wire.created_at.as_deref()),
            checkout_url: wire.link,
        }
    }

    fn customer_from_wire(wire: FlwCustomer, fallback: Option<&CreateCustomerRequest>) -> Customer {
        Customer {
            id: wire.id.unwrap_or_default(),
            email: wire
                .email
                .or_else(|| fallback.map(|req| req.email.clone()))
                .unwrap_or_default(),
            name: wire.name.or_else(|| fallback.and_then(|req| req.name.clone())),
            phone: wire
                .phone_number
                .or_else(|| fallback.and_then(|req| req.phone.clone())),
            created_at: parse_datetime(wire.created_at.as_deref()),
        }
    }

    fn subscription_from_wire(
        wire: FlwSubscription,
        fallback_id: Option<&str>,
        fallback: Option<&CreateSubscriptionRequest>,
    ) -> Subscription {
        Subscription {
            id: wire
                .id
                .or_else(|| fallback_id.map(str::to_string))
                .unwrap_or_default(),
            customer_id: wire
                .customer
                .or_else(|| fallback.map(|req| req.customer_id.clone()))
                .unwrap_or_default(),
            plan_id: wire
                .plan
                .or_else(|| fallback.map(|req| req.plan_id.clone()))
                .unwrap_or_default(),
            status: wire
                .status
                .as_deref()
                .map_or(SubscriptionStatus::Active, parse_subscription_status),
            current_period_end: parse_datetime(wire.next_due.as_deref()),
            created_at: parse_datetime(wire.created_at.as_deref()),
        }
    }

    fn invoice_from_wire(wire: FlwInvoice) -> Invoice {
        Invoice {
            id: wire.id,
            customer_id: wire.customer,
            amount: wire.amount.unwrap_or_default(),
            currency: wire
                .currency
                .map(|c| c.to_uppercase())
                .unwrap_or_default(),
            status: wire
                .status
                .as_deref()
                .map_or(InvoiceStatus::Open, parse_invoice_status),
            due_date: parse_datetime(wire.due_date.as_deref()),
            created_at: parse_datetime(wire.created_at.as_deref()),
        }
    }
}

#[async_trait]
impl PaymentGateway for FlutterwaveGateway {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    fn provider(&self) -> PaymentProvider {
        PaymentProvider::Flutterwave
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
        match self.get::<Value>("/balances").await {
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
        // Flutterwave takes major units on the wire; no conversion.
        let body = json!({
            "amount": req.amount,
            "currency": req.currency.to_uppercase(),
            "customer": req.customer_id,
            "meta": req.metadata,
            "narration": req.description,
        });
        let wire: FlwTransaction = self.post("/payments", body).await?;
        Ok(Self::tx_to_intent(
            wire,
            None,
            Some(req.amount),
            Some(&req.currency),
        ))
    }

    async fn confirm_payment(&self, payment_id: &str) -> Result<PaymentIntent> {
        let endpoint = format!("/transactions/{}/verify", urlencoding::encode(payment_id));
        let wire: FlwTransaction = self.get(&endpoint).await?;
        Ok(Self::tx_to_intent(wire, Some(payment_id), None, None))
    }

    async fn get_payment_status(&self, payment_id: &str) -> Result<PaymentIntent> {
        let endpoint = format!("/transactions/{}", urlencoding::encode(payment_id));
        let wire: FlwTransaction = self.get(&endpoint).await?;
        Ok(Self::tx_to_intent(wire, Some(payment_id), None, None))
    }

    async fn refund_payment(&self, payment_id: &str, amount: Option<f64>) -> Result<PaymentIntent> {
        ensure_feature(PROVIDER, "refunds", self.config.features.refunds)?;
        let endpoint = format!("/transactions/{}/refund", urlencoding::encode(payment_id));
        let wire: FlwTransaction = self.post(&endpoint, json!({ "amount": amount })).await?;
        Ok(PaymentIntent {
            id: wire.tx_ref.unwrap_or_else(|| payment_id.to_string()),
            provider: PaymentProvider::Flutterwave,
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
            "phone_number": req.phone,
        });
        let wire: FlwCustomer = self.post("/customers", body).await?;
        Ok(Self::customer_from_wire(wire, Some(req)))
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        let endpoint = format!("/customers/{}", urlencoding::encode(customer_id));
        let wire: FlwCustomer = self.get(&endpoint).await?;
        Ok(Self::customer_from_wire(wire, None))
    }

    async fn create_subscription(&self, req: &CreateSubscriptionRequest) -> Result<Subscription> {
        ensure_feature(PROVIDER, "subscriptions", self.config.features.subscriptions)?;
        let body = json!({
            "customer": req.customer_id,
            "plan": req.plan_id,
        });
        let wire: FlwSubscription = self.post("/subscriptions", body).await?;
        Ok(Self::subscription_from_wire(wire, None, Some(req)))
    }

    async fn cancel_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        ensure_feature(PROVIDER, "subscriptions", self.config.features.subscriptions)?;
        let endpoint = format!("/subscriptions/{}/cancel", urlencoding::encode(subscription_id));
        let wire: FlwSubscription = self.put(&endpoint, json!({})).await?;
        Ok(Self::subscription_from_wire(wire, Some(subscription_id), None))
    }

    async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        ensure_feature(PROVIDER, "subscriptions", self.config.features.subscriptions)?;
        let endpoint = format!("/subscriptions/{}", urlencoding::encode(subscription_id));
        let wire: FlwSubscription = self.get(&endpoint).await?;
        Ok(Self::subscription_from_wire(wire, Some(subscription_id), None))
    }

    async fn list_invoices(&self, customer_id: Option<&str>) -> Result<Vec<Invoice>> {
        ensure_feature(PROVIDER, "invoices", self.config.features.invoices)?;
        let endpoint = match customer_id {
            Some(customer) => format!("/invoices?customer={}", urlencoding::encode(customer)),
            None => "/invoices".to_string(),
        };
        let invoices: Vec<FlwInvoice> = self.get(&endpoint).await?;
        Ok(invoices.into_iter().map(Self::invoice_from_wire).collect())
    }

    async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        ensure_feature(PROVIDER, "invoices", self.config.features.invoices)?;
        let endpoint = format!("/invoices/{}", urlencoding::encode(invoice_id));
        let wire: FlwInvoice = self.get(&endpoint).await?;
        Ok(Self::invoice_from_wire(wire))
    }

    fn verify_webhook_signature(&self, _payload: &[u8], signature: &str) -> Result<bool> {
        // Flutterwave sends the configured secret hash verbatim in the
        // verif-hash header; verification is an equality check.
        let Some(secret) = &self.config.webhook_secret else {
            return Err(ProviderError::MissingWebhookSecret {
                provider: PROVIDER.to_string(),
                mode: self.config.mode,
            });
        };
        Ok(secret == signature)
    }

    async fn handle_webhook(&self, payload: &str) -> Result<WebhookEvent> {
        let event: FlwEvent = HttpUtils::parse_json(payload, PROVIDER, self.config.mode)?;
        let kind = match event.event.as_str() {
            "charge.completed" => WebhookEventKind::PaymentSucceeded,
            "charge.failed" => WebhookEventKind::PaymentFailed,
            "refund.completed" => WebhookEventKind::RefundCompleted,
            "subscription.cancelled" => WebhookEventKind::SubscriptionCancelled,
            _ => WebhookEventKind::Other,
        };
        log::debug!(
            "[{PROVIDER}:{}] webhook event {}",
            self.config.mode,
            event.event
        );
        Ok(WebhookEvent {
            id: None,
            kind,
            data: event.data.unwrap_or(Value::Null),
        })
    }
}
