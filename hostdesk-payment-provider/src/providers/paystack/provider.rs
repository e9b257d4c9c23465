//! Paystack `PaymentGateway` trait implementation

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use serde_json::{Value, json};

use hostdesk_provider_core::{HttpUtils, Mode, Result};

use crate::providers::common::{
    ensure_feature, hmac_sha512_hex, parse_datetime, parse_intent_status, parse_invoice_status,
    parse_refund_status, parse_subscription_status,
};
use crate::traits::PaymentGateway;
use crate::types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, CreateSubscriptionRequest, Customer,
    Invoice, InvoiceStatus, PaymentConfig, PaymentIntent, PaymentIntentStatus, PaymentProvider,
    Subscription, SubscriptionStatus, WebhookEvent, WebhookEventKind,
};

use super::{
    PROVIDER, PaystackCustomer, PaystackEvent, PaystackGateway, PaystackInvoice, PaystackRefund,
    PaystackSubscription, PaystackTransaction,
};

/// Paystack operates in the smallest currency unit (kobo, pesewa, cents).
const MINOR_UNITS_PER_MAJOR: f64 = 100.0;

impl PaystackGateway {
    fn to_minor(amount: f64) -> f64 {
        (amount * MINOR_UNITS_PER_MAJOR).round()
    }

    fn tx_to_intent(
        wire: PaystackTransaction,
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
                .reference
                .or_else(|| fallback_id.map(str::to_string))
                .unwrap_or_default(),
            provider: PaymentProvider::Paystack,
            amount: wire.amount.or(fallback_amount).unwrap_or_default(),
            currency,
            status: wire
                .status
                .as_deref()
                .map_or(PaymentIntentStatus::Pending, parse_intent_status),
            customer_id: None,
            metadata: None,
            created_at: parse_datetime(wire.created_at.as_deref()),
            checkout_url: wire.authorization_url,
        }
    }

    fn customer_from_wire(
        wire: PaystackCustomer,
        fallback: Option<&CreateCustomerRequest>,
    ) -> Customer {
        let name = match (wire.first_name, wire.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first),
            (None, Some(last)) => Some(last),
            (None, None) => fallback.and_then(|req| req.name.clone()),
        };
        Customer {
            id: wire.customer_code,
            email: wire
                .email
                .or_else(|| fallback.map(|req| req.email.clone()))
                .unwrap_or_default(),
            name,
            phone: wire.phone.or_else(|| fallback.and_then(|req| req.phone.clone())),
            created_at: parse_datetime(wire.created_at.as_deref()),
        }
    }

    fn subscription_from_wire(
        wire: PaystackSubscription,
        fallback_id: Option<&str>,
        fallback: Option<&CreateSubscriptionRequest>,
    ) -> Subscription {
        Subscription {
            id: wire
                .subscription_code
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
            current_period_end: parse_datetime(wire.next_payment_date.as_deref()),
            created_at: parse_datetime(wire.created_at.as_deref()),
        }
    }

    fn invoice_from_wire(wire: PaystackInvoice) -> Invoice {
        Invoice {
            id: wire.request_code,
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
impl PaymentGateway for PaystackGateway {
    fn id(&self) -> &'static str {
        PROVIDER
    }

    fn provider(&self) -> PaymentProvider {
        PaymentProvider::Paystack
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
        match self.get::<Value>("/transaction/totals").await {
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
            "currency": req.currency.to_uppercase(),
            "email": req.customer_id,
            "metadata": req.metadata,
        });
        let wire: PaystackTransaction = self.post("/transaction/initialize", body).await?;
        Ok(Self::tx_to_intent(
            wire,
            None,
            Some(minor),
            Some(&req.currency),
        ))
    }

    async fn confirm_payment(&self, payment_id: &str) -> Result<PaymentIntent> {
        let endpoint = format!("/transaction/verify/{}", urlencoding::encode(payment_id));
        let wire: PaystackTransaction = self.get(&endpoint).await?;
        Ok(Self::tx_to_intent(wire, Some(payment_id), None, None))
    }

    async fn get_payment_status(&self, payment_id: &str) -> Result<PaymentIntent> {
        let endpoint = format!("/transaction/{}", urlencoding::encode(payment_id));
        let wire: PaystackTransaction = self.get(&endpoint).await?;
        Ok(Self::tx_to_intent(wire, Some(payment_id), None, None))
    }

    async fn refund_payment(&self, payment_id: &str, amount: Option<f64>) -> Result<PaymentIntent> {
        ensure_feature(PROVIDER, "refunds", self.config.features.refunds)?;
        let body = json!({
            "transaction": payment_id,
            "amount": amount.map(Self::to_minor),
        });
        let wire: PaystackRefund = self.post("/refund", body).await?;
        Ok(PaymentIntent {
            id: wire
                .transaction
                .unwrap_or_else(|| payment_id.to_string()),
            provider: PaymentProvider::Paystack,
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
            "first_name": req.name,
            "phone": req.phone,
        });
        let wire: PaystackCustomer = self.post("/customer", body).await?;
        Ok(Self::customer_from_wire(wire, Some(req)))
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        let endpoint = format!("/customer/{}", urlencoding::encode(customer_id));
        let wire: PaystackCustomer = self.get(&endpoint).await?;
        Ok(Self::customer_from_wire(wire, None))
    }

    async fn create_subscription(&self, req: &CreateSubscriptionRequest) -> Result<Subscription> {
        ensure_feature(PROVIDER, "subscriptions", self.config.features.subscriptions)?;
        let body = json!({
            "customer": req.customer_id,
            "plan": req.plan_id,
        });
        let wire: PaystackSubscription = self.post("/subscription", body).await?;
        Ok(Self::subscription_from_wire(wire, None, Some(req)))
    }

    async fn cancel_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        ensure_feature(PROVIDER, "subscriptions", self.config.features.subscriptions)?;
        let body = json!({ "code": subscription_id });
        let wire: PaystackSubscription = self.post("/subscription/disable", body).await?;
        Ok(Self::subscription_from_wire(wire, Some(subscription_id), None))
    }

    async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        ensure_feature(PROVIDER, "subscriptions", self.config.features.subscriptions)?;
        let endpoint = format!("/subscription/{}", urlencoding::encode(subscription_id));
        let wire: PaystackSubscription = self.get(&endpoint).await?;
        Ok(Self::subscription_from_wire(wire, Some(subscription_id), None))
    }

    async fn list_invoices(&self, customer_id: Option<&str>) -> Result<Vec<Invoice>> {
        ensure_feature(PROVIDER, "invoices", self.config.features.invoices)?;
        let endpoint = match customer_id {
            Some(customer) => format!("/paymentrequest?customer={}", urlencoding::encode(customer)),
            None => "/paymentrequest".to_string(),
        };
        let invoices: Vec<PaystackInvoice> = self.get(&endpoint).await?;
        Ok(invoices.into_iter().map(Self::invoice_from_wire).collect())
    }

    async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice> {
        ensure_feature(PROVIDER, "invoices", self.config.features.invoices)?;
        let endpoint = format!("/paymentrequest/{}", urlencoding::encode(invoice_id));
        let wire: PaystackInvoice = self.get(&endpoint).await?;
        Ok(Self::invoice_from_wire(wire))
    }

    fn verify_webhook_signature(&self, payload: &[u8], signature: &str) -> Result<bool> {
        // Paystack signs with the account secret key when no dedicated
        // webhook secret is configured.
        let secret = self
            .config
            .webhook_secret
            .as_deref()
            .unwrap_or(&self.config.secret_key);
        Ok(hmac_sha512_hex(secret.as_bytes(), payload) == signature)
    }

    async fn handle_webhook(&self, payload: &str) -> Result<WebhookEvent> {
        let event: PaystackEvent = HttpUtils::parse_json(payload, PROVIDER, self.config.mode)?;
        let kind = match event.event.as_str() {
            "charge.success" => WebhookEventKind::PaymentSucceeded,
            "charge.failed" => WebhookEventKind::PaymentFailed,
            "refund.processed" => WebhookEventKind::RefundCompleted,
            "subscription.create" => WebhookEventKind::SubscriptionCreated,
            "subscription.disable" => WebhookEventKind::SubscriptionCancelled,
            "paymentrequest.success" => WebhookEventKind::InvoicePaid,
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
