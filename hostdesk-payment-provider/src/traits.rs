use async_trait::async_trait;

use hostdesk_provider_core::{Mode, Result};

use crate::types::{
    CreateCustomerRequest, CreatePaymentIntentRequest, CreateSubscriptionRequest, Customer,
    Invoice, MobileMoneyNetwork, PaymentConfig, PaymentIntent, PaymentProvider, PhoneChargeRequest,
    Subscription, WebhookEvent,
};

/// Payment gateway capability contract.
///
/// Every adapter of the payment family implements this operation set against
/// its processor's wire shapes and returns the normalized objects from
/// [`crate::types`]. Mode-dependent behavior (fixture vs. live call) lives
/// entirely in the adapter's dispatcher, never here. Amounts are accepted in
/// major units and converted at the adapter boundary.
#[async_trait]
pub trait PaymentGateway: Send + Sync + std::fmt::Debug {
    /// Provider identifier, e.g. `"paystack"`.
    fn id(&self) -> &'static str;

    /// The provider of this gateway.
    fn provider(&self) -> PaymentProvider;

    /// The fixed mode of this instance.
    fn mode(&self) -> Mode;

    /// The configuration this gateway was constructed from.
    fn config(&self) -> &PaymentConfig;

    /// Whether a prior [`initialize()`](Self::initialize) succeeded.
    /// Operations do not require this; set at most once per instance.
    fn is_ready(&self) -> bool;

    /// Check the connection and mark the gateway ready on success.
    async fn initialize(&self) -> Result<bool>;

    // ---- payments ----

    async fn create_payment_intent(
        &self,
        req: &CreatePaymentIntentRequest,
    ) -> Result<PaymentIntent>;

    async fn confirm_payment(&self, payment_id: &str) -> Result<PaymentIntent>;

    async fn get_payment_status(&self, payment_id: &str) -> Result<PaymentIntent>;

    /// Refund a payment, fully or (when `amount` is set, in major units)
    /// partially. Returns the intent with a `refunded` status.
    async fn refund_payment(&self, payment_id: &str, amount: Option<f64>) -> Result<PaymentIntent>;

    // ---- customers ----

    async fn create_customer(&self, req: &CreateCustomerRequest) -> Result<Customer>;

    async fn get_customer(&self, customer_id: &str) -> Result<Customer>;

    // ---- subscriptions ----

    async fn create_subscription(&self, req: &CreateSubscriptionRequest) -> Result<Subscription>;

    async fn cancel_subscription(&self, subscription_id: &str) -> Result<Subscription>;

    async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription>;

    // ---- invoices ----

    async fn list_invoices(&self, customer_id: Option<&str>) -> Result<Vec<Invoice>>;

    async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice>;

    // ---- webhooks ----

    /// Verify a webhook signature against the configured secret. Pure
    /// computation; works identically in both modes.
    fn verify_webhook_signature(&self, payload: &[u8], signature: &str) -> Result<bool>;

    /// Parse a raw webhook payload into a normalized event.
    async fn handle_webhook(&self, payload: &str) -> Result<WebhookEvent>;

    // ---- mobile money (optional capability) ----

    /// Mobile-money capability query. The aggregator gateway returns `Some`;
    /// the default is `None`.
    fn mobile_money(&self) -> Option<&dyn MobileMoneyCapable> {
        None
    }
}

/// Optional mobile-money capability.
///
/// The push-to-phone model does not fit the generic intent call cleanly, so
/// the aggregator exposes it separately: discover networks by country, then
/// charge a phone number directly.
#[async_trait]
pub trait MobileMoneyCapable: Send + Sync {
    /// Networks available in the given ISO country code.
    async fn list_networks(&self, country: &str) -> Result<Vec<MobileMoneyNetwork>>;

    /// Start a push-to-phone charge. The returned intent starts `pending`
    /// and resolves when the subscriber approves on-device.
    async fn charge_phone(&self, req: &PhoneChargeRequest) -> Result<PaymentIntent>;
}
