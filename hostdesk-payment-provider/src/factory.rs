//! Payment gateway factory/registry and per-provider defaults.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use hostdesk_provider_core::{Mode, ProviderError, Result};

use crate::traits::PaymentGateway;
use crate::types::{GatewayFeatures, LiveKeys, PaymentConfig, PaymentProvider};

#[cfg(feature = "flutterwave")]
use crate::providers::FlutterwaveGateway;
#[cfg(feature = "mobile-money")]
use crate::providers::MobileMoneyGateway;
#[cfg(feature = "paystack")]
use crate::providers::PaystackGateway;
#[cfg(feature = "stripe")]
use crate::providers::StripeGateway;

type GatewayMap = HashMap<String, Arc<dyn PaymentGateway>>;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Canonical test configuration for a provider: sandbox keys, webhook test
/// secret, supported currencies/countries and feature flags.
///
/// This is the single place feature defaults are defined; adapters read
/// them from their config and never hardcode availability.
#[must_use]
pub fn test_defaults(provider: PaymentProvider) -> PaymentConfig {
    match provider {
        #[cfg(feature = "stripe")]
        PaymentProvider::Stripe => PaymentConfig {
            provider,
            public_key: "pk_test_51HdSkHostdeskSandbox".to_string(),
            secret_key: "sk_test_51HdSkHostdeskSandbox".to_string(),
            webhook_secret: Some("whsec_test_hostdesk_stripe".to_string()),
            mode: Mode::Test,
            supported_currencies: strings(&["USD", "EUR", "GBP", "CAD", "AUD"]),
            supported_countries: strings(&["US", "GB", "DE", "FR", "CA", "AU"]),
            features: GatewayFeatures {
                subscriptions: true,
                invoices: true,
                refunds: true,
                disputes: true,
                payouts: true,
                mobile_money: false,
                bank_transfer: true,
                cards: true,
                ussd: false,
            },
            request_timeout_secs: None,
        },
        #[cfg(feature = "paystack")]
        PaymentProvider::Paystack => PaymentConfig {
            provider,
            public_key: "pk_test_hostdeskpaystacksandbox".to_string(),
            secret_key: "sk_test_hostdeskpaystacksandbox".to_string(),
            // Paystack signs webhooks with the secret key itself
            webhook_secret: None,
            mode: Mode::Test,
            supported_currencies: strings(&["NGN", "GHS", "ZAR", "KES", "USD"]),
            supported_countries: strings(&["NG", "GH", "ZA", "KE"]),
            features: GatewayFeatures {
                subscriptions: true,
                invoices: true,
                refunds: true,
                disputes: true,
                payouts: false,
                mobile_money: true,
                bank_transfer: true,
                cards: true,
                ussd: true,
            },
            request_timeout_secs: None,
        },
        #[cfg(feature = "flutterwave")]
        PaymentProvider::Flutterwave => PaymentConfig {
            provider,
            public_key: "FLWPUBK_TEST-hostdesk-sandbox-X".to_string(),
            secret_key: "FLWSECK_TEST-hostdesk-sandbox-X".to_string(),
            webhook_secret: Some("flw-verif-hash-hostdesk-test".to_string()),
            mode: Mode::Test,
            supported_currencies: strings(&["NGN", "KES", "GHS", "UGX", "TZS", "ZAR", "USD"]),
            supported_countries: strings(&["NG", "KE", "GH", "UG", "TZ", "ZA"]),
            features: GatewayFeatures {
                subscriptions: true,
                invoices: true,
                refunds: true,
                disputes: false,
                payouts: true,
                mobile_money: true,
                bank_transfer: true,
                cards: true,
                ussd: true,
            },
            request_timeout_secs: None,
        },
        #[cfg(feature = "mobile-money")]
        PaymentProvider::MobileMoney => PaymentConfig {
            provider,
            public_key: "mm_pk_test_hostdesk".to_string(),
            secret_key: "mm_sk_test_hostdesk".to_string(),
            webhook_secret: Some("mm_whsec_test_hostdesk".to_string()),
            mode: Mode::Test,
            supported_currencies: strings(&["GHS", "KES", "UGX", "TZS", "XAF", "XOF"]),
            supported_countries: strings(&["GH", "KE", "UG", "TZ", "CM", "SN"]),
            features: GatewayFeatures {
                subscriptions: false,
                invoices: false,
                refunds: true,
                disputes: false,
                payouts: true,
                mobile_money: true,
                bank_transfer: false,
                cards: false,
                ussd: true,
            },
            request_timeout_secs: None,
        },
    }
}

/// Constructs, caches and retrieves payment gateways by identity.
///
/// One `(provider, mode)` pair maps to at most one cached gateway; the key
/// is `"{provider}-{mode}"`, so test and live instances of the same provider
/// coexist. The registry is an explicitly owned object (one per application
/// or per test), and its cache is guarded so that two callers racing to
/// construct the same identity observe the same instance.
///
/// Gateways live until explicitly removed; there is no TTL.
pub struct PaymentGatewayFactory {
    gateways: Mutex<GatewayMap>,
}

impl Default for PaymentGatewayFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentGatewayFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {
            gateways: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GatewayMap> {
        self.gateways.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn build_gateway(config: PaymentConfig) -> Result<Arc<dyn PaymentGateway>> {
        Ok(match config.provider {
            #[cfg(feature = "stripe")]
            PaymentProvider::Stripe => Arc::new(StripeGateway::new(config)),
            #[cfg(feature = "paystack")]
            PaymentProvider::Paystack => Arc::new(PaystackGateway::new(config)),
            #[cfg(feature = "flutterwave")]
            PaymentProvider::Flutterwave => Arc::new(FlutterwaveGateway::new(config)),
            #[cfg(feature = "mobile-money")]
            PaymentProvider::MobileMoney => Arc::new(MobileMoneyGateway::new(config)),
            #[allow(unreachable_patterns)]
            _ => {
                return Err(ProviderError::UnsupportedProvider {
                    kind: config.provider.to_string(),
                });
            }
        })
    }

    /// Return the cached gateway for this `(provider, mode)`, constructing
    /// it on miss.
    pub fn create_gateway(&self, config: PaymentConfig) -> Result<Arc<dyn PaymentGateway>> {
        let key = config.cache_key();
        let mut gateways = self.lock();
        if let Some(existing) = gateways.get(&key) {
            return Ok(existing.clone());
        }
        let gateway = Self::build_gateway(config)?;
        log::info!("[{key}] payment gateway created");
        gateways.insert(key, gateway.clone());
        Ok(gateway)
    }

    /// Build and cache a gateway from the canonical test defaults for
    /// `provider`. The usual way to seed a provider before switching it
    /// to live mode.
    pub fn create_test_gateway(&self, provider: PaymentProvider) -> Result<Arc<dyn PaymentGateway>> {
        self.create_gateway(test_defaults(provider))
    }

    /// Exact-key lookup.
    #[must_use]
    pub fn get_gateway(
        &self,
        provider: PaymentProvider,
        mode: Mode,
    ) -> Option<Arc<dyn PaymentGateway>> {
        self.lock().get(&format!("{provider}-{mode}")).cloned()
    }

    /// Evict the cached gateway for `(provider, mode)`. Returns whether one
    /// was removed.
    pub fn remove_gateway(&self, provider: PaymentProvider, mode: Mode) -> bool {
        let key = format!("{provider}-{mode}");
        let removed = self.lock().remove(&key).is_some();
        if removed {
            log::info!("[{key}] payment gateway removed");
        }
        removed
    }

    /// Snapshot of the cache, keyed by `"{provider}-{mode}"`.
    ///
    /// The returned map is a defensive copy; mutating it does not affect the
    /// registry.
    #[must_use]
    pub fn get_all_gateways(&self) -> GatewayMap {
        self.lock().clone()
    }

    /// Build, register and initialize a gateway for `new_mode`, deriving
    /// currencies/countries/features from the existing opposite-mode entry.
    ///
    /// Fails with [`ProviderError::MissingLiveKeys`] when switching to live
    /// without keys, and with [`ProviderError::NoPriorConfiguration`] when
    /// the provider was never configured in the opposite mode (seed it with
    /// [`create_test_gateway()`](Self::create_test_gateway) first). The
    /// opposite-mode instance is left untouched; both modes coexist under
    /// their own cache keys.
    pub async fn switch_mode(
        &self,
        provider: PaymentProvider,
        new_mode: Mode,
        live_keys: Option<LiveKeys>,
    ) -> Result<Arc<dyn PaymentGateway>> {
        if new_mode == Mode::Live && live_keys.is_none() {
            return Err(ProviderError::MissingLiveKeys {
                provider: provider.to_string(),
            });
        }

        let prior_key = format!("{provider}-{}", new_mode.opposite());
        let prior = {
            let gateways = self.lock();
            gateways.get(&prior_key).map(|g| g.config().clone())
        };
        let Some(prior) = prior else {
            return Err(ProviderError::NoPriorConfiguration {
                provider: provider.to_string(),
                mode: new_mode.opposite(),
            });
        };

        let (public_key, secret_key, webhook_secret) = match (new_mode, live_keys) {
            (Mode::Live, Some(keys)) => (keys.public_key, keys.secret_key, keys.webhook_secret),
            // switching back to test restores the canonical sandbox keys
            _ => {
                let defaults = test_defaults(provider);
                (
                    defaults.public_key,
                    defaults.secret_key,
                    defaults.webhook_secret,
                )
            }
        };

        let config = PaymentConfig {
            provider,
            public_key,
            secret_key,
            webhook_secret,
            mode: new_mode,
            supported_currencies: prior.supported_currencies,
            supported_countries: prior.supported_countries,
            features: prior.features,
            request_timeout_secs: prior.request_timeout_secs,
        };

        let key = config.cache_key();
        let gateway = Self::build_gateway(config)?;
        self.lock().insert(key.clone(), gateway.clone());
        log::info!("[{key}] payment gateway registered via mode switch");

        gateway.initialize().await?;
        Ok(gateway)
    }
}
