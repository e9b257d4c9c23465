//! Payment gateway implementations

/// Shared helpers used by gateway implementations.
pub(crate) mod common;

#[cfg(feature = "flutterwave")]
mod flutterwave;
#[cfg(feature = "mobile-money")]
mod mobile_money;
#[cfg(feature = "paystack")]
mod paystack;
#[cfg(feature = "stripe")]
mod stripe;

#[cfg(feature = "flutterwave")]
pub use flutterwave::FlutterwaveGateway;
#[cfg(feature = "mobile-money")]
pub use mobile_money::MobileMoneyGateway;
#[cfg(feature = "paystack")]
pub use paystack::PaystackGateway;
#[cfg(feature = "stripe")]
pub use stripe::StripeGateway;
