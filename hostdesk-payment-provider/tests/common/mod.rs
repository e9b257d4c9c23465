//! Shared test helpers for the payment integration suites.

#![allow(dead_code)]

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

/// Assert that an `Option` is `Some` and unwrap it, failing the test
/// otherwise.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("expected Ok(..), got Err({err:?})"),
        }
    }};
    ($expr:expr, $($msg:tt)+) => {{
        match $expr {
            Ok(val) => val,
            Err(err) => panic!("{}: {err:?}", format_args!($($msg)+)),
        }
    }};
}

/// HMAC-SHA256 hex digest, for building expected webhook signatures.
pub fn sign_sha256(secret: &str, payload: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// HMAC-SHA512 hex digest, for building expected webhook signatures.
pub fn sign_sha512(secret: &str, payload: &[u8]) -> String {
    let mut mac =
        Hmac::<Sha512>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}
