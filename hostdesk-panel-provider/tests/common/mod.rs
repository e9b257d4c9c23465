//! Shared test helpers for the panel integration suites.

#![allow(dead_code)]

use hostdesk_panel_provider::{Mode, PanelConfig, PanelType};

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

/// Test-mode config for the given panel type.
pub fn test_config(panel_type: PanelType, id: &str) -> PanelConfig {
    PanelConfig::new(
        id,
        panel_type,
        "https://panel.internal.example:8443",
        "test-api-key",
        Mode::Test,
    )
}
