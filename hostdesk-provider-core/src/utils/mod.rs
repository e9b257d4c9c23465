//! Utility modules.

/// Identifier generation shared by adapters and their fixtures.
pub mod id;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
