//! cPanel request helpers: envelope unwrapping over the shared dispatcher.

use serde::de::DeserializeOwned;
use serde_json::Value;

use hostdesk_provider_core::{HttpUtils, Method, ProviderError, Result};

use crate::types::OperationAck;

use super::{CpanelAdapter, CpanelEnvelope, PROVIDER};

impl CpanelAdapter {
    /// Unwrap the `{status, data, errors}` envelope, surfacing
    /// envelope-level errors as [`ProviderError::ApiError`].
    ///
    /// The dispatcher's generic mock ack is not envelope-wrapped and passes
    /// through unchanged.
    fn unwrap_envelope(&self, raw: Value) -> Result<Value> {
        if raw.get("status").is_none() {
            return Ok(raw);
        }
        let envelope: CpanelEnvelope = HttpUtils::parse_value(raw, PROVIDER, self.config.mode)?;
        if envelope.status == 1 {
            Ok(envelope.data.unwrap_or(Value::Null))
        } else {
            let message = envelope
                .errors
                .and_then(|errors| errors.into_iter().next())
                .unwrap_or_else(|| "Unknown error".to_string());
            log::error!("[{PROVIDER}:{}] API error: {message}", self.config.mode);
            Err(ProviderError::ApiError {
                provider: PROVIDER.to_string(),
                mode: self.config.mode,
                status: None,
                raw_message: message,
            })
        }
    }

    pub(super) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let raw = self.dispatcher.dispatch(Method::GET, endpoint, None).await?;
        let data = self.unwrap_envelope(raw)?;
        HttpUtils::parse_value(data, PROVIDER, self.config.mode)
    }

    pub(super) async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T> {
        let raw = self
            .dispatcher
            .dispatch(Method::POST, endpoint, Some(&body))
            .await?;
        let data = self.unwrap_envelope(raw)?;
        HttpUtils::parse_value(data, PROVIDER, self.config.mode)
    }

    /// POST for acknowledgement-shaped operations. Envelope errors still
    /// surface; any success payload is accepted as an ack.
    pub(super) async fn post_ack(&self, endpoint: &str, body: Value) -> Result<OperationAck> {
        let raw = self
            .dispatcher
            .dispatch(Method::POST, endpoint, Some(&body))
            .await?;
        let data = self.unwrap_envelope(raw)?;
        Ok(serde_json::from_value(data).unwrap_or_default())
    }
}
