//! Hostinger request helpers over the shared dispatcher.

use serde::de::DeserializeOwned;
use serde_json::Value;

use hostdesk_provider_core::{HttpUtils, Method, Result};

use crate::types::OperationAck;

use super::{HostingerAdapter, PROVIDER};

impl HostingerAdapter {
    pub(super) async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let raw = self.dispatcher.dispatch(Method::GET, endpoint, None).await?;
        HttpUtils::parse_value(raw, PROVIDER, self.config.mode)
    }

    pub(super) async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: Value) -> Result<T> {
        let raw = self
            .dispatcher
            .dispatch(Method::POST, endpoint, Some(&body))
            .await?;
        HttpUtils::parse_value(raw, PROVIDER, self.config.mode)
    }

    pub(super) async fn post_ack(&self, endpoint: &str, body: Option<Value>) -> Result<OperationAck> {
        let raw = self
            .dispatcher
            .dispatch(Method::POST, endpoint, body.as_ref())
            .await?;
        Ok(serde_json::from_value(raw).unwrap_or_default())
    }

    pub(super) async fn put_ack(&self, endpoint: &str, body: Value) -> Result<OperationAck> {
        let raw = self
            .dispatcher
            .dispatch(Method::PUT, endpoint, Some(&body))
            .await?;
        Ok(serde_json::from_value(raw).unwrap_or_default())
    }

    pub(super) async fn delete_ack(&self, endpoint: &str) -> Result<OperationAck> {
        let raw = self
            .dispatcher
            .dispatch(Method::DELETE, endpoint, None)
            .await?;
        Ok(serde_json::from_value(raw).unwrap_or_default())
    }
}
