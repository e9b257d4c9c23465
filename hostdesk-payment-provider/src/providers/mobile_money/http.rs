//! Aggregator request helpers over the shared dispatcher.

use serde::de::DeserializeOwned;
use serde_json::Value;

use hostdesk_provider_core::{HttpUtils, Method, Result};

use super::{MobileMoneyGateway, PROVIDER};

impl MobileMoneyGateway {
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
}
