use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::LoyaltyProvider;
use crate::models::{CustomerProfileEnvelope, TransactionHistoryEnvelope};

pub struct LoyaltyApiClient {
    base_url: String,
    api_key: String,
    access_token: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl LoyaltyApiClient {
    pub fn new(
        base_url: String,
        api_key: String,
        access_token: String,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url,
            api_key: api_key.trim().to_string(),
            access_token: access_token.trim().to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        what: &'static str,
    ) -> anyhow::Result<T> {
        let resp = self
            .client
            .get(&url)
            .header("X-API-Key", &self.api_key)
            .header("X-Access-Token", &self.access_token)
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("failed to call loyalty API ({what})"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("loyalty API error ({}) fetching {}: {}", status, what, body);
        }

        resp.json::<T>()
            .await
            .with_context(|| format!("failed to decode loyalty {what} response"))
    }
}

#[async_trait]
impl LoyaltyProvider for LoyaltyApiClient {
    async fn customer_profile(&self, mobile: &str) -> anyhow::Result<CustomerProfileEnvelope> {
        self.get_json(
            format!("{}/customers/{}", self.base_url, mobile),
            "customer profile",
        )
        .await
    }

    async fn transaction_history(
        &self,
        mobile: &str,
    ) -> anyhow::Result<TransactionHistoryEnvelope> {
        self.get_json(
            format!("{}/customers/{}/transactions", self.base_url, mobile),
            "transaction history",
        )
        .await
    }
}
