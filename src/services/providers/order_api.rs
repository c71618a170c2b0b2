use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::OrderProvider;
use crate::models::OrderSummary;

pub struct OrderApiClient {
    base_url: String,
    auth_token: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OrderApiClient {
    pub fn new(base_url: String, auth_token: String, timeout: Duration) -> Self {
        Self {
            base_url,
            // Pasted tokens sometimes carry surrounding whitespace
            auth_token: auth_token.trim().to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl OrderProvider for OrderApiClient {
    async fn order_summary(&self, order_id: &str) -> anyhow::Result<OrderSummary> {
        let resp = self
            .client
            .get(format!(
                "{}/orders/pharmacy/orderSummary?orderId={}",
                self.base_url, order_id
            ))
            .header(reqwest::header::ACCEPT, "*/*")
            .bearer_auth(&self.auth_token)
            .timeout(self.timeout)
            .send()
            .await
            .context("failed to call order API")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("order API error ({}): {}", status, body);
        }

        resp.json::<OrderSummary>()
            .await
            .context("failed to decode order summary response")
    }
}
