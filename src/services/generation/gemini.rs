use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::GenerationProvider;

pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, base_url: String, model: String, timeout: Duration) -> Self {
        Self {
            api_key,
            base_url,
            model,
            timeout,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let body = json!({
            "contents": [{
                "parts": [{
                    "text": prompt,
                }]
            }]
        });

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .context("failed to call Gemini API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Gemini response")?;

        if !status.is_success() {
            anyhow::bail!("Gemini API error ({}): {}", status, data);
        }

        // An empty candidate list in a 2xx response is an error, never an
        // empty success.
        data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing candidates in Gemini response"))
    }
}
