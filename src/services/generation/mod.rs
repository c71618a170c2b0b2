pub mod gemini;

use async_trait::async_trait;

#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}
