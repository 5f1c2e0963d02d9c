use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound port for the generative-language provider.
///
/// The assistant only ever sends a prompt string and expects raw text back.
/// Keeping the port this narrow lets tests inject a double that fails or
/// returns canned text without any network access.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
