use anyhow::Result;
use async_trait::async_trait;

pub mod openai;

/// One request against the text-completion gateway.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    /// Omitted from the wire when empty.
    pub system: String,
    pub user: String,
    pub temperature: f32,
}

#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete(&self, req: &CompletionRequest, debug: bool) -> Result<String>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(api_key: String, timeout_secs: u64) -> DynProvider {
    Box::new(openai::OpenAiProvider::new(api_key, timeout_secs))
}
