use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use super::{CompletionRequest, Provider};
use crate::errors::FarmError;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat-completions adapter. One blocking request per call, no retries;
/// the caller decides what to do with thin or empty output.
pub struct OpenAiProvider {
    api_key: String,
    client: Client,
    timeout_secs: u64,
}

impl OpenAiProvider {
    pub fn new(api_key: String, timeout_secs: u64) -> Self {
        Self {
            api_key,
            client: Client::new(),
            timeout_secs,
        }
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn complete(&self, req: &CompletionRequest, debug: bool) -> Result<String> {
        let mut messages = Vec::new();
        if !req.system.is_empty() {
            messages.push(json!({ "role": "system", "content": req.system }));
        }
        messages.push(json!({ "role": "user", "content": req.user }));

        let body = json!({
            "model": req.model,
            "messages": messages,
            "temperature": req.temperature,
        });

        if debug {
            eprintln!(
                "debug[openai]: HTTP POST /v1/chat/completions body:\n{}",
                serde_json::to_string_pretty(&body)?
            );
        }

        let resp = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if debug {
            eprintln!("debug[openai]: raw status: {}", status);
            eprintln!("debug[openai]: raw response:\n{}", &text);
        }

        if !status.is_success() {
            return Err(FarmError::Provider(format!("OpenAI API error ({}): {}", status, text)).into());
        }

        // Minimal structs to parse the chat response
        #[derive(Deserialize)]
        struct ChatMessage {
            content: String,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: ChatMessage,
        }
        #[derive(Deserialize)]
        struct ChatResponse {
            choices: Vec<Choice>,
        }

        let parsed: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            FarmError::Provider(format!("failed to parse OpenAI response: {e}\nRaw: {text}"))
        })?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default())
    }
}
