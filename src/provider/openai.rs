use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Config;
use crate::errors::InjectorError;

/// Chat-completions client sending the whole prompt as one user message.
pub struct OpenAiCompletion {
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

impl std::fmt::Debug for OpenAiCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompletion")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Msg<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiCompletion {
    pub fn new(api_key: String, cfg: &Config) -> Result<Self, InjectorError> {
        if api_key.trim().is_empty() {
            return Err(InjectorError::Config("openai_api_key is required but not provided".into()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| InjectorError::Provider(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            api_key,
            api_url: cfg.api_url.clone(),
            model: cfg.model.clone(),
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
            client,
        })
    }
}

#[async_trait]
impl super::Completion for OpenAiCompletion {
    async fn complete(&self, prompt: &str) -> Result<Option<String>> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![Msg { role: "user", content: prompt }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        tracing::debug!(url = %self.api_url, model = %self.model, prompt_chars = prompt.len(), "sending completion request");

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("OpenAI request failed")?;

        let status = resp.status();
        let text = resp.text().await.context("reading OpenAI response body")?;
        tracing::debug!(%status, bytes = text.len(), "completion response received");

        if !status.is_success() {
            return Err(anyhow!(InjectorError::Provider(format!("OpenAI API error ({status}): {text}"))));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse OpenAI response: {e}\nRaw: {text}"))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty());
        Ok(content)
    }
}
