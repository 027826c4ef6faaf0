// src/providers/anthropic.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::AnthropicConfig;
use crate::errors::{EvalError, Result};
use crate::providers::{ChatModel, ChatRequest, Completion, TokenUsage};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// A provider for interacting with Anthropic Claude models.
pub struct AnthropicProvider {
    client: Client,
    config: AnthropicConfig,
}

#[derive(Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    system: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    usage: Option<ApiUsage>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiUsage {
    input_tokens: u32,
    output_tokens: u32,
}

impl AnthropicProvider {
    /// Creates a new `AnthropicProvider`.
    pub fn new(client: Client, config: AnthropicConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ChatModel for AnthropicProvider {
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<Completion> {
        let url = format!("{}/v1/messages", self.config.api_base.trim_end_matches('/'));

        log::info!("📡 Calling Anthropic: {} with model: {}", url, request.model);

        let body = AnthropicRequest {
            model: request.model,
            system: request.system,
            messages: vec![Message {
                role: "user",
                content: request.prompt,
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Anthropic response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(EvalError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let anthropic_resp: AnthropicResponse = resp.json().await?;

        let usage = anthropic_resp.usage.map_or_else(TokenUsage::default, |u| TokenUsage {
            input_tokens: Some(u.input_tokens),
            output_tokens: Some(u.output_tokens),
        });

        let text = anthropic_resp
            .content
            .into_iter()
            .find(|block| block.content_type == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| EvalError::UnexpectedResponse("No text content in response".to_string()))?;

        if text.trim().is_empty() {
            return Err(EvalError::EmptyResponse);
        }

        Ok(Completion { text, latency_ms, usage })
    }
}
