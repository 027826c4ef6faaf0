// src/providers/openai.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::OpenAIConfig;
use crate::errors::{EvalError, Result};
use crate::providers::{ChatModel, ChatRequest, Completion, TokenUsage};

/// A provider for interacting with OpenAI chat-completion models.
pub struct OpenAIProvider {
    client: Client,
    config: OpenAIConfig,
}

#[derive(Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
    usage: Option<ApiUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

impl OpenAIProvider {
    /// Creates a new `OpenAIProvider`.
    pub fn new(client: Client, config: OpenAIConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl ChatModel for OpenAIProvider {
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<Completion> {
        let url = format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'));

        log::info!("📡 Calling OpenAI: {} with model: {}", url, request.model);

        let body = OpenAIRequest {
            model: request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: request.system,
                },
                Message {
                    role: "user",
                    content: request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let start = Instant::now();

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 OpenAI response status: {} ({}ms)", status, latency_ms);

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

        let openai_resp: OpenAIResponse = resp.json().await?;

        let usage = openai_resp.usage.map_or_else(TokenUsage::default, |u| TokenUsage {
            input_tokens: Some(u.prompt_tokens),
            output_tokens: Some(u.completion_tokens),
        });

        let text = openai_resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| EvalError::UnexpectedResponse("No choices in response".to_string()))?
            .message
            .content
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(EvalError::EmptyResponse);
        }

        Ok(Completion { text, latency_ms, usage })
    }
}
