// src/providers/mod.rs

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{EvalError, Result};

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAIProvider;

/// Provider used when the judge model string carries no `provider:` prefix.
pub const DEFAULT_PROVIDER: &str = "openai";

/// One chat-completion call: a system instruction plus a single user prompt.
#[derive(Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub system: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenUsage {
    pub input_tokens: Option<u32>,
    pub output_tokens: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub latency_ms: u64,
    pub usage: TokenUsage,
}

/// A hosted chat model the evaluator can send grading prompts to.
///
/// Implemented by the HTTP providers in this module; tests substitute
/// in-memory fakes through the same trait.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: &ChatRequest<'_>) -> Result<Completion>;
}

/// Parses a model string like "provider:model_name" and returns the provider and model.
/// Defaults to "openai" if no provider is specified.
pub fn parse_model_string(model_str: &str) -> (String, String) {
    match model_str.split_once(':') {
        Some((provider, model)) => (provider.to_string(), model.to_string()),
        None => (DEFAULT_PROVIDER.to_string(), model_str.to_string()),
    }
}

/// Builds the provider named by the configured judge model.
pub fn from_config(config: &AppConfig, client: Client) -> Result<Arc<dyn ChatModel>> {
    let (provider_name, _) = parse_model_string(&config.judge.model);

    match provider_name.as_str() {
        "openai" => {
            let openai_config = config
                .openai
                .as_ref()
                .ok_or_else(|| EvalError::ProviderNotFound("openai".to_string()))?;
            Ok(Arc::new(OpenAIProvider::new(client, openai_config.clone())))
        }
        "anthropic" => {
            let anthropic_config = config
                .anthropic
                .as_ref()
                .ok_or_else(|| EvalError::ProviderNotFound("anthropic".to_string()))?;
            Ok(Arc::new(AnthropicProvider::new(client, anthropic_config.clone())))
        }
        _ => Err(EvalError::ProviderNotFound(provider_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{JudgeSettings, OpenAIConfig};

    fn config(model: &str) -> AppConfig {
        AppConfig {
            openai: Some(OpenAIConfig {
                api_base: "http://localhost".to_string(),
                api_key: "k".to_string(),
            }),
            anthropic: None,
            judge: JudgeSettings {
                model: model.to_string(),
                ..JudgeSettings::default()
            },
            bind_addr: "127.0.0.1:0".to_string(),
        }
    }

    #[test]
    fn test_parse_model_string() {
        assert_eq!(
            parse_model_string("anthropic:claude-sonnet-4"),
            ("anthropic".to_string(), "claude-sonnet-4".to_string())
        );
        assert_eq!(
            parse_model_string("gpt-4o"),
            ("openai".to_string(), "gpt-4o".to_string())
        );
    }

    #[test]
    fn test_from_config_selects_configured_provider() {
        assert!(from_config(&config("openai:gpt-4o"), Client::new()).is_ok());
        assert!(from_config(&config("gpt-4o"), Client::new()).is_ok());
    }

    #[test]
    fn test_from_config_rejects_unconfigured_provider() {
        let err = from_config(&config("anthropic:claude-sonnet-4"), Client::new()).err();
        assert!(matches!(err, Some(EvalError::ProviderNotFound(p)) if p == "anthropic"));

        let err = from_config(&config("gemini:flash"), Client::new()).err();
        assert!(matches!(err, Some(EvalError::ProviderNotFound(p)) if p == "gemini"));
    }
}
