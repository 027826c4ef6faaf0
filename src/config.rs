// src/config.rs
use serde::Deserialize;
use std::path::Path;

use crate::errors::{EvalError, Result};

pub const DEFAULT_JUDGE_MODEL: &str = "openai:gpt-4o";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_base: String,
    pub api_key: String,
}

/// Configuration for the Anthropic provider.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_base: String,
    pub api_key: String,
}

/// How the judge model is called.
/// `model` is `provider:model_name`, e.g. `openai:gpt-4o` or
/// `anthropic:claude-sonnet-4`. Without a prefix the provider is `openai`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct JudgeSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Transport timeout; when unset the HTTP client default applies.
    pub timeout_secs: Option<u64>,
}

impl Default for JudgeSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_JUDGE_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: None,
        }
    }
}

/// Optional TOML file named by `JUDGE_CONFIG`.
#[derive(Deserialize, Debug, Default)]
struct FileConfig {
    bind_addr: Option<String>,
    #[serde(default)]
    judge: Option<JudgeSettings>,
}

/// High-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai: Option<OpenAIConfig>,
    pub anthropic: Option<AnthropicConfig>,
    pub judge: JudgeSettings,
    pub bind_addr: String,
}

impl AppConfig {
    /// Load configuration from environment variables, layered over the
    /// TOML file named by `JUDGE_CONFIG` when that is set.
    pub fn from_env() -> Result<Self> {
        let file = match std::env::var("JUDGE_CONFIG") {
            Ok(path) => Some(std::fs::read_to_string(Path::new(&path))?),
            Err(_) => None,
        };
        Self::from_lookup(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds the configuration from an optional TOML document and a
    /// variable lookup. Variables win over the file.
    pub fn from_lookup<F>(toml_source: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: FileConfig = match toml_source {
            Some(source) => toml::from_str(source)?,
            None => FileConfig::default(),
        };

        let mut judge = file.judge.unwrap_or_default();
        if let Some(model) = lookup("JUDGE_MODEL") {
            judge.model = model.trim().to_string();
        }
        if let Some(raw) = lookup("JUDGE_TEMPERATURE") {
            judge.temperature = parse_var("JUDGE_TEMPERATURE", &raw)?;
        }
        if let Some(raw) = lookup("JUDGE_MAX_TOKENS") {
            judge.max_tokens = parse_var("JUDGE_MAX_TOKENS", &raw)?;
        }
        if let Some(raw) = lookup("JUDGE_TIMEOUT_SECS") {
            judge.timeout_secs = Some(parse_var("JUDGE_TIMEOUT_SECS", &raw)?);
        }

        let openai = lookup("OPENAI_API_KEY").map(|api_key| OpenAIConfig {
            api_base: lookup("OPENAI_API_BASE")
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            api_key,
        });

        let anthropic = lookup("ANTHROPIC_API_KEY").map(|api_key| AnthropicConfig {
            api_base: lookup("ANTHROPIC_API_BASE")
                .unwrap_or_else(|| "https://api.anthropic.com".to_string()),
            api_key,
        });

        if openai.is_none() && anthropic.is_none() {
            return Err(EvalError::Config(
                "No LLM providers configured. Please set either OPENAI_API_KEY or ANTHROPIC_API_KEY."
                    .to_string(),
            ));
        }

        let bind_addr = lookup("BIND_ADDR")
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(AppConfig { openai, anthropic, judge, bind_addr })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| EvalError::Config(format!("{} has an invalid value: '{}'", key, raw)))
}
