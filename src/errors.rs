// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API request failed with status {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Unexpected response structure: {0}")]
    UnexpectedResponse(String),

    #[error("Received empty text response from model")]
    EmptyResponse,

    #[error("Model response is not valid JSON under any extraction strategy: {0}")]
    MalformedResponse(String),

    #[error("Score field could not be read as a number: {0}")]
    InvalidScore(String),

    #[error("Invalid evaluation request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider '{0}' not found")]
    ProviderNotFound(String),
}

pub type Result<T> = std::result::Result<T, EvalError>;
