// src/parser.rs
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::errors::{EvalError, Result};

/// Pulls a JSON candidate out of raw model text.
pub type ExtractStrategy = fn(&str) -> Option<&str>;

/// Extraction strategies in the order they are attempted.
pub const STRATEGIES: &[(&str, ExtractStrategy)] = &[
    ("raw", raw),
    ("labeled_fence", labeled_fence),
    ("unlabeled_fence", unlabeled_fence),
];

static LABELED_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)```json(.*?)(?:```|\z)").expect("valid fence regex"));

/// The whole text, as-is.
pub fn raw(text: &str) -> Option<&str> {
    Some(text)
}

/// Content after the first ```` ```json ```` label, up to the next fence
/// (or the end of the text if the fence is never closed).
pub fn labeled_fence(text: &str) -> Option<&str> {
    LABELED_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Content between the first and second ```` ``` ```` markers.
pub fn unlabeled_fence(text: &str) -> Option<&str> {
    text.split("```").nth(1)
}

/// Parses a judge response into JSON, trying each strategy in turn and
/// stopping at the first candidate that parses.
pub fn parse_response(text: &str) -> Result<Value> {
    let text = text.trim();

    for (name, extract) in STRATEGIES {
        let Some(candidate) = extract(text) else {
            continue;
        };
        match serde_json::from_str::<Value>(candidate.trim()) {
            Ok(value) => {
                log::debug!("Parsed judge response with '{}' strategy", name);
                return Ok(value);
            }
            Err(e) => log::debug!("Strategy '{}' did not yield JSON: {}", name, e),
        }
    }

    Err(EvalError::MalformedResponse(preview(text)))
}

fn preview(text: &str) -> String {
    const LIMIT: usize = 200;
    if text.chars().count() <= LIMIT {
        text.to_string()
    } else {
        let head: String = text.chars().take(LIMIT).collect();
        format!("{}...", head)
    }
}
