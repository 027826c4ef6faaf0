// src/runner.rs
use futures::StreamExt;
use std::sync::Arc;
use std::time::Instant;

use crate::config::JudgeSettings;
use crate::errors::Result;
use crate::models::{EvaluationRequest, EvaluationResult};
use crate::normalize::normalize;
use crate::parser::parse_response;
use crate::prompt::{build_prompt, SYSTEM_INSTRUCTION};
use crate::providers::{parse_model_string, ChatModel, ChatRequest};

/// Grades code submissions by asking a chat model to review them.
///
/// Submitted code is never executed. Every call returns a well-formed
/// `EvaluationResult`; failures are logged and replaced by
/// [`EvaluationResult::fallback`].
pub struct CodeEvaluator {
    model: Arc<dyn ChatModel>,
    model_name: String,
    settings: JudgeSettings,
}

impl CodeEvaluator {
    pub fn new(model: Arc<dyn ChatModel>, settings: JudgeSettings) -> Self {
        let (_, model_name) = parse_model_string(&settings.model);
        Self {
            model,
            model_name,
            settings,
        }
    }

    pub fn settings(&self) -> &JudgeSettings {
        &self.settings
    }

    /// Runs one grading round trip and surfaces any failure.
    pub async fn try_evaluate(&self, request: &EvaluationRequest) -> Result<EvaluationResult> {
        let prompt = build_prompt(request);

        let completion = self
            .model
            .complete(&ChatRequest {
                model: &self.model_name,
                system: SYSTEM_INSTRUCTION,
                prompt: &prompt,
                temperature: self.settings.temperature,
                max_tokens: self.settings.max_tokens,
            })
            .await?;

        log::debug!(
            "Judge replied in {}ms using {:?} input / {:?} output tokens",
            completion.latency_ms,
            completion.usage.input_tokens,
            completion.usage.output_tokens
        );

        let parsed = parse_response(&completion.text)?;
        normalize(&parsed)
    }

    /// Grades one submission. Never fails: on any error the fallback record is returned.
    pub async fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResult {
        match self.try_evaluate(request).await {
            Ok(result) => {
                log::info!(
                    "✅ Evaluated {} submission: score {:.1} ({})",
                    request.language,
                    result.score,
                    result.status
                );
                result
            }
            Err(e) => {
                log::error!("❌ AI evaluation failed, returning fallback: {}", e);
                EvaluationResult::fallback()
            }
        }
    }

    /// Grades submissions one after another, preserving input order.
    pub async fn evaluate_batch(&self, requests: &[EvaluationRequest]) -> Vec<EvaluationResult> {
        let batch_start = Instant::now();

        let results: Vec<EvaluationResult> = futures::stream::iter(requests)
            .then(|request| self.evaluate(request))
            .collect()
            .await;

        log::info!(
            "📊 Batch of {} evaluated sequentially in {}ms",
            results.len(),
            batch_start.elapsed().as_millis()
        );

        results
    }
}
