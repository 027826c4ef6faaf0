// src/models.rs
use serde::{Deserialize, Serialize};

use crate::errors::{EvalError, Result};

pub const FALLBACK_FEEDBACK: &str =
    "Code received but could not be fully evaluated. Manual review may be required.";
pub const FALLBACK_SUGGESTIONS: &str = "Error in automatic evaluation.";

/// One code submission to be judged, together with the problem it answers.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EvaluationRequest {
    pub code: String,
    pub language: String,
    pub problem_description: String,
    pub sample_input: String,
    pub sample_output: String,
    #[serde(default)]
    pub constraints: Option<String>,
}

impl EvaluationRequest {
    /// Rejects submissions with nothing to grade. The evaluator itself never
    /// calls this; it is for request surfaces that want to fail early.
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(EvalError::InvalidRequest("code must not be empty".to_string()));
        }
        if self.language.trim().is_empty() {
            return Err(EvalError::InvalidRequest("language must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    Partial,
}

impl Status {
    /// Maps the judge's free-text status onto the closed set.
    /// Returns `None` for anything outside it so the caller can decide (and log).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "passed" => Some(Status::Passed),
            "failed" => Some(Status::Failed),
            "partial" => Some(Status::Partial),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Passed => write!(f, "passed"),
            Status::Failed => write!(f, "failed"),
            Status::Partial => write!(f, "partial"),
        }
    }
}

/// Rubric sub-scores. They are not summed or reconciled with the total score.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScoreDetails {
    pub correctness: f64,
    pub code_quality: f64,
    pub efficiency: f64,
    pub edge_cases: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EvaluationResult {
    pub score: f64,
    pub status: Status,
    pub feedback: String,
    pub details: ScoreDetails,
    pub suggestions: String,
}

impl EvaluationResult {
    /// The record handed back whenever grading could not complete.
    pub fn fallback() -> Self {
        Self {
            score: 5.0,
            status: Status::Partial,
            feedback: FALLBACK_FEEDBACK.to_string(),
            details: ScoreDetails {
                correctness: 2.0,
                code_quality: 2.0,
                efficiency: 1.0,
                edge_cases: 0.0,
            },
            suggestions: FALLBACK_SUGGESTIONS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> EvaluationRequest {
        EvaluationRequest {
            code: "print(1)".to_string(),
            language: "python".to_string(),
            problem_description: "Print one".to_string(),
            sample_input: String::new(),
            sample_output: "1".to_string(),
            constraints: None,
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::from_label("passed"), Some(Status::Passed));
        assert_eq!(Status::from_label(" FAILED "), Some(Status::Failed));
        assert_eq!(Status::from_label("Partial"), Some(Status::Partial));
        assert_eq!(Status::from_label("accepted"), None);
        assert_eq!(Status::Partial.to_string(), "partial");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let value = serde_json::to_value(Status::Passed).unwrap();
        assert_eq!(value, json!("passed"));
    }

    #[test]
    fn test_request_constraints_default_to_none() {
        let req: EvaluationRequest = serde_json::from_value(json!({
            "code": "x",
            "language": "c",
            "problem_description": "p",
            "sample_input": "i",
            "sample_output": "o"
        }))
        .unwrap();
        assert_eq!(req.constraints, None);
    }

    #[test]
    fn test_validate_rejects_blank_code() {
        let mut req = request();
        assert!(req.validate().is_ok());
        req.code = "   ".to_string();
        assert!(matches!(req.validate(), Err(EvalError::InvalidRequest(_))));
    }

    #[test]
    fn test_fallback_record() {
        let fallback = EvaluationResult::fallback();
        assert_eq!(fallback.score, 5.0);
        assert_eq!(fallback.status, Status::Partial);
        assert_eq!(fallback.details.correctness, 2.0);
        assert_eq!(fallback.details.code_quality, 2.0);
        assert_eq!(fallback.details.efficiency, 1.0);
        assert_eq!(fallback.details.edge_cases, 0.0);
        assert_eq!(fallback.suggestions, "Error in automatic evaluation.");
    }
}
