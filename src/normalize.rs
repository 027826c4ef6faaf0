// src/normalize.rs
use serde_json::{Map, Value};

use crate::errors::{EvalError, Result};
use crate::models::{EvaluationResult, ScoreDetails, Status};

pub const MAX_SCORE: f64 = 10.0;
pub const MAX_CORRECTNESS: f64 = 4.0;
pub const MAX_CODE_QUALITY: f64 = 3.0;
pub const MAX_EFFICIENCY: f64 = 2.0;
pub const MAX_EDGE_CASES: f64 = 1.0;

pub const DEFAULT_FEEDBACK: &str = "Code evaluated.";

/// Turns a parsed judge response into an `EvaluationResult`.
///
/// Missing fields fall back to defaults. The only hard failures are a
/// response that is not a JSON object and a `score` that is present but
/// cannot be read as a number; both send the caller to the fallback record.
pub fn normalize(value: &Value) -> Result<EvaluationResult> {
    let obj = value.as_object().ok_or_else(|| {
        EvalError::UnexpectedResponse(format!("expected a JSON object, got: {}", value))
    })?;

    let score = match obj.get("score") {
        None => 0.0,
        Some(raw) => {
            as_number(raw).ok_or_else(|| EvalError::InvalidScore(raw.to_string()))?
        }
    };

    Ok(EvaluationResult {
        score: score.clamp(0.0, MAX_SCORE),
        status: status_field(obj),
        feedback: obj
            .get("feedback")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_FEEDBACK)
            .to_string(),
        details: ScoreDetails {
            correctness: sub_score(obj, "correctness", MAX_CORRECTNESS),
            code_quality: sub_score(obj, "code_quality", MAX_CODE_QUALITY),
            efficiency: sub_score(obj, "efficiency", MAX_EFFICIENCY),
            edge_cases: sub_score(obj, "edge_cases", MAX_EDGE_CASES),
        },
        suggestions: suggestions_field(obj),
    })
}

/// Numbers and numeric strings are read as f64. Overflowing values become
/// infinite and are clamped by the caller; only NaN is rejected.
fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        // Read from the source token so literals beyond f64 range still parse.
        Value::Number(n) => n.to_string().parse::<f64>().ok(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    (!n.is_nan()).then_some(n)
}

fn sub_score(obj: &Map<String, Value>, key: &str, max: f64) -> f64 {
    obj.get(key)
        .and_then(as_number)
        .unwrap_or(0.0)
        .clamp(0.0, max)
}

fn status_field(obj: &Map<String, Value>) -> Status {
    match obj.get("status") {
        None | Some(Value::Null) => Status::Failed,
        Some(Value::String(label)) => Status::from_label(label).unwrap_or_else(|| {
            log::warn!("Judge returned unrecognized status '{}', treating as partial", label);
            Status::Partial
        }),
        Some(other) => {
            log::warn!("Judge returned non-string status {}, treating as partial", other);
            Status::Partial
        }
    }
}

fn suggestions_field(obj: &Map<String, Value>) -> String {
    match obj.get("suggestions") {
        Some(Value::String(s)) => s.clone(),
        // Some models answer with a bullet list instead of a sentence.
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_response() {
        let result = normalize(&json!({
            "score": 8.5,
            "status": "passed",
            "correctness": 4,
            "code_quality": 2.5,
            "efficiency": 1.5,
            "edge_cases": 0.5,
            "feedback": "Solid solution.",
            "suggestions": "Add input validation."
        }))
        .unwrap();

        assert_eq!(result.score, 8.5);
        assert_eq!(result.status, Status::Passed);
        assert_eq!(result.feedback, "Solid solution.");
        assert_eq!(result.suggestions, "Add input validation.");
        assert_eq!(
            result.details,
            ScoreDetails {
                correctness: 4.0,
                code_quality: 2.5,
                efficiency: 1.5,
                edge_cases: 0.5
            }
        );
    }

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(normalize(&json!({"score": 15})).unwrap().score, 10.0);
        assert_eq!(normalize(&json!({"score": -3})).unwrap().score, 0.0);
    }

    #[test]
    fn test_numeric_string_score_is_coerced() {
        assert_eq!(normalize(&json!({"score": " 7.25 "})).unwrap().score, 7.25);
    }

    #[test]
    fn test_unreadable_score_is_an_error() {
        assert!(matches!(
            normalize(&json!({"score": "great"})),
            Err(EvalError::InvalidScore(_))
        ));
        assert!(matches!(
            normalize(&json!({"score": null})),
            Err(EvalError::InvalidScore(_))
        ));
    }

    #[test]
    fn test_overflowing_score_is_clamped() {
        assert_eq!(normalize(&json!({"score": "1e400"})).unwrap().score, MAX_SCORE);
        assert_eq!(normalize(&json!({"score": "-1e400"})).unwrap().score, 0.0);

        let parsed: Value = serde_json::from_str(r#"{"score": 1e400}"#).unwrap();
        assert_eq!(normalize(&parsed).unwrap().score, MAX_SCORE);
    }

    #[test]
    fn test_nan_score_is_an_error() {
        assert!(matches!(
            normalize(&json!({"score": "NaN"})),
            Err(EvalError::InvalidScore(_))
        ));
    }

    #[test]
    fn test_null_status_counts_as_missing() {
        assert_eq!(normalize(&json!({"status": null})).unwrap().status, Status::Failed);
    }

    #[test]
    fn test_non_object_is_an_error() {
        assert!(matches!(
            normalize(&json!([1, 2, 3])),
            Err(EvalError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let result = normalize(&json!({})).unwrap();

        assert_eq!(result.score, 0.0);
        assert_eq!(result.status, Status::Failed);
        assert_eq!(result.feedback, DEFAULT_FEEDBACK);
        assert_eq!(result.suggestions, "");
        assert_eq!(result.details.correctness, 0.0);
        assert_eq!(result.details.edge_cases, 0.0);
    }

    #[test]
    fn test_blank_feedback_is_defaulted() {
        let result = normalize(&json!({"score": 4, "feedback": "  "})).unwrap();
        assert_eq!(result.feedback, DEFAULT_FEEDBACK);
    }

    #[test]
    fn test_unknown_status_maps_to_partial() {
        assert_eq!(
            normalize(&json!({"status": "accepted"})).unwrap().status,
            Status::Partial
        );
        assert_eq!(normalize(&json!({"status": 1})).unwrap().status, Status::Partial);
    }

    #[test]
    fn test_sub_scores_are_clamped_to_their_maxima() {
        let result = normalize(&json!({
            "correctness": 9,
            "code_quality": -1,
            "efficiency": "5",
            "edge_cases": "n/a"
        }))
        .unwrap();

        assert_eq!(result.details.correctness, MAX_CORRECTNESS);
        assert_eq!(result.details.code_quality, 0.0);
        assert_eq!(result.details.efficiency, MAX_EFFICIENCY);
        assert_eq!(result.details.edge_cases, 0.0);
    }

    #[test]
    fn test_suggestion_list_is_joined() {
        let result = normalize(&json!({"suggestions": ["Use a set", "Add tests"]})).unwrap();
        assert_eq!(result.suggestions, "Use a set\nAdd tests");
    }
}
