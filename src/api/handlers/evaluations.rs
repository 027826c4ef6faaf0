// src/api/handlers/evaluations.rs
use actix_web::{web, HttpResponse, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::api::AppState;
use crate::models::{EvaluationRequest, EvaluationResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct EvaluationResponse {
    pub id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub result: EvaluationResult,
}

impl EvaluationResponse {
    fn new(result: EvaluationResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            evaluated_at: Utc::now(),
            result,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BatchEvaluationResponse {
    pub batch_id: Uuid,
    pub total: usize,
    pub results: Vec<EvaluationResponse>,
}

/// POST /api/v1/evaluations - grade one submission
pub async fn evaluate_submission(
    state: web::Data<AppState>,
    req: web::Json<EvaluationRequest>,
) -> Result<HttpResponse> {
    let request = req.into_inner();

    if let Err(e) = request.validate() {
        return Ok(HttpResponse::BadRequest().json(json!({ "error": e.to_string() })));
    }

    let result = state.evaluator.evaluate(&request).await;
    Ok(HttpResponse::Ok().json(EvaluationResponse::new(result)))
}

/// POST /api/v1/evaluations/batch - grade submissions in order
pub async fn evaluate_batch(
    state: web::Data<AppState>,
    req: web::Json<Vec<EvaluationRequest>>,
) -> Result<HttpResponse> {
    let requests = req.into_inner();

    for (index, request) in requests.iter().enumerate() {
        if let Err(e) = request.validate() {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": format!("item {}: {}", index, e)
            })));
        }
    }

    let batch_id = Uuid::new_v4();
    log::info!("🎯 Starting batch {} with {} submissions", batch_id, requests.len());

    let results = state.evaluator.evaluate_batch(&requests).await;

    Ok(HttpResponse::Ok().json(BatchEvaluationResponse {
        batch_id,
        total: results.len(),
        results: results.into_iter().map(EvaluationResponse::new).collect(),
    }))
}
