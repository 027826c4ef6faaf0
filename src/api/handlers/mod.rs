// src/api/handlers/mod.rs
mod health;
mod evaluations;

pub use health::health_check;
pub use evaluations::{evaluate_submission, evaluate_batch, BatchEvaluationResponse, EvaluationResponse};
