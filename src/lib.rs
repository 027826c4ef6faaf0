// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod parser;
pub mod prompt;
pub mod providers;
pub mod runner;

pub use models::{EvaluationRequest, EvaluationResult, ScoreDetails, Status};
pub use runner::CodeEvaluator;
