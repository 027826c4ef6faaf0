// src/api/state.rs
use crate::runner::CodeEvaluator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<CodeEvaluator>,
}

impl AppState {
    pub fn new(evaluator: CodeEvaluator) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
        }
    }
}
