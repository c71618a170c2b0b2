use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::services::compose;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CalculateRequest {
    pub expression: Option<String>,
}

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: Option<String>,
}

// POST /calculate
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CalculateRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let expression = req
        .expression
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No expression provided".to_string()))?;

    if !state.config.has_gemini_key() {
        return Err(AppError::Config("API key not configured".to_string()));
    }

    tracing::info!(expression = %expression, "calculating expression");

    let prompt = compose::calculation_prompt(&expression);
    let result = state.generation.generate(&prompt).await.map_err(|e| {
        tracing::error!(error = %e, "failed to calculate expression");
        AppError::Generation("Failed to calculate expression".to_string())
    })?;

    Ok(Json(serde_json::json!({ "result": result })))
}

// POST /text
pub async fn process_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let text = req
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No text provided".to_string()))?;

    if !state.config.has_gemini_key() {
        return Err(AppError::Config("API key not configured".to_string()));
    }

    let result = state.generation.generate(&text).await.map_err(|e| {
        tracing::error!(error = %e, "failed to process text");
        AppError::Generation("Failed to process text".to_string())
    })?;

    Ok(Json(serde_json::json!({ "result": result })))
}
