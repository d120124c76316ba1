use axum::{extract::rejection::JsonRejection, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::sort::sort_numbers;
use crate::ApiError;

#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub input: Vec<Value>,
    pub output: Vec<Value>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `POST /api/quick_sort` with `{"numbers": [...]}`.
pub async fn quick_sort(payload: Result<Json<Value>, JsonRejection>) -> Result<Json<SortResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected sort request body: {}", rejection.body_text());
        ApiError::BadRequest(r#"Please provide "numbers" field"#.to_string())
    })?;

    let numbers = body
        .get("numbers")
        .ok_or_else(|| ApiError::BadRequest(r#"Please provide "numbers" field"#.to_string()))?
        .as_array()
        .ok_or_else(|| ApiError::BadRequest(r#""numbers" must be a list"#.to_string()))?;

    let output = sort_numbers(numbers).map_err(|e| {
        error!("Sort failed: {}", e);
        ApiError::Internal(e.to_string())
    })?;

    Ok(Json(SortResponse {
        input: numbers.clone(),
        count: output.len(),
        output,
    }))
}

/// `GET /api/health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
