//! POST /n-new stores a number; GET /n-query returns the square of the latest one.

use crate::error::AppError;
use crate::extractors::NNew;
use crate::service::{parse_stored, square};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Number;

#[derive(Debug, Serialize)]
pub struct QueryResult {
    #[serde(rename = "result-value")]
    pub result_value: Number,
}

/// POST /n-new — append the value; 200 with no body.
pub async fn post_n_new(
    State(state): State<AppState>,
    NNew(value): NNew,
) -> Result<StatusCode, AppError> {
    state.store.append(&value).await?;
    tracing::info!(value = %value, "stored n-new value");
    Ok(StatusCode::OK)
}

/// GET /n-query — square of the last stored value, or of 0 when nothing is stored yet.
pub async fn get_n_query(State(state): State<AppState>) -> Result<Json<QueryResult>, AppError> {
    let value = match state.store.last().await? {
        Some(raw) => parse_stored(&raw)?,
        None => Number::from(0),
    };
    let result_value = square(&value)?;
    Ok(Json(QueryResult { result_value }))
}
