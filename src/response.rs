//! Response helpers shared by handlers that do not go through `AppError`.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<&'static str>,
}

pub fn status_ok(store: Option<&'static str>) -> (StatusCode, Json<StatusBody>) {
    (StatusCode::OK, Json(StatusBody { status: "ok", store }))
}

pub fn status_degraded(store: &'static str) -> (StatusCode, Json<StatusBody>) {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(StatusBody {
            status: "degraded",
            store: Some(store),
        }),
    )
}
