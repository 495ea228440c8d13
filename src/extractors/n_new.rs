//! Extract a validated `n-new` value from the raw request body.

use crate::error::AppError;
use crate::service::parse_n_new;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Number;

/// Validated ingestion value. The content type is not checked; any failure
/// (unreadable body, bad JSON, wrong shape) rejects with an empty 400.
#[derive(Clone, Debug)]
pub struct NNew(pub Number);

#[async_trait]
impl<S> FromRequest<S> for NNew
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("unreadable body: {}", e.body_text())))?;
        match parse_n_new(&body) {
            Ok(n) => Ok(NNew(n)),
            Err(e) => {
                tracing::warn!(error = %e, body = %String::from_utf8_lossy(&body), "rejected n-new payload");
                Err(e)
            }
        }
    }
}
