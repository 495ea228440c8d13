//! Value routes: POST /n-new and GET /n-query.

use crate::handlers::{get_n_query, post_n_new};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn n_value_routes(state: AppState) -> Router {
    Router::new()
        .route("/n-new", post(post_n_new))
        .route("/n-query", get(get_n_query))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ValueStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        AppState::new(ValueStore::new(dir.path().join("values.txt")))
    }

    #[tokio::test]
    async fn post_then_query_returns_square() {
        let dir = tempfile::TempDir::new().unwrap();
        let state = test_state(&dir);

        let resp = n_value_routes(state.clone())
            .oneshot(
                Request::post("/n-new")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"n-new": 12}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = n_value_routes(state)
            .oneshot(Request::get("/n-query").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "result-value": 144 }));
    }

    #[tokio::test]
    async fn missing_content_type_is_accepted() {
        let dir = tempfile::TempDir::new().unwrap();
        let resp = n_value_routes(test_state(&dir))
            .oneshot(Request::post("/n-new").body(Body::from(r#"{"n-new": 2}"#)).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_method_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let resp = n_value_routes(test_state(&dir))
            .oneshot(Request::get("/n-new").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
