//! Route assembly.

pub mod common;
pub mod n_value;

pub use common::{common_routes, common_routes_with_ready};
pub use n_value::n_value_routes;

use crate::config::ServiceConfig;
use crate::state::AppState;
use crate::store::ValueStore;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: common routes plus the value routes, with request tracing.
/// `body_limit` replaces axum's default cap; bodies over it fail extraction and
/// surface as an empty 400.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(n_value_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                        )
                    }),
                )
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}

/// Build the application from config.
pub fn app_from_config(config: &ServiceConfig) -> Router {
    let state = AppState::new(ValueStore::new(config.data_file.clone()));
    app(state, config.body_limit)
}
