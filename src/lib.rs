//! nquery: store a number over HTTP, query its square. Values live in an append-only text file.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError};
pub use routes::{app, app_from_config, common_routes, common_routes_with_ready, n_value_routes};
pub use service::{parse_n_new, parse_stored, square, N_NEW_KEY};
pub use state::AppState;
pub use store::ValueStore;
