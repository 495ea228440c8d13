//! Shared application state for all routes.

use crate::store::ValueStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ValueStore>,
}

impl AppState {
    pub fn new(store: ValueStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
