use std::sync::Arc;
use crate::store::Store;

/// Shared application state injected into all route handlers via axum::extract::State.
/// The store does its own locking, so handlers only need a cheap Arc clone.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self { store: Arc::new(store) }
    }
}
