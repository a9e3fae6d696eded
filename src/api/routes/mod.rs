//! API routes module

pub mod events;
pub mod tokens;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Comment-created trigger routes
        .nest("/events", events::router())
        // Device token registration routes
        .nest("/tokens", tokens::router())
}
