//! Nearby Router

use crate::domain::repository::StudentRepository;
use crate::infra::memory::InMemoryStudentRepository;
use crate::presentation::handlers::{self, NearbyAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the nearby router backed by the in-memory roster
pub fn nearby_router(repo: InMemoryStudentRepository) -> Router {
    nearby_router_generic(repo)
}

/// Create a generic nearby router for any repository implementation
pub fn nearby_router_generic<R>(repo: R) -> Router
where
    R: StudentRepository + Clone + Send + Sync + 'static,
{
    let state = NearbyAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/nearby", get(handlers::find_nearby::<R>))
        .with_state(state)
}
