//! HTTP Handlers

use crate::application::find_nearby::FindNearbyStudentsUseCase;
use crate::domain::repository::StudentRepository;
use crate::error::NearbyResult;
use crate::presentation::dto::{NearbyQuery, StudentResponse};
use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use std::sync::Arc;

/// Shared state for nearby handlers
#[derive(Clone)]
pub struct NearbyAppState<R>
where
    R: StudentRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /nearby?location=<string>
pub async fn find_nearby<R>(
    State(state): State<NearbyAppState<R>>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> NearbyResult<Json<Vec<StudentResponse>>>
where
    R: StudentRepository + Clone + Send + Sync + 'static,
{
    let Query(query) = query?;

    let use_case = FindNearbyStudentsUseCase::new(state.repo.clone());

    let students = use_case.execute(query.location).await?;

    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}
