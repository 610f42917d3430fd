use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::{RepositoryError, SessionRepository};
use super::service::{InterviewService, InterviewServiceError};
use super::session::SessionId;

/// Router builder exposing HTTP endpoints for the guided interview.
pub fn interview_router<R>(service: Arc<InterviewService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/interview/sessions", post(start_handler::<R>))
        .route(
            "/api/v1/interview/sessions/:session_id",
            get(status_handler::<R>),
        )
        .route(
            "/api/v1/interview/sessions/:session_id/answers",
            post(answer_handler::<R>),
        )
        .with_state(service)
}

/// Free-text answer payload for one interview turn.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub text: String,
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.start() {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.status(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn answer_handler<R>(
    State(service): State<Arc<InterviewService<R>>>,
    Path(session_id): Path<String>,
    axum::Json(payload): axum::Json<AnswerRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let id = SessionId(session_id);
    match service.answer(&id, &payload.text) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: InterviewServiceError) -> Response {
    let status = match &error {
        InterviewServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        InterviewServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        InterviewServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
