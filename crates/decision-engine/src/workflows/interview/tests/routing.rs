use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::interview::profile::ProfileField;
use crate::workflows::interview::router;
use crate::workflows::interview::InterviewService;

#[tokio::test]
async fn start_handler_creates_a_session() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response = router::start_handler::<MemoryRepository>(State(service)).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("session_id")
        .and_then(serde_json::Value::as_str)
        .is_some());
    assert_eq!(
        payload
            .get("next_question")
            .and_then(serde_json::Value::as_str),
        Some(ProfileField::Goal.question())
    );
}

#[tokio::test]
async fn start_handler_maps_conflicts_to_conflict_status() {
    let service = Arc::new(InterviewService::new(Arc::new(ConflictRepository)));

    let response = router::start_handler::<ConflictRepository>(State(service)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn start_handler_maps_store_outages_to_internal_error() {
    let service = Arc::new(InterviewService::new(Arc::new(UnavailableRepository)));

    let response = router::start_handler::<UnavailableRepository>(State(service)).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn answer_route_folds_text_into_the_profile() {
    let (service, _) = build_service();
    let started = service.start().expect("session starts");
    let router = interview_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post(format!(
                "/api/v1/interview/sessions/{}/answers",
                started.session_id.0
            ))
            .header(axum::http::header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(
                serde_json::to_vec(&json!({ "text": "tengo 45 años" })).unwrap(),
            ))
            .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .pointer("/profile/operating_horizon_years")
            .and_then(serde_json::Value::as_u64),
        Some(20)
    );
    assert_eq!(
        payload.get("answered_fields").and_then(serde_json::Value::as_u64),
        Some(1)
    );
}

#[tokio::test]
async fn status_route_reports_missing_sessions_as_not_found() {
    let (service, _) = build_service();
    let router = interview_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/interview/sessions/itv-999999")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("not found"));
}
