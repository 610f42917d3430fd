use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use decision_engine::workflows::interview::{
    interview_router, InterviewService, InterviewServiceError, RepositoryError, SessionId,
    SessionRepository,
};
use decision_engine::workflows::portfolio::{
    DecisionDocument, Evaluation, Unit, UnitId,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::infra::{document_id_for, AppState, DecisionState};

/// State handed to the portfolio endpoints: the interview service to read
/// session profiles from, plus the shared evaluation context.
pub(crate) struct PortfolioState<R> {
    pub(crate) interview: Arc<InterviewService<R>>,
    pub(crate) decision: DecisionState,
}

impl<R> Clone for PortfolioState<R> {
    fn clone(&self) -> Self {
        Self {
            interview: self.interview.clone(),
            decision: self.decision.clone(),
        }
    }
}

pub(crate) fn with_decision_routes<R>(
    interview: Arc<InterviewService<R>>,
    decision: DecisionState,
) -> Router
where
    R: SessionRepository + 'static,
{
    let portfolio_state = PortfolioState {
        interview: interview.clone(),
        decision,
    };

    interview_router(interview)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .merge(
            Router::new()
                .route("/api/v1/portfolio/units", get(list_units_endpoint::<R>))
                .route(
                    "/api/v1/portfolio/units/:unit_id/evaluation",
                    post(evaluate_unit_endpoint::<R>),
                )
                .route(
                    "/api/v1/portfolio/units/:unit_id/document",
                    post(decision_document_endpoint::<R>),
                )
                .with_state(portfolio_state),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UnitsQuery {
    pub(crate) commune: Option<String>,
    pub(crate) typology: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct UnitListingView {
    #[serde(flatten)]
    pub(crate) unit: Unit,
    pub(crate) strategy_label: &'static str,
    pub(crate) price_clp: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct PortfolioResponse {
    pub(crate) units: Vec<UnitListingView>,
    pub(crate) communes: Vec<String>,
    pub(crate) typologies: Vec<String>,
}

pub(crate) async fn list_units_endpoint<R>(
    State(state): State<PortfolioState<R>>,
    Query(query): Query<UnitsQuery>,
) -> Json<PortfolioResponse>
where
    R: SessionRepository + 'static,
{
    let catalog = &state.decision.catalog;
    let units = catalog
        .filtered(query.commune.as_deref(), query.typology.as_deref())
        .into_iter()
        .map(|unit| UnitListingView {
            unit: unit.clone(),
            strategy_label: unit.strategy.label(),
            price_clp: unit.price_clp(state.decision.uf_rate),
        })
        .collect();

    Json(PortfolioResponse {
        units,
        communes: catalog.communes().into_iter().map(str::to_string).collect(),
        typologies: catalog
            .typologies()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationRequest {
    pub(crate) session_id: String,
    pub(crate) uf_rate: Option<f64>,
}

pub(crate) async fn evaluate_unit_endpoint<R>(
    State(state): State<PortfolioState<R>>,
    Path(unit_id): Path<String>,
    Json(payload): Json<EvaluationRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match resolve_evaluation(&state, &unit_id, &payload.session_id, payload.uf_rate) {
        Ok((_, evaluation)) => (StatusCode::OK, Json(evaluation)).into_response(),
        Err(response) => response,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DocumentFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DocumentRequest {
    pub(crate) session_id: String,
    pub(crate) document_id: Option<String>,
    pub(crate) uf_rate: Option<f64>,
    #[serde(default)]
    pub(crate) format: DocumentFormat,
}

pub(crate) async fn decision_document_endpoint<R>(
    State(state): State<PortfolioState<R>>,
    Path(unit_id): Path<String>,
    Json(payload): Json<DocumentRequest>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let (profile, evaluation) =
        match resolve_evaluation(&state, &unit_id, &payload.session_id, payload.uf_rate) {
            Ok(resolved) => resolved,
            Err(response) => return response,
        };

    let generated_on = Local::now().naive_local();
    let document_id = payload
        .document_id
        .unwrap_or_else(|| document_id_for(generated_on));
    let document = DecisionDocument::new(document_id, generated_on, profile, evaluation);

    match payload.format {
        DocumentFormat::Json => (StatusCode::OK, Json(document)).into_response(),
        DocumentFormat::Text => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            document.render_text(),
        )
            .into_response(),
    }
}

fn resolve_evaluation<R>(
    state: &PortfolioState<R>,
    unit_id: &str,
    session_id: &str,
    uf_rate: Option<f64>,
) -> Result<
    (
        decision_engine::workflows::interview::InvestorProfile,
        Evaluation,
    ),
    Response,
>
where
    R: SessionRepository + 'static,
{
    let Some(unit) = state
        .decision
        .catalog
        .find(&UnitId(unit_id.to_string()))
    else {
        let payload = json!({ "error": format!("unit {unit_id} not found") });
        return Err((StatusCode::NOT_FOUND, Json(payload)).into_response());
    };

    let view = match state.interview.status(&SessionId(session_id.to_string())) {
        Ok(view) => view,
        Err(InterviewServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "session not found" });
            return Err((StatusCode::NOT_FOUND, Json(payload)).into_response());
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            return Err((StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response());
        }
    };

    if !view.complete {
        let payload = json!({
            "error": "profile incomplete, keep answering the interview",
            "next_question": view.next_question,
        });
        return Err((StatusCode::CONFLICT, Json(payload)).into_response());
    }

    let rate = uf_rate.unwrap_or(state.decision.uf_rate);
    match state.decision.engine.evaluate(unit, &view.profile, rate) {
        Ok(evaluation) => Ok((view.profile, evaluation)),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            Err((StatusCode::BAD_REQUEST, Json(payload)).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemorySessionRepository;
    use decision_engine::workflows::portfolio::{
        CompatibilityEngine, EvaluationConfig, UnitCatalog, Viability,
    };

    fn decision_state() -> DecisionState {
        DecisionState {
            catalog: Arc::new(UnitCatalog::standard()),
            engine: Arc::new(CompatibilityEngine::new(EvaluationConfig::default())),
            uf_rate: 36_500.0,
        }
    }

    fn portfolio_state() -> PortfolioState<InMemorySessionRepository> {
        PortfolioState {
            interview: Arc::new(InterviewService::new(Arc::new(
                InMemorySessionRepository::default(),
            ))),
            decision: decision_state(),
        }
    }

    fn completed_session(state: &PortfolioState<InMemorySessionRepository>) -> SessionId {
        let started = state.interview.start().expect("session starts");
        for answer in [
            "pienso en mi jubilación",
            "no quiero deuda larga",
            "tengo 45 años",
            "sostuve 150 mil mensual",
        ] {
            state
                .interview
                .answer(&started.session_id, answer)
                .expect("answer recorded");
        }
        started.session_id
    }

    async fn read_json_body(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn unit_listing_supports_commune_filters() {
        let state = portfolio_state();

        let Json(body) = list_units_endpoint(
            State(state.clone()),
            Query(UnitsQuery {
                commune: Some("Santiago".to_string()),
                typology: None,
            }),
        )
        .await;
        assert_eq!(body.units.len(), 2);
        assert_eq!(body.communes, vec!["La Florida", "Santiago"]);

        let Json(body) =
            list_units_endpoint(State(state), Query(UnitsQuery::default())).await;
        assert_eq!(body.units.len(), 3);
        assert_eq!(body.units[0].price_clp, body.units[0].unit.price_uf * 36_500.0);
    }

    #[tokio::test]
    async fn evaluation_endpoint_scores_a_completed_session() {
        let state = portfolio_state();
        let session_id = completed_session(&state);

        let response = evaluate_unit_endpoint(
            State(state),
            Path("MAT-001".to_string()),
            Json(EvaluationRequest {
                session_id: session_id.0,
                uf_rate: None,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(
            payload.get("state"),
            Some(&serde_json::to_value(Viability::NotViable).unwrap())
        );
        assert_eq!(
            payload
                .get("tensions")
                .and_then(serde_json::Value::as_array)
                .map(Vec::len),
            Some(1)
        );
    }

    #[tokio::test]
    async fn evaluation_endpoint_rejects_incomplete_sessions() {
        let state = portfolio_state();
        let started = state.interview.start().expect("session starts");

        let response = evaluate_unit_endpoint(
            State(state),
            Path("MAT-001".to_string()),
            Json(EvaluationRequest {
                session_id: started.session_id.0,
                uf_rate: None,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let payload = read_json_body(response).await;
        assert!(payload
            .get("next_question")
            .and_then(serde_json::Value::as_str)
            .is_some());
    }

    #[tokio::test]
    async fn evaluation_endpoint_maps_unknown_units_to_not_found() {
        let state = portfolio_state();
        let session_id = completed_session(&state);

        let response = evaluate_unit_endpoint(
            State(state),
            Path("XXX-999".to_string()),
            Json(EvaluationRequest {
                session_id: session_id.0,
                uf_rate: None,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn evaluation_endpoint_rejects_non_positive_rates() {
        let state = portfolio_state();
        let session_id = completed_session(&state);

        let response = evaluate_unit_endpoint(
            State(state),
            Path("MAT-001".to_string()),
            Json(EvaluationRequest {
                session_id: session_id.0,
                uf_rate: Some(0.0),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn document_endpoint_renders_plain_text_when_asked() {
        let state = portfolio_state();
        let session_id = completed_session(&state);

        let response = decision_document_endpoint(
            State(state),
            Path("POR-001".to_string()),
            Json(DocumentRequest {
                session_id: session_id.0,
                document_id: Some("DOC-TEST-0001".to_string()),
                uf_rate: None,
                format: DocumentFormat::Text,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        let text = String::from_utf8(body.to_vec()).expect("utf8 body");
        assert!(text.starts_with("DOCUMENTO DE DECISIÓN PATRIMONIAL"));
        assert!(text.contains("ID: DOC-TEST-0001"));
        assert!(text.contains("Edificio Portugal"));
    }

    #[tokio::test]
    async fn document_endpoint_defaults_to_a_json_snapshot() {
        let state = portfolio_state();
        let session_id = completed_session(&state);

        let response = decision_document_endpoint(
            State(state),
            Path("FLD-001".to_string()),
            Json(DocumentRequest {
                session_id: session_id.0,
                document_id: None,
                uf_rate: None,
                format: DocumentFormat::Json,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert!(payload
            .get("document_id")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .starts_with("DOC-"));
        assert_eq!(
            payload.pointer("/evaluation/state"),
            Some(&serde_json::to_value(Viability::Viable).unwrap())
        );
    }
}
