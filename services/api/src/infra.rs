use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use decision_engine::error::AppError;
use decision_engine::workflows::interview::{
    InterviewSession, RepositoryError, SessionId, SessionRepository,
};
use decision_engine::workflows::portfolio::{CompatibilityEngine, UnitCatalog};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared evaluation context for the portfolio endpoints: the unit catalog,
/// the rule engine, and the UF rate the orchestrator supplies to the core.
#[derive(Clone)]
pub(crate) struct DecisionState {
    pub(crate) catalog: Arc<UnitCatalog>,
    pub(crate) engine: Arc<CompatibilityEngine>,
    pub(crate) uf_rate: f64,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    sessions: Arc<Mutex<HashMap<SessionId, InterviewSession>>>,
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, session: InterviewSession) -> Result<InterviewSession, RepositoryError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        if guard.contains_key(session.session_id()) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(session.session_id().clone(), session.clone());
        Ok(session)
    }

    fn update(&self, session: InterviewSession) -> Result<(), RepositoryError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        if guard.contains_key(session.session_id()) {
            guard.insert(session.session_id().clone(), session);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<InterviewSession>, RepositoryError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Load the unit catalog, preferring an external CSV export when one is
/// provided.
pub(crate) fn load_catalog(csv_path: Option<&Path>) -> Result<UnitCatalog, AppError> {
    match csv_path {
        Some(path) => Ok(UnitCatalog::from_csv_path(path)?),
        None => Ok(UnitCatalog::standard()),
    }
}

/// Document identifier stamped by the orchestrator; the core never generates
/// ids or timestamps itself.
pub(crate) fn document_id_for(generated_on: NaiveDateTime) -> String {
    format!("DOC-{}", generated_on.format("%Y%m%d-%H%M"))
}
