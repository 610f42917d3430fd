use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::workflows::interview::repository::{RepositoryError, SessionRepository};
use crate::workflows::interview::session::{InterviewSession, SessionId};
use crate::workflows::interview::{interview_router, InterviewService, ProfileExtractor};

pub(super) fn extractor() -> ProfileExtractor {
    ProfileExtractor::new()
}

pub(super) fn build_service() -> (InterviewService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = InterviewService::new(repository.clone());
    (service, repository)
}

pub(super) fn interview_router_with_service(
    service: InterviewService<MemoryRepository>,
) -> axum::Router {
    interview_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) sessions: Arc<Mutex<HashMap<SessionId, InterviewSession>>>,
}

impl SessionRepository for MemoryRepository {
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
        guard.insert(session.session_id().clone(), session);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<InterviewSession>, RepositoryError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl SessionRepository for ConflictRepository {
    fn insert(&self, _session: InterviewSession) -> Result<InterviewSession, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _session: InterviewSession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<InterviewSession>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _session: InterviewSession) -> Result<InterviewSession, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _session: InterviewSession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<InterviewSession>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}
