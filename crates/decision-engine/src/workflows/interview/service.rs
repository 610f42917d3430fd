use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use super::extractor::ProfileExtractor;
use super::profile::InvestorProfile;
use super::repository::{RepositoryError, SessionRepository};
use super::session::{InterviewSession, SessionId};

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("itv-{id:06}"))
}

/// Service composing the extractor and a session store into the guided
/// interview the orchestrator drives one turn at a time.
pub struct InterviewService<R> {
    repository: Arc<R>,
    extractor: ProfileExtractor,
}

impl<R> InterviewService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            extractor: ProfileExtractor::new(),
        }
    }

    /// Open a fresh session and return its first question.
    pub fn start(&self) -> Result<SessionView, InterviewServiceError> {
        let session = InterviewSession::new(next_session_id());
        let stored = self.repository.insert(session)?;
        Ok(self.view(&stored))
    }

    /// Fold one answer into the session's profile and persist the result.
    pub fn answer(
        &self,
        session_id: &SessionId,
        text: &str,
    ) -> Result<SessionView, InterviewServiceError> {
        let mut session = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;

        session.submit_answer(&self.extractor, text);
        let view = self.view(&session);
        self.repository.update(session)?;

        Ok(view)
    }

    /// Fetch the full session for downstream evaluation or rendering.
    pub fn get(&self, session_id: &SessionId) -> Result<InterviewSession, InterviewServiceError> {
        let session = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(session)
    }

    /// Session progress snapshot for API responses.
    pub fn status(&self, session_id: &SessionId) -> Result<SessionView, InterviewServiceError> {
        let session = self.get(session_id)?;
        Ok(self.view(&session))
    }

    fn view(&self, session: &InterviewSession) -> SessionView {
        SessionView {
            session_id: session.session_id().clone(),
            profile: session.profile().clone(),
            answered_fields: session.answered_fields(),
            total_fields: InterviewSession::total_fields(),
            complete: session.is_complete(),
            next_question: session.next_question(&self.extractor),
        }
    }
}

/// Progress snapshot the router serializes back to the orchestrating UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub profile: InvestorProfile,
    pub answered_fields: usize,
    pub total_fields: usize,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<&'static str>,
}

/// Error raised by the interview service.
#[derive(Debug, thiserror::Error)]
pub enum InterviewServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
