use super::session::{InterviewSession, SessionId};

/// Storage abstraction so the interview service can be exercised in isolation.
/// Implementations hand out clones; sessions are never shared mutably.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, session: InterviewSession) -> Result<InterviewSession, RepositoryError>;
    fn update(&self, session: InterviewSession) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<InterviewSession>, RepositoryError>;
}

/// Error enumeration for session store failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
