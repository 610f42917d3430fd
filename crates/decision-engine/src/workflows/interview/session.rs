use serde::{Deserialize, Serialize};

use super::extractor::ProfileExtractor;
use super::profile::{InvestorProfile, ProfileField};

/// Identifier wrapper for interview sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// One question/answer turn kept for the interview transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewExchange {
    pub question: Option<String>,
    pub answer: String,
}

/// One interview's running state: the profile under construction plus the
/// transcript of turns that built it. Owned by exactly one caller at a time;
/// the core itself holds no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    session_id: SessionId,
    profile: InvestorProfile,
    transcript: Vec<InterviewExchange>,
}

impl InterviewSession {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            profile: InvestorProfile::new(),
            transcript: Vec::new(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn profile(&self) -> &InvestorProfile {
        &self.profile
    }

    pub fn transcript(&self) -> &[InterviewExchange] {
        &self.transcript
    }

    pub fn is_complete(&self) -> bool {
        self.profile.is_complete()
    }

    pub fn answered_fields(&self) -> usize {
        self.profile.answered_count()
    }

    pub const fn total_fields() -> usize {
        ProfileField::ordered().len()
    }

    pub fn next_question(&self, extractor: &ProfileExtractor) -> Option<&'static str> {
        extractor.next_question(&self.profile)
    }

    /// Record one answer: the pending question and the raw text go into the
    /// transcript, and the extractor folds the answer into the profile.
    pub fn submit_answer(&mut self, extractor: &ProfileExtractor, answer: &str) {
        let question = extractor
            .next_question(&self.profile)
            .map(str::to_string);
        extractor.extract(answer, &mut self.profile);
        self.transcript.push(InterviewExchange {
            question,
            answer: answer.to_string(),
        });
    }
}
