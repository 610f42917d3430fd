use super::profile::{DominantGoal, EmotionalTension, InvestorProfile, ProfileField};
use super::triggers::{age_pattern, friction_pattern, GOAL_TRIGGERS, TENSION_TRIGGERS};

const GOAL_CONFIDENCE: f32 = 0.85;
const TENSION_CONFIDENCE: f32 = 0.8;
const HORIZON_CONFIDENCE: f32 = 0.9;
const FRICTION_CONFIDENCE: f32 = 0.9;

/// Retirement age the operating horizon is derived against.
const RETIREMENT_AGE: u32 = 65;

/// Incremental extractor turning one free-text answer into profile updates.
///
/// Each call resolves at most one value per still-unset field and never
/// rewrites a field that an earlier turn already resolved. A trigger miss is
/// not an error: the field stays unset and the interview re-asks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileExtractor;

impl ProfileExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Apply one utterance to the running profile.
    pub fn extract(&self, utterance: &str, profile: &mut InvestorProfile) {
        let message = utterance.to_lowercase();

        if profile.dominant_goal.is_none() {
            if let Some(goal) = match_goal(&message) {
                profile.dominant_goal = Some(goal);
                profile.record_confidence(ProfileField::Goal, GOAL_CONFIDENCE);
            }
        }

        if profile.active_tension.is_none() {
            if let Some(tension) = match_tension(&message) {
                profile.active_tension = Some(tension);
                profile.record_confidence(ProfileField::Tension, TENSION_CONFIDENCE);
            }
        }

        if profile.operating_horizon_years.is_none() {
            if let Some(horizon) = extract_horizon(&message) {
                profile.operating_horizon_years = Some(horizon);
                profile.record_confidence(ProfileField::Horizon, HORIZON_CONFIDENCE);
            }
        }

        if profile.friction_capacity_clp.is_none() {
            if let Some(amount) = extract_friction(&message) {
                profile.friction_capacity_clp = Some(amount);
                profile.record_confidence(ProfileField::Friction, FRICTION_CONFIDENCE);
            }
        }
    }

    /// The next clarifying question, or `None` once the profile is complete.
    pub fn next_question(&self, profile: &InvestorProfile) -> Option<&'static str> {
        profile
            .missing_fields()
            .first()
            .map(|field| field.question())
    }
}

fn match_goal(message: &str) -> Option<DominantGoal> {
    GOAL_TRIGGERS
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|phrase| message.contains(phrase)))
        .map(|(goal, _)| *goal)
}

fn match_tension(message: &str) -> Option<EmotionalTension> {
    TENSION_TRIGGERS
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|phrase| message.contains(phrase)))
        .map(|(tension, _)| *tension)
}

/// Years left until the retirement age, derived from a stated age.
fn extract_horizon(message: &str) -> Option<u32> {
    let captures = age_pattern().captures(message)?;
    let age = captures.get(1)?.as_str().parse::<u32>().ok()?;
    Some(RETIREMENT_AGE.saturating_sub(age))
}

/// Monthly CLP amount the user has sustained before.
///
/// Scaling heuristic: a "millon" mention scales by a million; otherwise an
/// amount under 1000 is read as thousands. Parse or overflow failures leave
/// the field unset so the interview can re-ask.
fn extract_friction(message: &str) -> Option<u64> {
    let captures = friction_pattern().captures(message)?;
    let amount = captures.get(1)?.as_str().parse::<u64>().ok()?;

    if message.contains("millon") {
        amount.checked_mul(1_000_000)
    } else if amount < 1_000 {
        amount.checked_mul(1_000)
    } else {
        Some(amount)
    }
}

#[cfg(test)]
pub(crate) fn extract_friction_for_tests(message: &str) -> Option<u64> {
    extract_friction(message)
}
