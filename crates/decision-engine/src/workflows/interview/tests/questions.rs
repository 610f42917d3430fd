use super::common::*;
use crate::workflows::interview::profile::{
    DominantGoal, EmotionalTension, InvestorProfile, ProfileField,
};

#[test]
fn empty_profile_is_asked_about_the_goal_first() {
    let profile = InvestorProfile::new();
    assert_eq!(
        extractor().next_question(&profile),
        Some(ProfileField::Goal.question())
    );
}

#[test]
fn question_order_ignores_the_order_fields_were_filled_in() {
    // Horizon and friction arrived before goal/tension; the interview still
    // returns to the first missing field in canonical order.
    let mut profile = InvestorProfile::new();
    profile.operating_horizon_years = Some(12);
    profile.friction_capacity_clp = Some(350_000);

    assert_eq!(
        extractor().next_question(&profile),
        Some(ProfileField::Goal.question())
    );

    profile.dominant_goal = Some(DominantGoal::AssetAppreciation);
    assert_eq!(
        extractor().next_question(&profile),
        Some(ProfileField::Tension.question())
    );
}

#[test]
fn complete_profile_has_no_next_question() {
    let mut profile = InvestorProfile::new();
    profile.dominant_goal = Some(DominantGoal::MonthlyCashflow);
    profile.active_tension = Some(EmotionalTension::NegativePastExperience);
    profile.operating_horizon_years = Some(18);
    profile.friction_capacity_clp = Some(250_000);

    assert_eq!(extractor().next_question(&profile), None);
}

#[test]
fn every_field_owns_a_distinct_question() {
    let questions: Vec<&str> = ProfileField::ordered()
        .iter()
        .map(|field| field.question())
        .collect();

    for (index, question) in questions.iter().enumerate() {
        assert!(!question.is_empty());
        assert!(
            questions[index + 1..]
                .iter()
                .all(|other| other != question),
            "question for field #{index} duplicated"
        );
    }
}
