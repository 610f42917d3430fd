use crate::workflows::interview::{DominantGoal, EmotionalTension, InvestorProfile};
use crate::workflows::portfolio::domain::{StrategyTag, Unit, UnitId};
use crate::workflows::portfolio::evaluation::{CompatibilityEngine, EvaluationConfig};

pub(super) const UF_RATE: f64 = 36_500.0;

pub(super) fn engine() -> CompatibilityEngine {
    CompatibilityEngine::new(EvaluationConfig::default())
}

pub(super) fn unit(differential_clp: i64, inflection_years: f64) -> Unit {
    Unit {
        id: UnitId("MAT-001".to_string()),
        name: "Proyecto Mata".to_string(),
        developer: "Grupo Z".to_string(),
        commune: "Santiago".to_string(),
        quadrant: "Mata".to_string(),
        typology: "2D".to_string(),
        floor_area_m2: 58.0,
        price_uf: 3100.0,
        delivery_months: 24,
        estimated_rent_clp: 480_000,
        strategy: StrategyTag::PremiumAppreciation,
        monthly_differential_clp: differential_clp,
        inflection_years,
    }
}

pub(super) fn profile(horizon_years: u32, friction_clp: u64) -> InvestorProfile {
    let mut profile = InvestorProfile::new();
    profile.dominant_goal = Some(DominantGoal::RetirementProvision);
    profile.active_tension = Some(EmotionalTension::MediumDebtAversion);
    profile.operating_horizon_years = Some(horizon_years);
    profile.friction_capacity_clp = Some(friction_clp);
    profile
}
