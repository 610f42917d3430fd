mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::{Severity, Tension, TensionKind, Viability};

use serde::Serialize;

use crate::workflows::interview::InvestorProfile;

use super::domain::{StrategyTag, Unit};

/// Stateless evaluator applying the compatibility rules to a profile/unit
/// pair. Safe to call repeatedly with the same arguments.
pub struct CompatibilityEngine {
    config: EvaluationConfig,
}

impl CompatibilityEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    /// Score one unit against the profile, converting the price through the
    /// caller-supplied UF rate. A non-positive or non-finite rate would
    /// corrupt the reported price, so it fails fast.
    pub fn evaluate(
        &self,
        unit: &Unit,
        profile: &InvestorProfile,
        uf_rate: f64,
    ) -> Result<Evaluation, EvaluationError> {
        if !uf_rate.is_finite() || uf_rate <= 0.0 {
            return Err(EvaluationError::NonPositiveRate(uf_rate));
        }

        let tensions = rules::detect_tensions(unit, profile, &self.config);
        let state = policy::viability_for(&tensions);

        Ok(Evaluation {
            state,
            strategy: unit.strategy,
            monthly_differential_clp: unit.monthly_differential_clp,
            inflection_years: unit.inflection_years,
            price_clp: unit.price_clp(uf_rate),
            unit: unit.clone(),
            tensions,
        })
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::new(EvaluationConfig::default())
    }
}

/// Self-contained verdict snapshot for downstream rendering: the state, the
/// ordered tension list, and the unit figures the document needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub state: Viability,
    pub unit: Unit,
    pub tensions: Vec<Tension>,
    pub strategy: StrategyTag,
    pub monthly_differential_clp: i64,
    pub inflection_years: f64,
    pub price_clp: f64,
}

/// Error raised by the compatibility evaluator.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("UF conversion rate must be a positive number, got {0}")]
    NonPositiveRate(f64),
}
