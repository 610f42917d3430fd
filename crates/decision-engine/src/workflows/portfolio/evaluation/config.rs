use serde::{Deserialize, Serialize};

/// Thresholds governing the compatibility rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Shortfalls beyond `friction_capacity * multiplier` escalate to a high
    /// severity tension.
    pub friction_excess_multiplier: f64,
    /// Fraction of the operating horizon the inflection point may reach
    /// before the horizon tension fires.
    pub horizon_pressure_ratio: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            friction_excess_multiplier: 1.3,
            horizon_pressure_ratio: 0.9,
        }
    }
}
