use crate::workflows::interview::InvestorProfile;

use super::super::domain::{format_thousands, Unit};
use super::config::EvaluationConfig;
use super::policy::{Severity, Tension, TensionKind};

const FRICTION_EXCESS_COMMITMENT: &str = "Reconsiderar capacidad o buscar alternativa";
const FRICTION_LIMIT_COMMITMENT: &str = "Validar que puedes sostener esto 24+ meses";
const HORIZON_COMMITMENT: &str = "Confirmar estabilidad laboral, no anticipar cambios";

/// Run every compatibility rule against the unit, in fixed order: friction
/// first, then horizon. A rule whose profile field is unset is skipped, so a
/// partial profile degrades to fewer tensions instead of erroring.
pub(crate) fn detect_tensions(
    unit: &Unit,
    profile: &InvestorProfile,
    config: &EvaluationConfig,
) -> Vec<Tension> {
    let mut tensions = Vec::new();

    if let Some(limit) = profile.friction_capacity_clp {
        let shortfall = unit.monthly_differential_clp.unsigned_abs();
        let limit_value = limit as f64;
        let shortfall_value = shortfall as f64;

        if shortfall_value > limit_value * config.friction_excess_multiplier {
            let excess_pct = (config.friction_excess_multiplier - 1.0) * 100.0;
            tensions.push(Tension {
                kind: TensionKind::FrictionExcessive,
                severity: Severity::High,
                description: format!(
                    "Diferencial ${} supera tu límite ${} en más de {:.0}%",
                    format_thousands(shortfall),
                    format_thousands(limit),
                    excess_pct
                ),
                commitment: FRICTION_EXCESS_COMMITMENT,
            });
        } else if shortfall > limit {
            let ratio = shortfall_value / limit_value;
            tensions.push(Tension {
                kind: TensionKind::FrictionLimit,
                severity: Severity::Medium,
                description: format!(
                    "${} es {:.0}% de tu experiencia previa",
                    format_thousands(shortfall),
                    ratio * 100.0
                ),
                commitment: FRICTION_LIMIT_COMMITMENT,
            });
        }
    }

    if let Some(horizon) = profile.operating_horizon_years {
        if unit.inflection_years > horizon as f64 * config.horizon_pressure_ratio {
            tensions.push(Tension {
                kind: TensionKind::HorizonTight,
                severity: Severity::Medium,
                description: format!(
                    "Inflexión año {}, tu horizonte es {} años",
                    unit.inflection_years, horizon
                ),
                commitment: HORIZON_COMMITMENT,
            });
        }
    }

    tensions
}
