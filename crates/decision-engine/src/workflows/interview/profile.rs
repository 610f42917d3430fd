use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What the investor ultimately wants the asset to do for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DominantGoal {
    RetirementProvision,
    MonthlyCashflow,
    AssetAppreciation,
    LiquiditySecurity,
}

impl DominantGoal {
    pub const fn label(self) -> &'static str {
        match self {
            Self::RetirementProvision => "Previsión de jubilación",
            Self::MonthlyCashflow => "Flujo mensual",
            Self::AssetAppreciation => "Plusvalía patrimonial",
            Self::LiquiditySecurity => "Liquidez y seguridad",
        }
    }
}

/// The emotional friction the interview surfaced around money decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalTension {
    HighDebtAversion,
    MediumDebtAversion,
    UncertaintyAnxiety,
    NegativePastExperience,
}

impl EmotionalTension {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighDebtAversion => "Aversión alta a la deuda",
            Self::MediumDebtAversion => "Aversión media a la deuda",
            Self::UncertaintyAnxiety => "Ansiedad por incertidumbre",
            Self::NegativePastExperience => "Experiencia negativa previa",
        }
    }
}

/// The four attributes the interview must resolve, in the canonical order the
/// orchestrator asks about them. The ordering is a contract, not an accident:
/// `next_question` and `missing_fields` both follow it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Goal,
    Tension,
    Horizon,
    Friction,
}

impl ProfileField {
    pub const fn ordered() -> [Self; 4] {
        [Self::Goal, Self::Tension, Self::Horizon, Self::Friction]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Goal => "objetivo",
            Self::Tension => "tensión emocional",
            Self::Horizon => "horizonte temporal",
            Self::Friction => "capacidad de fricción",
        }
    }

    /// The fixed clarifying question asked while this field is still unknown.
    pub const fn question(self) -> &'static str {
        match self {
            Self::Goal => {
                "¿Buscas principalmente generar ingreso mensual, que tu inversión crezca de valor, o seguridad para el futuro?"
            }
            Self::Tension => {
                "¿Qué te genera más inquietud: la idea de tener deuda, o que tu dinero pierda valor guardado?"
            }
            Self::Horizon => "¿En cuántos años esperas dejar de trabajar activamente?",
            Self::Friction => {
                "Si tuvieras que sostener un gasto mensual adicional por un tiempo, ¿hasta dónde podrías llegar sin que te afecte la tranquilidad? (¿Has pasado por algo similar?)"
            }
        }
    }
}

/// The structured decision profile inferred across interview turns.
///
/// Every attribute is optional until an utterance triggers it. `Some(0)` is a
/// deliberately distinct state from `None`: a user retiring this year has a
/// zero-year horizon, not a missing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub dominant_goal: Option<DominantGoal>,
    pub active_tension: Option<EmotionalTension>,
    pub operating_horizon_years: Option<u32>,
    pub friction_capacity_clp: Option<u64>,
    /// Extraction confidence per resolved field, populated only for set fields.
    pub confidences: BTreeMap<ProfileField, f32>,
}

impl InvestorProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Goal => self.dominant_goal.is_some(),
            ProfileField::Tension => self.active_tension.is_some(),
            ProfileField::Horizon => self.operating_horizon_years.is_some(),
            ProfileField::Friction => self.friction_capacity_clp.is_some(),
        }
    }

    pub fn is_complete(&self) -> bool {
        ProfileField::ordered().iter().all(|field| self.is_set(*field))
    }

    /// Unresolved fields in the canonical interview order.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ordered()
            .iter()
            .copied()
            .filter(|field| !self.is_set(*field))
            .collect()
    }

    pub fn answered_count(&self) -> usize {
        ProfileField::ordered()
            .iter()
            .filter(|field| self.is_set(**field))
            .count()
    }

    pub fn confidence(&self, field: ProfileField) -> Option<f32> {
        self.confidences.get(&field).copied()
    }

    pub(crate) fn record_confidence(&mut self, field: ProfileField, value: f32) {
        self.confidences.insert(field, value);
    }
}
