use serde::{Deserialize, Serialize};

/// Identifier wrapper for portfolio units.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId(pub String);

/// Commercial strategy a unit is underwritten for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTag {
    MixedAppreciation,
    DeliveredCashflow,
    PremiumAppreciation,
}

impl StrategyTag {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MixedAppreciation => "Plusvalía Mixta Obra-Operación",
            Self::DeliveredCashflow => "Cashflow King Entrega",
            Self::PremiumAppreciation => "Plusvalía Obra Premium",
        }
    }

    /// Stable code used by external catalog feeds.
    pub const fn code(self) -> &'static str {
        match self {
            Self::MixedAppreciation => "PLUSVALIA_MIXTA_OBRA_OPERACION",
            Self::DeliveredCashflow => "CASHFLOW_KING_ENTREGA",
            Self::PremiumAppreciation => "PLUSVALIA_OBRA_PREMIUM",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "PLUSVALIA_MIXTA_OBRA_OPERACION" => Some(Self::MixedAppreciation),
            "CASHFLOW_KING_ENTREGA" => Some(Self::DeliveredCashflow),
            "PLUSVALIA_OBRA_PREMIUM" => Some(Self::PremiumAppreciation),
            _ => None,
        }
    }
}

/// One candidate investment unit, supplied read-only by the catalog.
///
/// Prices are quoted in UF; monthly cashflows in CLP. A negative
/// `monthly_differential_clp` is a net monthly cost to the owner;
/// `inflection_years` is when cumulative cashflow is projected to turn
/// non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub developer: String,
    pub commune: String,
    pub quadrant: String,
    pub typology: String,
    pub floor_area_m2: f64,
    pub price_uf: f64,
    pub delivery_months: u32,
    pub estimated_rent_clp: u64,
    pub strategy: StrategyTag,
    pub monthly_differential_clp: i64,
    pub inflection_years: f64,
}

impl Unit {
    /// UF price converted through a multiplicative UF/CLP rate.
    pub fn price_clp(&self, uf_rate: f64) -> f64 {
        self.price_uf * uf_rate
    }
}

/// Thousands-separated CLP amount for user-facing text.
pub(crate) fn format_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
