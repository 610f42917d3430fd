use super::domain::{StrategyTag, Unit, UnitId};

/// Read-only collection of candidate units the evaluator runs against.
///
/// The caller supplies the records; `standard()` carries the built-in demo
/// portfolio so the service works out of the box.
#[derive(Debug, Clone)]
pub struct UnitCatalog {
    units: Vec<Unit>,
}

impl UnitCatalog {
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    pub fn standard() -> Self {
        Self::new(standard_units())
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn find(&self, id: &UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| &unit.id == id)
    }

    /// Units matching the optional commune/typology filters.
    pub fn filtered(&self, commune: Option<&str>, typology: Option<&str>) -> Vec<&Unit> {
        self.units
            .iter()
            .filter(|unit| commune.map_or(true, |value| unit.commune == value))
            .filter(|unit| typology.map_or(true, |value| unit.typology == value))
            .collect()
    }

    pub fn communes(&self) -> Vec<&str> {
        let mut communes: Vec<&str> = self.units.iter().map(|unit| unit.commune.as_str()).collect();
        communes.sort_unstable();
        communes.dedup();
        communes
    }

    pub fn typologies(&self) -> Vec<&str> {
        let mut typologies: Vec<&str> = self
            .units
            .iter()
            .map(|unit| unit.typology.as_str())
            .collect();
        typologies.sort_unstable();
        typologies.dedup();
        typologies
    }
}

fn standard_units() -> Vec<Unit> {
    vec![
        Unit {
            id: UnitId("POR-001".to_string()),
            name: "Edificio Portugal".to_string(),
            developer: "Inmobiliaria X".to_string(),
            commune: "Santiago".to_string(),
            quadrant: "Portugal".to_string(),
            typology: "1D".to_string(),
            floor_area_m2: 42.0,
            price_uf: 2600.0,
            delivery_months: 14,
            estimated_rent_clp: 420_000,
            strategy: StrategyTag::MixedAppreciation,
            monthly_differential_clp: -180_000,
            inflection_years: 6.5,
        },
        Unit {
            id: UnitId("FLD-001".to_string()),
            name: "Condominio La Florida".to_string(),
            developer: "Desarrolladora Y".to_string(),
            commune: "La Florida".to_string(),
            quadrant: "Vicente Valdés".to_string(),
            typology: "Estudio".to_string(),
            floor_area_m2: 35.0,
            price_uf: 2200.0,
            delivery_months: 0,
            estimated_rent_clp: 380_000,
            strategy: StrategyTag::DeliveredCashflow,
            monthly_differential_clp: 50_000,
            inflection_years: 0.0,
        },
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
            monthly_differential_clp: -250_000,
            inflection_years: 8.0,
        },
    ]
}
