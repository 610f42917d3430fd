use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::catalog::UnitCatalog;
use super::domain::{StrategyTag, Unit, UnitId};

/// Errors raised while loading an external portfolio export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read portfolio export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid portfolio CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown strategy code '{code}' for unit {unit_id}")]
    UnknownStrategy { unit_id: String, code: String },
}

impl UnitCatalog {
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Build a catalog from a CSV export with one row per unit.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut units = Vec::new();

        for record in csv_reader.deserialize::<UnitRow>() {
            let row = record?;
            let strategy = StrategyTag::from_code(&row.strategy).ok_or_else(|| {
                CatalogImportError::UnknownStrategy {
                    unit_id: row.id.clone(),
                    code: row.strategy.clone(),
                }
            })?;

            units.push(Unit {
                id: UnitId(row.id),
                name: row.name,
                developer: row.developer,
                commune: row.commune,
                quadrant: row.quadrant,
                typology: row.typology,
                floor_area_m2: row.floor_area_m2,
                price_uf: row.price_uf,
                delivery_months: row.delivery_months,
                estimated_rent_clp: row.estimated_rent_clp,
                strategy,
                monthly_differential_clp: row.monthly_differential_clp,
                inflection_years: row.inflection_years,
            });
        }

        Ok(Self::new(units))
    }
}

#[derive(Debug, Deserialize)]
struct UnitRow {
    id: String,
    name: String,
    developer: String,
    commune: String,
    quadrant: String,
    typology: String,
    floor_area_m2: f64,
    price_uf: f64,
    delivery_months: u32,
    estimated_rent_clp: u64,
    strategy: String,
    monthly_differential_clp: i64,
    inflection_years: f64,
}
