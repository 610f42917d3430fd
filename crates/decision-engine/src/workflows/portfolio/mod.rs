//! Portfolio units and the compatibility evaluation that scores them against
//! an interview profile.

pub mod catalog;
pub mod document;
pub mod domain;
pub mod evaluation;

mod import;

#[cfg(test)]
mod tests;

pub use catalog::UnitCatalog;
pub use document::{DecisionDocument, DOCUMENT_WARNINGS};
pub use domain::{StrategyTag, Unit, UnitId};
pub use evaluation::{
    CompatibilityEngine, Evaluation, EvaluationConfig, EvaluationError, Severity, Tension,
    TensionKind, Viability,
};
pub use import::CatalogImportError;
