use std::fmt::Write as _;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::workflows::interview::InvestorProfile;

use super::domain::format_thousands;
use super::evaluation::Evaluation;

/// Fixed caveats printed on every decision document.
pub const DOCUMENT_WARNINGS: &[&str] = &[
    "Este documento no garantiza resultado positivo.",
    "Los escenarios son ejercicios de coherencia, no predicciones.",
    "La decisión final es tuya y solo tuya.",
    "Recomendación: releer en 48 horas antes de actuar.",
];

const UNDECLARED: &str = "sin declarar";

/// The decision record handed to the user once a unit has been evaluated.
///
/// Identifier and timestamp come from the caller; the core generates neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionDocument {
    pub document_id: String,
    pub generated_on: NaiveDateTime,
    pub profile: InvestorProfile,
    pub evaluation: Evaluation,
}

impl DecisionDocument {
    pub fn new(
        document_id: impl Into<String>,
        generated_on: NaiveDateTime,
        profile: InvestorProfile,
        evaluation: Evaluation,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            generated_on,
            profile,
            evaluation,
        }
    }

    /// Render the downloadable plain-text document.
    pub fn render_text(&self) -> String {
        let unit = &self.evaluation.unit;
        let mut text = String::new();

        let _ = writeln!(text, "DOCUMENTO DE DECISIÓN PATRIMONIAL");
        let _ = writeln!(text, "ID: {}", self.document_id);
        let _ = writeln!(text, "Fecha: {}", self.generated_on.format("%d/%m/%Y %H:%M"));
        let _ = writeln!(text);
        let _ = writeln!(text, "ESTADO: {}", self.evaluation.state.label());
        let _ = writeln!(text);

        let _ = writeln!(text, "TU SITUACIÓN DECLARADA");
        let _ = writeln!(
            text,
            "- Objetivo: {}",
            self.profile
                .dominant_goal
                .map(|goal| goal.label())
                .unwrap_or(UNDECLARED)
        );
        let _ = writeln!(
            text,
            "- Tensión principal: {}",
            self.profile
                .active_tension
                .map(|tension| tension.label())
                .unwrap_or(UNDECLARED)
        );
        match self.profile.operating_horizon_years {
            Some(years) => {
                let _ = writeln!(text, "- Horizonte: ~{years} años laborales");
            }
            None => {
                let _ = writeln!(text, "- Horizonte: {UNDECLARED}");
            }
        }
        match self.profile.friction_capacity_clp {
            Some(amount) => {
                let _ = writeln!(
                    text,
                    "- Capacidad de fricción: ${} mensuales",
                    format_thousands(amount)
                );
            }
            None => {
                let _ = writeln!(text, "- Capacidad de fricción: {UNDECLARED}");
            }
        }
        let _ = writeln!(text);

        let _ = writeln!(text, "ACTIVO ANALIZADO");
        let _ = writeln!(text, "{}", unit.name);
        let _ = writeln!(
            text,
            "{}, {} | {}, {}m²",
            unit.commune, unit.quadrant, unit.typology, unit.floor_area_m2
        );
        let _ = writeln!(
            text,
            "Valor: {} UF (~${})",
            unit.price_uf,
            format_thousands(self.evaluation.price_clp.round() as u64)
        );
        let _ = writeln!(text, "Entrega: {} meses", unit.delivery_months);
        let _ = writeln!(text, "Estrategia: {}", unit.strategy.label());
        let _ = writeln!(text);

        let _ = writeln!(text, "COMPROMISOS REQUERIDOS");
        if self.evaluation.tensions.is_empty() {
            let _ = writeln!(text, "Estrategia alineada sin tensiones críticas.");
        } else {
            for (index, tension) in self.evaluation.tensions.iter().enumerate() {
                let _ = writeln!(
                    text,
                    "{}. [{}] {}",
                    index + 1,
                    tension.severity.label(),
                    tension.description
                );
                let _ = writeln!(text, "   Compromiso: {}", tension.commitment);
            }
        }
        let _ = writeln!(text);

        let _ = writeln!(text, "ADVERTENCIAS");
        for warning in DOCUMENT_WARNINGS {
            let _ = writeln!(text, "- {warning}");
        }
        let _ = writeln!(text);
        let _ = writeln!(text, "Generado por Property Decision Engine.");

        text
    }
}
