use serde::Serialize;

/// Severity ladder for detected tensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Medium,
    High,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medium => "MEDIA",
            Self::High => "ALTA",
        }
    }
}

/// The fixed set of mismatches the evaluator can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionKind {
    FrictionExcessive,
    FrictionLimit,
    HorizonTight,
}

impl TensionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FrictionExcessive => "Fricción Excesiva",
            Self::FrictionLimit => "Fricción al Límite",
            Self::HorizonTight => "Horizonte Ajustado",
        }
    }
}

/// One detected mismatch between the profile and a unit's financial shape,
/// with the commitment that would mitigate it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tension {
    pub kind: TensionKind,
    pub severity: Severity,
    pub description: String,
    pub commitment: &'static str,
}

/// Compatibility verdict derived from the tension list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Viability {
    Viable,
    ViableWithTensions,
    NotViable,
}

impl Viability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Viable => "VIABLE",
            Self::ViableWithTensions => "VIABLE CON TENSIONES",
            Self::NotViable => "NO VIABLE",
        }
    }
}

/// A single high severity tension vetoes viability outright; anything else
/// degrades to viable-with-tensions.
pub(crate) fn viability_for(tensions: &[Tension]) -> Viability {
    if tensions
        .iter()
        .any(|tension| tension.severity == Severity::High)
    {
        Viability::NotViable
    } else if tensions.is_empty() {
        Viability::Viable
    } else {
        Viability::ViableWithTensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tension(severity: Severity) -> Tension {
        Tension {
            kind: TensionKind::FrictionLimit,
            severity,
            description: "test".to_string(),
            commitment: "test",
        }
    }

    #[test]
    fn high_severity_overrides_any_number_of_medium_tensions() {
        let tensions = vec![
            tension(Severity::Medium),
            tension(Severity::Medium),
            tension(Severity::High),
        ];
        assert_eq!(viability_for(&tensions), Viability::NotViable);
    }

    #[test]
    fn empty_tension_list_is_viable() {
        assert_eq!(viability_for(&[]), Viability::Viable);
        assert_eq!(
            viability_for(&[tension(Severity::Medium)]),
            Viability::ViableWithTensions
        );
    }
}
