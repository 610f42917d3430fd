use std::sync::OnceLock;

use regex::Regex;

use super::profile::{DominantGoal, EmotionalTension};

/// Goal trigger phrases, matched as substrings against the lower-cased
/// utterance. Slice order is the tie-break when several categories match.
pub(crate) const GOAL_TRIGGERS: &[(DominantGoal, &[&str])] = &[
    (
        DominantGoal::RetirementProvision,
        &["jubilación", "pensión", "jubilar", "vejez", "no depender"],
    ),
    (
        DominantGoal::MonthlyCashflow,
        &[
            "renta mensual",
            "ingreso mensual",
            "flujo",
            "complementar sueldo",
            "pagar cuentas",
        ],
    ),
    (
        DominantGoal::AssetAppreciation,
        &[
            "crecer valor",
            "plusvalía",
            "vender más caro",
            "patrimonio",
            "herencia",
        ],
    ),
    (
        DominantGoal::LiquiditySecurity,
        &[
            "liquidez",
            "disponible",
            "sacar plata",
            "emergencia",
            "por si acaso",
        ],
    ),
];

/// Emotional-tension trigger phrases. Same ordered first-match contract as
/// the goal table.
pub(crate) const TENSION_TRIGGERS: &[(EmotionalTension, &[&str])] = &[
    (
        EmotionalTension::HighDebtAversion,
        &[
            "bajo ninguna circunstancia",
            "nunca más deuda",
            "pánico deuda",
            "terror deber",
        ],
    ),
    (
        EmotionalTension::MediumDebtAversion,
        &["no quiero deuda", "preferiría sin crédito", "liquidar pronto"],
    ),
    (
        EmotionalTension::UncertaintyAnxiety,
        &[
            "me angustia no saber",
            "estresa la incertidumbre",
            "quiero tener claro",
        ],
    ),
    (
        EmotionalTension::NegativePastExperience,
        &[
            "me quemé",
            "tuve mala experiencia",
            "la vez pasada",
            "problema con arriendo",
        ],
    ),
];

/// Age self-statement ("tengo 45 años"), tolerant of a missing accent.
pub(crate) fn age_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"tengo (\d+)\s*a[nñ]os").expect("age pattern compiles"))
}

/// Sustained-payment statement ("sostuve 500 mil"), capturing the amount.
pub(crate) fn friction_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:sostuve|mantuve|aguante|pagué)\s*.*?(\d+)\s*(?:mil|k)?")
            .expect("friction pattern compiles")
    })
}
