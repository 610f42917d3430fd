use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use decision_engine::config::MarketConfig;
use decision_engine::error::AppError;
use decision_engine::workflows::interview::{InvestorProfile, ProfileExtractor};
use decision_engine::workflows::portfolio::{
    CompatibilityEngine, DecisionDocument, Evaluation, EvaluationConfig, Unit, UnitId,
};

use crate::infra::{document_id_for, load_catalog};

#[derive(Args, Debug, Default)]
pub(crate) struct ListArgs {
    /// Only show units in this commune
    #[arg(long)]
    pub(crate) commune: Option<String>,
    /// Only show units with this typology
    #[arg(long)]
    pub(crate) typology: Option<String>,
    /// Replace the built-in portfolio with a CSV export
    #[arg(long)]
    pub(crate) portfolio_csv: Option<PathBuf>,
    /// UF to CLP rate used for displayed prices
    #[arg(long)]
    pub(crate) uf_rate: Option<f64>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Unit to evaluate
    #[arg(long)]
    pub(crate) unit_id: String,
    /// Interview answer fed to the extractor; repeat the flag for several turns
    #[arg(long = "answer")]
    pub(crate) answers: Vec<String>,
    /// UF to CLP rate used for the converted price
    #[arg(long)]
    pub(crate) uf_rate: Option<f64>,
    /// Replace the built-in portfolio with a CSV export
    #[arg(long)]
    pub(crate) portfolio_csv: Option<PathBuf>,
    /// Also print the decision document
    #[arg(long)]
    pub(crate) document: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Unit highlighted in the document portion of the demo
    #[arg(long)]
    pub(crate) unit_id: Option<String>,
    /// UF to CLP rate used for displayed prices
    #[arg(long)]
    pub(crate) uf_rate: Option<f64>,
    /// Replace the built-in portfolio with a CSV export
    #[arg(long)]
    pub(crate) portfolio_csv: Option<PathBuf>,
    /// Skip the decision document printout
    #[arg(long)]
    pub(crate) skip_document: bool,
}

/// Scripted answers used when the demo plays both sides of the interview.
const DEMO_ANSWERS: &[&str] = &[
    "quiero asegurar mi jubilación y no depender de nadie",
    "no quiero deuda que no pueda liquidar pronto",
    "tengo 45 años",
    "el año pasado sostuve 500 mil mensual sin problemas",
];

pub(crate) fn run_portfolio_list(args: ListArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.portfolio_csv.as_deref())?;
    let uf_rate = args.uf_rate.unwrap_or(MarketConfig::DEFAULT_UF_RATE);

    let units = catalog.filtered(args.commune.as_deref(), args.typology.as_deref());
    println!("Portfolio ({} units)", units.len());
    for unit in units {
        print_unit_line(unit, uf_rate);
    }

    println!(
        "\nCommunes: {} | Typologies: {}",
        catalog.communes().join(", "),
        catalog.typologies().join(", ")
    );
    Ok(())
}

pub(crate) fn run_portfolio_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.portfolio_csv.as_deref())?;
    let uf_rate = args.uf_rate.unwrap_or(MarketConfig::DEFAULT_UF_RATE);
    let unit_id = UnitId(args.unit_id.clone());

    let Some(unit) = catalog.find(&unit_id) else {
        println!("unit {} not found in the portfolio", args.unit_id);
        return Ok(());
    };

    let profile = profile_from_answers(&args.answers);
    if !profile.is_complete() {
        let missing: Vec<&str> = profile
            .missing_fields()
            .into_iter()
            .map(|field| field.label())
            .collect();
        println!(
            "Perfil incompleto (faltan: {}); la evaluación omitirá esas reglas.\n",
            missing.join(", ")
        );
    }

    let engine = CompatibilityEngine::new(EvaluationConfig::default());
    let evaluation = engine.evaluate(unit, &profile, uf_rate)?;
    print_evaluation(&evaluation);

    if args.document {
        let generated_on = Local::now().naive_local();
        let document = DecisionDocument::new(
            document_id_for(generated_on),
            generated_on,
            profile,
            evaluation,
        );
        println!("\n{}", document.render_text());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.portfolio_csv.as_deref())?;
    let uf_rate = args.uf_rate.unwrap_or(MarketConfig::DEFAULT_UF_RATE);

    println!("Property decision engine demo\n");
    println!("-- Guided interview --");

    let extractor = ProfileExtractor::new();
    let mut profile = InvestorProfile::new();
    for answer in DEMO_ANSWERS {
        match extractor.next_question(&profile) {
            Some(question) => println!("P: {question}"),
            None => break,
        }
        println!("R: {answer}\n");
        extractor.extract(answer, &mut profile);
    }
    println!(
        "Perfil completo: {}/{} campos resueltos\n",
        profile.answered_count(),
        4
    );

    println!("-- Portfolio verdicts --");
    let engine = CompatibilityEngine::new(EvaluationConfig::default());
    for unit in catalog.units() {
        let evaluation = engine.evaluate(unit, &profile, uf_rate)?;
        println!(
            "{:<8} {:<24} {:<22} {} tension(s)",
            unit.id.0,
            unit.name,
            evaluation.state.label(),
            evaluation.tensions.len()
        );
    }

    if !args.skip_document {
        let unit_id = UnitId(args.unit_id.unwrap_or_else(|| "MAT-001".to_string()));
        let Some(unit) = catalog.find(&unit_id) else {
            println!("\nunit {} not found in the portfolio", unit_id.0);
            return Ok(());
        };
        let evaluation = engine.evaluate(unit, &profile, uf_rate)?;
        let generated_on = Local::now().naive_local();
        let document = DecisionDocument::new(
            document_id_for(generated_on),
            generated_on,
            profile,
            evaluation,
        );
        println!("\n{}", document.render_text());
    }

    Ok(())
}

fn profile_from_answers(answers: &[String]) -> InvestorProfile {
    let extractor = ProfileExtractor::new();
    let mut profile = InvestorProfile::new();
    for answer in answers {
        extractor.extract(answer, &mut profile);
    }
    profile
}

fn print_unit_line(unit: &Unit, uf_rate: f64) {
    println!(
        "{:<8} {:<24} {}, {} | {}, {}m² | {} UF (~${:.0}) | diferencial {} CLP/mes | inflexión año {} | {}",
        unit.id.0,
        unit.name,
        unit.commune,
        unit.quadrant,
        unit.typology,
        unit.floor_area_m2,
        unit.price_uf,
        unit.price_clp(uf_rate),
        unit.monthly_differential_clp,
        unit.inflection_years,
        unit.strategy.label()
    );
}

fn print_evaluation(evaluation: &Evaluation) {
    println!("Unidad: {} ({})", evaluation.unit.name, evaluation.unit.id.0);
    println!("Estado: {}", evaluation.state.label());
    println!(
        "Diferencial mensual: {} CLP | Inflexión: año {} | Precio: ~${:.0}",
        evaluation.monthly_differential_clp, evaluation.inflection_years, evaluation.price_clp
    );

    if evaluation.tensions.is_empty() {
        println!("Sin tensiones detectadas.");
        return;
    }

    println!("Tensiones detectadas:");
    for tension in &evaluation.tensions {
        println!(
            "  [{}] {}: {}",
            tension.severity.label(),
            tension.kind.label(),
            tension.description
        );
        println!("        Compromiso: {}", tension.commitment);
    }
}
