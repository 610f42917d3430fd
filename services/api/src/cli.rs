use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use decision_engine::error::AppError;

use crate::demo::{
    run_demo, run_portfolio_evaluate, run_portfolio_list, DemoArgs, EvaluateArgs, ListArgs,
};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "Property Decision Engine",
    about = "Run and demonstrate the property decision engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect and evaluate the unit portfolio
    Portfolio {
        #[command(subcommand)]
        command: PortfolioCommand,
    },
    /// Run an end-to-end CLI demo covering the interview and the evaluation
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PortfolioCommand {
    /// List catalog units with optional commune/typology filters
    List(ListArgs),
    /// Evaluate one unit against a profile built from scripted answers
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Replace the built-in portfolio with a CSV export
    #[arg(long)]
    pub(crate) portfolio_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Portfolio {
            command: PortfolioCommand::List(args),
        } => run_portfolio_list(args),
        Command::Portfolio {
            command: PortfolioCommand::Evaluate(args),
        } => run_portfolio_evaluate(args),
        Command::Demo(args) => run_demo(args),
    }
}
