use crate::demo::{run_catalog, run_demo, run_wizard, CatalogArgs, DemoArgs, WizardArgs};
use clap::{Parser, Subcommand};
use job_profile::config::AppConfig;
use job_profile::error::AppError;
use job_profile::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "job-profile",
    about = "Drive the job-board profile setup steps from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay the built-in profile setup walkthrough (default command)
    Demo(DemoArgs),
    /// Replay a recorded action script through the profile setup wizard
    Wizard(WizardArgs),
    /// List the candidate pools offered by the profile steps
    Catalog(CatalogArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, rules = ?config.rules, "profile setup ready");

    match command {
        Command::Demo(args) => run_demo(args, &config),
        Command::Wizard(args) => run_wizard(args, &config),
        Command::Catalog(args) => run_catalog(args, &config),
    }
}
