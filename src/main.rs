use clap::Parser;
use colored::*;
use github_profile_updater::cli::Cli;
use github_profile_updater::config::UpdaterConfig;
use github_profile_updater::updater::{run, UpdateOutcome};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    let config = match UpdaterConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "GitHub Profile Updater".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    match run(&config).await {
        Ok(UpdateOutcome::DryRun(document)) => {
            println!("{}", document);
            ExitCode::SUCCESS
        }
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "Profile update failed");
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
