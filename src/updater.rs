use crate::config::UpdaterConfig;
use crate::document::{select_document, write_document};
use crate::error::{ProfileError, Result};
use crate::github::GitHubClient;
use crate::models::{RepositorySummary, SlotOutcome};
use crate::patcher::ProfilePatcher;
use colored::*;
use std::path::PathBuf;
use tracing::info;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(PathBuf),
    Unchanged,
    DryRun(String),
}

impl UpdateOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, UpdateOutcome::Unchanged)
    }
}

/// Account to report on: the override when given, otherwise the token holder.
pub async fn resolve_account(client: &GitHubClient, account: Option<&str>) -> Result<String> {
    if let Some(account) = account {
        return Ok(account.to_string());
    }

    if !client.has_token() {
        return Err(ProfileError::ConfigError(
            "set GITHUB_TOKEN or GITHUB_USERNAME to choose an account".to_string(),
        ));
    }

    client.authenticated_login().await.map_err(|e| {
        ProfileError::ConfigError(format!("could not resolve the authenticated account: {}", e))
    })
}

pub fn print_ranking(repos: &[RepositorySummary]) {
    println!("\n{}", "=".repeat(60).dimmed());
    println!("{}", "Top Starred Repositories:".bold());
    println!("{}", "=".repeat(60).dimmed());
    for (i, repo) in repos.iter().enumerate() {
        println!(
            "{}. {} - ⭐ {} stars | {}",
            i + 1,
            repo.name.as_deref().unwrap_or("<unnamed>").cyan(),
            repo.star_count,
            repo.primary_language.as_deref().unwrap_or("N/A")
        );
    }
}

/// Fetch, rank, patch and write in one pass.
pub async fn run(config: &UpdaterConfig) -> Result<UpdateOutcome> {
    let client = GitHubClient::new(config.github.clone())?;

    println!("{}", "Fetching top starred repositories...".bold());
    let account = resolve_account(&client, config.account.as_deref()).await?;
    println!("Fetching repos for: {}", account.green());

    let ranked = client.fetch_ranked(config.account.as_deref(), config.limit).await?;
    println!("Found {} repositories", ranked.len());
    print_ranking(&ranked);

    if ranked.is_empty() {
        println!("{}", "No repositories to update".yellow());
        return Ok(UpdateOutcome::Unchanged);
    }

    let patcher = ProfilePatcher::new(config.card.clone())?;
    let candidates = [config.readme.as_path(), config.fallback.as_path()];
    let document = select_document(&patcher, &candidates).await?;
    println!("\nUpdating {}...", document.path.display());

    let outcome = patcher.patch(&ranked, &document.content)?;
    for (slot, result) in &outcome.slots {
        match result {
            SlotOutcome::MissingData(field) => {
                println!(
                    "{} slot {} skipped: repository has no {}",
                    "⚠️".yellow(),
                    slot.index,
                    field
                );
            }
            SlotOutcome::MissingMarkers => {
                info!(slot = slot.index, "Slot markers not present in document");
            }
            SlotOutcome::Updated | SlotOutcome::Unchanged => {}
        }
    }

    if !outcome.changed {
        println!("{}", format!("No changes detected in {}", document.path.display()).yellow());
        return Ok(UpdateOutcome::Unchanged);
    }

    if config.dry_run {
        println!("{}", "Dry run, document not written".yellow());
        return Ok(UpdateOutcome::DryRun(outcome.document));
    }

    write_document(&document.path, &outcome.document).await?;
    println!("✅ Successfully updated {}", document.path.display());
    Ok(UpdateOutcome::Updated(document.path))
}
