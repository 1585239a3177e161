use crate::config::{DEFAULT_API_URL, DEFAULT_CARD_URL};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "github-profile-updater")]
#[command(about = "Updates a GitHub profile README with stats cards for top starred repositories")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub token, required when no account is given
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Account whose repositories are listed (defaults to the token holder)
    #[arg(long, env = "GITHUB_USERNAME")]
    pub account: Option<String>,

    /// Number of repositories to showcase
    #[arg(long, env = "PROFILE_REPO_LIMIT", default_value_t = 6)]
    pub limit: usize,

    /// Profile document to patch
    #[arg(long, env = "PROFILE_README", default_value = "README.md")]
    pub readme: PathBuf,

    /// Document tried when the primary one is missing or has no markers
    #[arg(long, env = "PROFILE_FALLBACK", default_value = "profile.md")]
    pub fallback: PathBuf,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Stats card service endpoint
    #[arg(long, env = "PROFILE_CARD_URL", default_value = DEFAULT_CARD_URL)]
    pub card_url: String,

    /// Stats card theme
    #[arg(long, default_value = "dark")]
    pub theme: String,

    /// Draw the stats card border
    #[arg(long)]
    pub show_border: bool,

    /// Leave the daily date parameter off card URLs
    #[arg(long)]
    pub no_cache_bust: bool,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Print the patched document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}
