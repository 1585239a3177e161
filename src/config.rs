use crate::cli::Cli;
use crate::error::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_CARD_URL: &str = "https://github-readme-stats.vercel.app/api/pin/";
const USER_AGENT: &str = concat!("github-profile-updater/", env!("CARGO_PKG_VERSION"));

/// Connection settings for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub token: Option<String>,
    pub api_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl GitHubConfig {
    pub fn new(token: Option<String>) -> Result<Self> {
        Ok(Self {
            token: token.filter(|t| !t.trim().is_empty()),
            api_url: Url::parse(DEFAULT_API_URL)?,
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT.to_string(),
        })
    }

    pub fn with_api_url(mut self, api_url: &str) -> Result<Self> {
        self.api_url = Url::parse(api_url)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// How stats card links are generated
#[derive(Debug, Clone)]
pub struct CardConfig {
    pub service_url: Url,
    pub theme: String,
    pub hide_border: bool,
    /// Appended as `v=YYYYMMDD` so image caches refresh daily
    pub cache_bust: Option<NaiveDate>,
}

impl CardConfig {
    pub fn new(service_url: &str) -> Result<Self> {
        Ok(Self {
            service_url: Url::parse(service_url)?,
            theme: "dark".to_string(),
            hide_border: true,
            cache_bust: None,
        })
    }

    pub fn with_cache_bust(mut self, date: NaiveDate) -> Self {
        self.cache_bust = Some(date);
        self
    }
}

/// Everything one update run needs
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    pub github: GitHubConfig,
    pub card: CardConfig,
    pub account: Option<String>,
    pub limit: usize,
    pub readme: PathBuf,
    pub fallback: PathBuf,
    pub dry_run: bool,
}

impl UpdaterConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let github = GitHubConfig::new(cli.token)?
            .with_api_url(&cli.api_url)?
            .with_timeout(Duration::from_secs(cli.timeout));

        let mut card = CardConfig::new(&cli.card_url)?;
        card.theme = cli.theme;
        card.hide_border = !cli.show_border;
        if !cli.no_cache_bust {
            card = card.with_cache_bust(Local::now().date_naive());
        }

        Ok(Self {
            github,
            card,
            account: cli.account.filter(|a| !a.trim().is_empty()),
            limit: cli.limit,
            readme: cli.readme,
            fallback: cli.fallback,
            dry_run: cli.dry_run,
        })
    }
}
