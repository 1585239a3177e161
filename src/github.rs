use crate::config::GitHubConfig;
use crate::error::{ProfileError, Result};
use crate::models::{RankedList, RepositorySummary};
use crate::ranking::rank;
use crate::types::{GitHubRepo, GitHubUser};
use reqwest::{Client, Response};
use tracing::{debug, info, warn};
use url::Url;

pub const PER_PAGE: usize = 100;
const ERROR_BODY_LIMIT: usize = 200;

pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    api_url: Url,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            token: config.token,
            api_url: config.api_url,
        })
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.api_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ProfileError::TransientFetch {
            status: status.as_u16(),
            body: body.chars().take(ERROR_BODY_LIMIT).collect(),
        })
    }

    /// Login of the token holder.
    pub async fn authenticated_login(&self) -> Result<String> {
        if !self.has_token() {
            return Err(ProfileError::AuthError(
                "a GitHub token is required to look up the authenticated user".to_string(),
            ));
        }

        let response = match self.make_request(self.endpoint("/user")?).await {
            Ok(response) => response,
            Err(ProfileError::TransientFetch { status, body })
                if status == 401 || status == 403 =>
            {
                return Err(ProfileError::AuthError(format!(
                    "GitHub rejected the token ({}): {}",
                    status, body
                )));
            }
            Err(e) => return Err(e),
        };

        let user: GitHubUser = serde_json::from_str(&response.text().await?)?;
        Ok(user.login)
    }

    /// Repository listing URL for one page: the account's public repositories
    /// when an account is given, otherwise the token holder's own.
    pub fn repos_url(&self, account: Option<&str>, page: u32) -> Result<Url> {
        let mut url = match account {
            Some(account) => {
                let mut url = self.endpoint("/users")?;
                url.path_segments_mut()
                    .map_err(|_| {
                        ProfileError::ConfigError(format!(
                            "API URL cannot be a base: {}",
                            self.api_url
                        ))
                    })?
                    .push(account)
                    .push("repos");
                url
            }
            None => self.endpoint("/user/repos")?,
        };

        url.query_pairs_mut()
            .append_pair("sort", "stars")
            .append_pair("direction", "desc")
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("page", &page.to_string());

        Ok(url)
    }

    /// Fetch a single page of repositories
    pub async fn fetch_repos_page(
        &self,
        account: Option<&str>,
        page: u32,
    ) -> Result<Vec<GitHubRepo>> {
        let url = self.repos_url(account, page)?;
        debug!(%url, page, "Fetching repositories page");

        let response = self.make_request(url).await?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&response.text().await?)?;
        Ok(repos)
    }

    /// Collect every page of repositories, then rank them by stars.
    ///
    /// A non-success status or network failure ends pagination; whatever was
    /// collected up to that point is still ranked and returned.
    pub async fn fetch_ranked(&self, account: Option<&str>, limit: usize) -> Result<RankedList> {
        if account.is_none() && !self.has_token() {
            return Err(ProfileError::AuthError(
                "a GitHub token is required to list the authenticated user's repositories"
                    .to_string(),
            ));
        }

        let mut repos: Vec<RepositorySummary> = Vec::new();
        let mut page = 1;

        loop {
            let page_repos = match self.fetch_repos_page(account, page).await {
                Ok(page_repos) => page_repos,
                Err(e) if e.is_transient() => {
                    warn!(
                        page,
                        error = %e,
                        "Error fetching repos, keeping {} collected so far",
                        repos.len()
                    );
                    break;
                }
                Err(e) => return Err(e),
            };

            let count = page_repos.len();
            repos.extend(page_repos.into_iter().map(RepositorySummary::from));

            if count < PER_PAGE {
                break;
            }
            page += 1;
        }

        info!(total = repos.len(), pages = page, "Fetched repositories");
        Ok(rank(repos, limit))
    }
}
