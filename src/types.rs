use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: Option<String>,
    pub html_url: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    pub owner: Option<GitHubOwner>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GitHubOwner {
    pub login: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}
