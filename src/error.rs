use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("GitHub API returned status {status}: {body}")]
    TransientFetch { status: u16, body: String },

    #[error("No repository markers found: {0}")]
    MissingMarkers(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Invalid marker pattern: {0}")]
    PatternError(#[from] regex::Error),
}

impl ProfileError {
    /// Errors that end pagination early instead of failing the whole fetch.
    pub fn is_transient(&self) -> bool {
        matches!(self, ProfileError::TransientFetch { .. } | ProfileError::NetworkError(_))
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
