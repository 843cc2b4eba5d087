use thiserror::Error;
use trending_core::SearchError;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for SearchError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::RateLimited => SearchError::RateLimited,
            other => SearchError::Failed(other.to_string()),
        }
    }
}
