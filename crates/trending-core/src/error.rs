use thiserror::Error;

/// User-visible text for quota exhaustion
pub const RATE_LIMIT_MESSAGE: &str = "GitHub API rate limit exceeded. Please try again later.";

/// User-visible text for every other failure
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch repositories. Please try again.";

/// Errors a search backend can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Rate limited")]
    RateLimited,

    #[error("Search failed: {0}")]
    Failed(String),
}

impl SearchError {
    /// The only form of the error that reaches the presentation layer
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::RateLimited => RATE_LIMIT_MESSAGE,
            SearchError::Failed(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
