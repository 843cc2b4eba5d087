use serde::{Deserialize, Serialize};

/// Repository id as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum GitHubRepositoryId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for GitHubRepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitHubRepositoryId::Number(n) => write!(f, "{}", n),
            GitHubRepositoryId::Text(s) => f.write_str(s),
        }
    }
}

/// GitHub repository owner (minimal representation)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubOwner {
    pub login: String,
    pub avatar_url: String,
}

/// Repository item of a search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepository {
    pub id: GitHubRepositoryId,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    #[serde(default)]
    pub watchers: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub owner: GitHubOwner,
}

/// GitHub repository search result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubSearchResult {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<GitHubRepository>,
}
