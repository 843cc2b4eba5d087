//! Model conversions from GitHub types to trending-core view models

use trending_core::{Owner, Repository, SearchPage, UNKNOWN_LANGUAGE};

use crate::models::*;

impl From<GitHubRepository> for Repository {
    fn from(repo: GitHubRepository) -> Self {
        let description = repo
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| Repository::fallback_description(repo.stargazers_count));

        Self {
            id: repo.id.to_string(),
            name: repo.name,
            description,
            readme_url: Repository::readme_url_for(&repo.html_url),
            url: repo.html_url,
            owner: Owner {
                login: repo.owner.login,
                avatar_url: repo.owner.avatar_url,
            },
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            watchers: repo.watchers.unwrap_or(0),
            language: repo
                .language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            created_at: repo.created_at,
            updated_at: repo.updated_at,
        }
    }
}

impl From<GitHubSearchResult> for SearchPage {
    fn from(result: GitHubSearchResult) -> Self {
        Self {
            total_count: result.total_count,
            items: result.items.into_iter().map(Repository::from).collect(),
        }
    }
}
