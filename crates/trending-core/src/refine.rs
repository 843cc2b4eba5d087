//! Client-side sort and filter over an already fetched result list

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Repository, SortBy};

/// Language filter value meaning "no filter"
pub const ALL_LANGUAGES: &str = "all";

/// User-controlled refinement parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefineOptions {
    pub sort_by: SortBy,
    /// Empty or `"all"` disables the language filter
    pub language: String,
    /// Case-insensitive substring of name or description
    pub search_term: String,
    pub min_stars: u64,
}

impl RefineOptions {
    fn matches(&self, repo: &Repository, term: &str) -> bool {
        let matches_language = if self.language.is_empty() || self.language == ALL_LANGUAGES {
            true
        } else {
            repo.language.to_lowercase() == self.language.to_lowercase()
        };

        let matches_search = term.is_empty()
            || repo.name.to_lowercase().contains(term)
            || repo.description.to_lowercase().contains(term);

        matches_language && matches_search && repo.stars >= self.min_stars
    }
}

/// Sort, then filter, returning a new list
///
/// Sorting is stable and always descending. The three filters are conjunctive.
pub fn refine(list: &[Repository], options: &RefineOptions) -> Vec<Repository> {
    let _span = tracing::debug_span!(
        "refine",
        total = list.len(),
        sort_by = ?options.sort_by
    )
    .entered();

    let mut sorted: Vec<&Repository> = list.iter().collect();
    match options.sort_by {
        SortBy::Stars => sorted.sort_by(|a, b| b.stars.cmp(&a.stars)),
        SortBy::Forks => sorted.sort_by(|a, b| b.forks.cmp(&a.forks)),
        SortBy::Updated => {
            sorted.sort_by_key(|repo| std::cmp::Reverse(parse_timestamp(&repo.updated_at)))
        }
    }

    let term = options.search_term.to_lowercase();
    let refined: Vec<Repository> = sorted
        .into_iter()
        .filter(|repo| options.matches(repo, &term))
        .cloned()
        .collect();

    tracing::debug!(visible = refined.len(), "refinement applied");
    refined
}

/// Distinct languages of `list` in order of first appearance
pub fn available_languages(list: &[Repository]) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();
    for repo in list {
        if !languages.contains(&repo.language) {
            languages.push(repo.language.clone());
        }
    }
    languages
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
///
/// Unparseable values yield `None`, which sorts after every real timestamp.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
