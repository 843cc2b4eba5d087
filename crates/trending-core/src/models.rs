use serde::{Deserialize, Serialize};

/// Smallest page size a category search may request
pub const MIN_COUNT: u32 = 5;
/// Largest page size a category search may request
pub const MAX_COUNT: u32 = 25;
/// Page size used by top-stars searches
pub const TOP_STARS_COUNT: u32 = 10;
/// Star floor applied by top-stars searches unless one is given explicitly
pub const TOP_STARS_MIN_STARS: u64 = 10_000;
/// Category recorded in the parameters while in top-stars mode
pub const TOP_STARS_CATEGORY: &str = "top-stars";

pub const DEFAULT_CATEGORY: &str = "AI";
pub const DEFAULT_COUNT: u32 = MIN_COUNT;

/// Language recorded when the upstream repository reports none
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Repository as shown to the user, decoupled from the raw API shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Opaque identifier, unique within one result set
    pub id: String,
    pub name: String,
    pub description: String,
    /// Canonical web address
    pub url: String,
    pub owner: Owner,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub language: String,
    /// ISO-8601 creation timestamp
    pub created_at: String,
    /// ISO-8601 last update timestamp
    pub updated_at: String,
    pub readme_url: String,
}

impl Repository {
    /// Fallback description for repositories that have none upstream
    pub fn fallback_description(stars: u64) -> String {
        format!("A trending repository with {} stars", stars)
    }

    /// Readme link derived from the repository URL
    pub fn readme_url_for(url: &str) -> String {
        format!("{}/blob/main/README.md", url.trim_end_matches('/'))
    }
}

/// Repository owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: String,
}

/// Which search variant to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Free-text category over repositories created in the last 30 days
    #[default]
    Category,
    /// Most starred repositories overall
    TopStars,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Category => "category",
            SearchMode::TopStars => "top-stars",
        }
    }
}

/// User-supplied search parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub category: String,
    /// Requested page size (5-25)
    pub count: u32,
    pub search_mode: SearchMode,
    pub min_stars: u64,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            count: DEFAULT_COUNT,
            search_mode: SearchMode::Category,
            min_stars: 0,
        }
    }
}

impl QueryParameters {
    /// Category-mode parameters with the count clamped to the allowed range
    pub fn category(category: &str, count: u32, min_stars: u64) -> Self {
        Self {
            category: category.to_string(),
            count: clamp_count(count),
            search_mode: SearchMode::Category,
            min_stars,
        }
    }

    /// The forced parameters of the top-stars mode transition
    pub fn top_stars() -> Self {
        Self {
            category: TOP_STARS_CATEGORY.to_string(),
            count: TOP_STARS_COUNT,
            search_mode: SearchMode::TopStars,
            min_stars: TOP_STARS_MIN_STARS,
        }
    }
}

/// Clamp a requested page size into `MIN_COUNT..=MAX_COUNT`
pub fn clamp_count(count: u32) -> u32 {
    count.clamp(MIN_COUNT, MAX_COUNT)
}

/// Outbound request for the repository search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub sort: &'static str,
    pub order: &'static str,
    pub per_page: u32,
}

/// One page of search results, already mapped to view models
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchPage {
    pub total_count: u64,
    pub items: Vec<Repository>,
}

/// Client-side ordering applied by the refiner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Stars,
    Forks,
    /// Most recently updated first
    Updated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_match_initial_search() {
        let params = QueryParameters::default();
        assert_eq!(params.category, "AI");
        assert_eq!(params.count, 5);
        assert_eq!(params.search_mode, SearchMode::Category);
        assert_eq!(params.min_stars, 0);
    }

    #[test]
    fn category_parameters_clamp_count() {
        assert_eq!(QueryParameters::category("rust", 1, 0).count, 5);
        assert_eq!(QueryParameters::category("rust", 100, 0).count, 25);
        assert_eq!(QueryParameters::category("rust", 15, 0).count, 15);
    }

    #[test]
    fn readme_url_points_at_main_branch() {
        assert_eq!(
            Repository::readme_url_for("https://github.com/rust-lang/rust"),
            "https://github.com/rust-lang/rust/blob/main/README.md"
        );
    }

    #[test]
    fn search_mode_serializes_kebab_case() {
        let json = serde_json::to_string(&SearchMode::TopStars).unwrap();
        assert_eq!(json, "\"top-stars\"");
    }
}
