use ureq::Agent;

use trending_core::SearchRequest;

use crate::error::{GitHubError, Result};
use crate::models::*;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type selecting the v3 REST API
const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// GitHub repository search client
///
/// Anonymous: no token is sent, so the unauthenticated search quota applies.
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    user_agent: String,
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubClient {
    /// Create a new client targeting api.github.com
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Create a new client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: format!("trending/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the repository search endpoint for `request`
    pub fn search_url(&self, request: &SearchRequest) -> String {
        format!(
            "{}/search/repositories?q={}&sort={}&order={}&per_page={}",
            self.base_url,
            urlencoding::encode(&request.query),
            request.sort,
            request.order,
            request.per_page
        )
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Search quota exhaustion is reported as 403 (or 429 for secondary limits)
        if status == 403 || status == 429 {
            return Err(GitHubError::RateLimited);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        Err(GitHubError::Api { status, message })
    }

    /// Search repositories with a single GET request
    pub fn search_repositories(&self, request: &SearchRequest) -> Result<GitHubSearchResult> {
        let url = self.search_url(request);
        tracing::debug!(%url, "searching repositories");

        let response = self
            .agent
            .get(&url)
            .header("Accept", ACCEPT_V3)
            .header("User-Agent", &self.user_agent)
            .call()
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;
        let result: GitHubSearchResult = response.body_mut().read_json()?;
        if result.incomplete_results {
            tracing::warn!(
                total_count = result.total_count,
                "search timed out upstream, results are incomplete"
            );
        }
        Ok(result)
    }
}
