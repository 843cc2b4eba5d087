//! Unit tests for GitHubClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GitHubClient;
    use crate::error::GitHubError;
    use trending_core::{
        Explorer, QueryParameters, RepositorySearch, SearchError, SearchRequest,
        error::{GENERIC_FAILURE_MESSAGE, RATE_LIMIT_MESSAGE},
    };
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to create a mock search item
    fn mock_github_repo(id: u64, name: &str, stars: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "full_name": format!("owner/{}", name),
            "description": format!("{} does things", name),
            "html_url": format!("https://github.com/owner/{}", name),
            "stargazers_count": stars,
            "forks_count": stars / 10,
            "watchers": stars,
            "language": "Rust",
            "created_at": "2024-03-01T10:30:00Z",
            "updated_at": "2024-03-10T12:00:00Z",
            "owner": {"login": "owner", "avatar_url": "https://avatars.githubusercontent.com/u/1"}
        })
    }

    fn rust_request() -> SearchRequest {
        SearchRequest {
            query: "rust created:>2024-02-14 stars:>1000".to_string(),
            sort: "stars",
            order: "desc",
            per_page: 5,
        }
    }

    #[tokio::test]
    async fn test_search_sends_query_parameters_and_accept_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("q", "rust created:>2024-02-14 stars:>1000"))
            .and(query_param("sort", "stars"))
            .and(query_param("order", "desc"))
            .and(query_param("per_page", "5"))
            .and(header("Accept", "application/vnd.github.v3+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_count": 2,
                "incomplete_results": false,
                "items": [
                    mock_github_repo(1, "fast-thing", 5000),
                    mock_github_repo(2, "slow-thing", 1200)
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.search_repositories(&rust_request()).unwrap();

        assert_eq!(result.total_count, 2);
        assert!(!result.incomplete_results);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].name, "fast-thing");
        assert_eq!(result.items[0].stargazers_count, 5000);
    }

    #[tokio::test]
    async fn test_trait_maps_items_to_view_models() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_count": 1,
                "items": [{
                    "id": 99,
                    "name": "quiet",
                    "full_name": "owner/quiet",
                    "description": null,
                    "html_url": "https://github.com/owner/quiet",
                    "stargazers_count": 42,
                    "forks_count": 1,
                    "language": null,
                    "created_at": "2024-03-01T10:30:00Z",
                    "updated_at": "2024-03-10T12:00:00Z",
                    "owner": {"login": "owner", "avatar_url": "https://avatars.githubusercontent.com/u/1"}
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let page = RepositorySearch::search_repositories(&client, &rust_request()).unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.items.len(), 1);
        let repo = &page.items[0];
        assert_eq!(repo.id, "99");
        assert_eq!(repo.description, "A trending repository with 42 stars");
        assert_eq!(repo.language, "Unknown");
        assert_eq!(repo.watchers, 0);
        assert_eq!(repo.readme_url, "https://github.com/owner/quiet/blob/main/README.md");
    }

    #[tokio::test]
    async fn test_forbidden_is_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "message": "API rate limit exceeded for 127.0.0.1."
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.search_repositories(&rust_request());

        assert!(matches!(result, Err(GitHubError::RateLimited)));
    }

    #[tokio::test]
    async fn test_server_error_reports_api_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "message": "Server Error"
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.search_repositories(&rust_request());

        match result {
            Err(GitHubError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Server Error");
            }
            other => panic!("expected API error, got {:?}", other.map(|r| r.total_count)),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_generic_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let err = RepositorySearch::search_repositories(&client, &rust_request()).unwrap_err();

        assert!(matches!(err, SearchError::Failed(_)));
    }

    #[tokio::test]
    async fn test_explorer_rate_limit_end_to_end() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let mut explorer = Explorer::new(&client, Vec::new());
        let result = explorer.search(QueryParameters::default());

        assert_eq!(result.unwrap_err(), SearchError::RateLimited);
        assert_eq!(explorer.error(), Some(RATE_LIMIT_MESSAGE));
        assert!(explorer.repositories().is_empty());
        assert!(!explorer.is_loading());
    }

    #[tokio::test]
    async fn test_explorer_server_error_end_to_end() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let mut explorer = Explorer::new(&client, Vec::new());
        let result = explorer.search(QueryParameters::default());

        assert!(result.is_err());
        assert_eq!(explorer.error(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(explorer.repositories().is_empty());
        assert!(!explorer.is_loading());
    }

    #[tokio::test]
    async fn test_top_stars_transition_requests_ten() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .and(query_param("q", "stars:>10000"))
            .and(query_param("per_page", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_count": 1,
                "items": [mock_github_repo(5, "giant", 250_000)]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let mut explorer = Explorer::new(&client, Vec::new());
        let repos = explorer.switch_to_top_stars().unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].stars, 250_000);
    }

    #[tokio::test]
    async fn test_incomplete_results_flag_is_kept() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/repositories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total_count": 4000,
                "incomplete_results": true,
                "items": [mock_github_repo(8, "partial", 10)]
            })))
            .mount(&mock_server)
            .await;

        let client = GitHubClient::with_base_url(&mock_server.uri());
        let result = client.search_repositories(&rust_request()).unwrap();

        assert!(result.incomplete_results);
        assert_eq!(result.total_count, 4000);
    }

    #[test]
    fn test_search_url_encodes_query() {
        let client = GitHubClient::with_base_url("https://example.test/");
        assert_eq!(client.base_url(), "https://example.test");
        let url = client.search_url(&rust_request());

        assert_eq!(
            url,
            "https://example.test/search/repositories?q=rust%20created%3A%3E2024-02-14%20stars%3A%3E1000&sort=stars&order=desc&per_page=5"
        );
    }
}
