//! Implementation of trending-core traits for GitHubClient

use trending_core::{RepositorySearch, Result, SearchError, SearchPage, SearchRequest};

use crate::client::GitHubClient;

impl RepositorySearch for GitHubClient {
    fn search_repositories(&self, request: &SearchRequest) -> Result<SearchPage> {
        let result = self
            .search_repositories(request)
            .map_err(SearchError::from)?;
        Ok(SearchPage::from(result))
    }
}
