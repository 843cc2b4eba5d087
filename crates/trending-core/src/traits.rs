use crate::error::Result;
use crate::models::{SearchPage, SearchRequest};

/// A repository-hosting service that can answer search requests
///
/// Implementations issue exactly one request per call, map the raw items into
/// view models and classify failures. They never retry.
pub trait RepositorySearch {
    /// Run one search and return the mapped page of results
    fn search_repositories(&self, request: &SearchRequest) -> Result<SearchPage>;
}

impl<T: RepositorySearch + ?Sized> RepositorySearch for &T {
    fn search_repositories(&self, request: &SearchRequest) -> Result<SearchPage> {
        (**self).search_repositories(request)
    }
}
