//! Search orchestration and the state handed to the presentation layer

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{QueryParameters, Repository, SearchMode, SearchPage, SearchRequest};
use crate::query::build_query;
use crate::refine::available_languages;
use crate::traits::RepositorySearch;

type Clock = Box<dyn Fn() -> DateTime<Utc>>;

/// A dispatched search whose outcome has not been applied yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub params: QueryParameters,
    pub request: SearchRequest,
}

/// Owns the current parameters, result list and loading/error flags
///
/// Overlapping searches are not fenced: whichever outcome is applied last
/// overwrites the list and clears the loading flag, even if it was dispatched
/// first.
pub struct Explorer<S> {
    backend: S,
    clock: Clock,
    samples: Vec<Repository>,
    initial: QueryParameters,
    params: QueryParameters,
    repositories: Vec<Repository>,
    total_count: u64,
    loading: bool,
    error: Option<String>,
    activated: bool,
}

impl<S: RepositorySearch> Explorer<S> {
    /// Create an explorer over `backend`, showing `samples` while it holds no results
    pub fn new(backend: S, samples: Vec<Repository>) -> Self {
        Self {
            backend,
            clock: Box::new(Utc::now),
            samples,
            initial: QueryParameters::default(),
            params: QueryParameters::default(),
            repositories: Vec::new(),
            total_count: 0,
            loading: false,
            error: None,
            activated: false,
        }
    }

    /// Replace the clock used to compute the category cutoff date
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Parameters used by the search fired on activation
    pub fn with_initial_params(mut self, params: QueryParameters) -> Self {
        self.params = params.clone();
        self.initial = params;
        self
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-visible message of the last failed search
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether `visible` is currently falling back to the sample dataset
    pub fn showing_samples(&self) -> bool {
        self.repositories.is_empty() && !self.samples.is_empty()
    }

    /// Results to display: the current list, or the samples when it is empty
    pub fn visible(&self) -> &[Repository] {
        if self.repositories.is_empty() {
            &self.samples
        } else {
            &self.repositories
        }
    }

    /// Language choices offered for filtering, from the unfiltered visible list
    pub fn languages(&self) -> Vec<String> {
        available_languages(self.visible())
    }

    /// Fire the initial search. Only the first call dispatches; later calls return `None`.
    pub fn activate(&mut self) -> Option<Result<Vec<Repository>>> {
        if self.activated {
            return None;
        }
        self.activated = true;
        tracing::debug!("explorer activated");
        Some(self.search(self.initial.clone()))
    }

    /// Record `params`, raise the loading flag and build the outbound request
    pub fn begin_search(&mut self, params: QueryParameters) -> PendingSearch {
        let request = build_query(&params, (self.clock)());
        tracing::debug!(
            query = %request.query,
            per_page = request.per_page,
            mode = params.search_mode.as_str(),
            "dispatching search"
        );

        self.params = params.clone();
        self.loading = true;
        self.error = None;

        PendingSearch { params, request }
    }

    /// Apply the outcome of a dispatched search and lower the loading flag
    ///
    /// The parameters of the applied search become the current parameters.
    pub fn complete(
        &mut self,
        pending: PendingSearch,
        outcome: Result<SearchPage>,
    ) -> Result<Vec<Repository>> {
        self.loading = false;
        self.params = pending.params;

        match outcome {
            Ok(page) => {
                tracing::debug!(
                    query = %pending.request.query,
                    received = page.items.len(),
                    total_count = page.total_count,
                    "search completed"
                );
                self.repositories = page.items;
                self.total_count = page.total_count;
                self.error = None;
                Ok(self.repositories.clone())
            }
            Err(err) => {
                tracing::error!(
                    query = %pending.request.query,
                    error = %err,
                    "error fetching repositories"
                );
                self.repositories = Vec::new();
                self.total_count = 0;
                self.error = Some(err.user_message().to_string());
                Err(err)
            }
        }
    }

    /// Run one search to completion
    pub fn search(&mut self, params: QueryParameters) -> Result<Vec<Repository>> {
        let pending = self.begin_search(params);
        let outcome = self.backend.search_repositories(&pending.request);
        self.complete(pending, outcome)
    }

    /// Re-run the last search with unchanged parameters
    pub fn refresh(&mut self) -> Result<Vec<Repository>> {
        self.search(self.params.clone())
    }

    /// Force the top-stars parameters and search immediately
    pub fn switch_to_top_stars(&mut self) -> Result<Vec<Repository>> {
        self.search(QueryParameters::top_stars())
    }

    /// Change the search mode the way the mode selector does
    ///
    /// Selecting top-stars performs the forced transition and returns its
    /// outcome. Selecting category only updates the parameters.
    pub fn select_mode(&mut self, mode: SearchMode) -> Option<Result<Vec<Repository>>> {
        match mode {
            SearchMode::TopStars => Some(self.switch_to_top_stars()),
            SearchMode::Category => {
                self.params.search_mode = SearchMode::Category;
                None
            }
        }
    }
}
