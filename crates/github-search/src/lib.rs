pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;

#[cfg(test)]
mod client_tests;

pub use client::{DEFAULT_API_URL, GitHubClient};
pub use error::{GitHubError, Result};
pub use models::*;

// Re-export trending-core types for convenience
pub use trending_core::{RepositorySearch, SearchError};
