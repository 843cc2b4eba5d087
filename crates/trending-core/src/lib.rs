pub mod error;
pub mod explorer;
pub mod models;
pub mod query;
pub mod refine;
pub mod samples;
pub mod traits;

pub use error::{Result, SearchError};
pub use explorer::{Explorer, PendingSearch};
pub use models::*;
pub use query::{build_query, cutoff_date};
pub use refine::{available_languages, refine, RefineOptions};
pub use samples::sample_repositories;
pub use traits::RepositorySearch;
