//! Record store port.
//!
//! The catalogue service talks to storage only through [`MovieStore`].
//! Implementations do no validation of their own; they persist exactly what
//! they are given and decode whatever representation they use for "no
//! rating" back into `None` on every read.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::movie::Movie;
use crate::rating::Rating;

/// Raw storage failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique key (the movie title) already exists.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The backend was unreachable or rejected a statement.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;

/// Movies keyed by title, as returned from multi-record lookups.
pub type MovieMap = BTreeMap<String, Movie>;

/// Field-level access to persisted movies.
///
/// Lookups by exact title are case-sensitive. Mutations addressed by title
/// (`update_*`, `delete`) match titles case-insensitively, as does
/// `clear_director_where`.
#[async_trait]
pub trait MovieStore: Send + Sync {
    async fn find_all(&self) -> StoreResult<MovieMap>;

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Movie>>;

    /// `pattern` uses `*` or `%` wildcards and matches case-insensitively.
    async fn find_by_director_pattern(&self, pattern: &str) -> StoreResult<MovieMap>;

    async fn find_by_rating_at_least(&self, threshold: Rating) -> StoreResult<MovieMap>;

    async fn find_by_director_pattern_and_rating_at_least(
        &self,
        pattern: &str,
        threshold: Rating,
    ) -> StoreResult<MovieMap>;

    async fn insert(
        &self,
        title: &str,
        director: Option<&str>,
        rating: Option<Rating>,
    ) -> StoreResult<()>;

    async fn update_title(&self, current_title: &str, new_title: &str) -> StoreResult<()>;

    async fn update_director(&self, title: &str, director: Option<&str>) -> StoreResult<()>;

    async fn update_rating(&self, title: &str, rating: Option<Rating>) -> StoreResult<()>;

    async fn delete(&self, title: &str) -> StoreResult<()>;

    /// Clear the director on every movie directed by `director`. Returns the
    /// number of movies touched.
    async fn clear_director_where(&self, director: &str) -> StoreResult<u64>;

    /// Remove every movie.
    async fn drop_all(&self) -> StoreResult<()>;
}
