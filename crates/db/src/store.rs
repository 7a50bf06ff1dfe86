//! [`MovieStore`] implementation backed by PostgreSQL.

use async_trait::async_trait;
use moviecat_core::director;
use moviecat_core::movie::Movie;
use moviecat_core::rating::Rating;
use moviecat_core::store::{MovieMap, MovieStore, StoreError, StoreResult};

use crate::models::movie::MovieRow;
use crate::rating_codec;
use crate::repositories::MovieRepo;
use crate::DbPool;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Adapts [`MovieRepo`] to the catalogue's record store port.
///
/// Encodes ratings on the way in, decodes them on the way out, and
/// translates `*` wildcards before they reach SQL.
#[derive(Debug, Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn find_all(&self) -> StoreResult<MovieMap> {
        let rows = MovieRepo::list_all(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(into_map(rows))
    }

    async fn find_by_title(&self, title: &str) -> StoreResult<Option<Movie>> {
        let row = MovieRepo::find_by_title(&self.pool, title)
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.map(|row| row.into_entry().1))
    }

    async fn find_by_director_pattern(&self, pattern: &str) -> StoreResult<MovieMap> {
        let like = director::to_like_pattern(pattern);
        let rows = MovieRepo::find_by_director_like(&self.pool, &like)
            .await
            .map_err(map_sqlx_error)?;
        Ok(into_map(rows))
    }

    async fn find_by_rating_at_least(&self, threshold: Rating) -> StoreResult<MovieMap> {
        let rows = MovieRepo::find_by_min_rating(&self.pool, rating_codec::encode(Some(threshold)))
            .await
            .map_err(map_sqlx_error)?;
        Ok(into_map(rows))
    }

    async fn find_by_director_pattern_and_rating_at_least(
        &self,
        pattern: &str,
        threshold: Rating,
    ) -> StoreResult<MovieMap> {
        let like = director::to_like_pattern(pattern);
        let rows = MovieRepo::find_by_director_like_and_min_rating(
            &self.pool,
            &like,
            rating_codec::encode(Some(threshold)),
        )
        .await
        .map_err(map_sqlx_error)?;
        Ok(into_map(rows))
    }

    async fn insert(
        &self,
        title: &str,
        director: Option<&str>,
        rating: Option<Rating>,
    ) -> StoreResult<()> {
        MovieRepo::insert(&self.pool, title, director, rating_codec::encode(rating))
            .await
            .map_err(map_sqlx_error)
    }

    async fn update_title(&self, current_title: &str, new_title: &str) -> StoreResult<()> {
        let updated = MovieRepo::update_title(&self.pool, current_title, new_title)
            .await
            .map_err(map_sqlx_error)?;
        log_if_untouched(updated, current_title, "update_title");
        Ok(())
    }

    async fn update_director(&self, title: &str, director: Option<&str>) -> StoreResult<()> {
        let updated = MovieRepo::update_director(&self.pool, title, director)
            .await
            .map_err(map_sqlx_error)?;
        log_if_untouched(updated, title, "update_director");
        Ok(())
    }

    async fn update_rating(&self, title: &str, rating: Option<Rating>) -> StoreResult<()> {
        let updated = MovieRepo::update_rating(&self.pool, title, rating_codec::encode(rating))
            .await
            .map_err(map_sqlx_error)?;
        log_if_untouched(updated, title, "update_rating");
        Ok(())
    }

    async fn delete(&self, title: &str) -> StoreResult<()> {
        let deleted = MovieRepo::delete(&self.pool, title)
            .await
            .map_err(map_sqlx_error)?;
        log_if_untouched(u64::from(deleted), title, "delete");
        Ok(())
    }

    async fn clear_director_where(&self, director: &str) -> StoreResult<u64> {
        MovieRepo::clear_director(&self.pool, director)
            .await
            .map_err(map_sqlx_error)
    }

    async fn drop_all(&self) -> StoreResult<()> {
        let removed = MovieRepo::delete_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        tracing::debug!(removed, "Movies table emptied");
        Ok(())
    }
}

fn into_map(rows: Vec<MovieRow>) -> MovieMap {
    rows.into_iter().map(MovieRow::into_entry).collect()
}

/// A write that matched no row is not an error (the movie may have been
/// deleted concurrently), but it is worth a trace.
fn log_if_untouched(rows: u64, title: &str, operation: &'static str) {
    if rows == 0 {
        tracing::debug!(title, operation, "Write matched no movie");
    }
}

/// Classify a sqlx error into a [`StoreError`].
///
/// Unique violations (code `23505`) become [`StoreError::DuplicateKey`]
/// carrying the violated constraint name; everything else is a backend
/// failure.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            return StoreError::DuplicateKey(constraint);
        }
    }
    StoreError::backend(err)
}
