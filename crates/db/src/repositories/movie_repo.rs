//! Repository for the `movies` table.
//!
//! Plain field-level reads and writes. Ratings arrive and leave already
//! sentinel-encoded; no business rules live here.
//!
//! Lookup by exact title is case-sensitive. Every statement that mutates a
//! movie addressed by title matches with `LOWER(title) = LOWER($n)`.

use sqlx::PgPool;

use crate::models::movie::MovieRow;

/// Column list for `movies` queries.
const COLUMNS: &str = "title, director, rating";

/// Provides query and update operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// List every movie, ordered by title.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY title");
        sqlx::query_as::<_, MovieRow>(&query).fetch_all(pool).await
    }

    /// Find a movie by its exact (case-sensitive) title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<MovieRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE title = $1");
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Movies whose director matches a SQL `LIKE` pattern, case-insensitively.
    pub async fn find_by_director_like(
        pool: &PgPool,
        like_pattern: &str,
    ) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE LOWER(director) LIKE LOWER($1) \
             ORDER BY title"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(like_pattern)
            .fetch_all(pool)
            .await
    }

    /// Movies whose stored rating is at least `min_rating`.
    pub async fn find_by_min_rating(
        pool: &PgPool,
        min_rating: f32,
    ) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE rating >= $1 \
             ORDER BY title"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(min_rating)
            .fetch_all(pool)
            .await
    }

    /// Movies matching a director `LIKE` pattern with rating at least `min_rating`.
    pub async fn find_by_director_like_and_min_rating(
        pool: &PgPool,
        like_pattern: &str,
        min_rating: f32,
    ) -> Result<Vec<MovieRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM movies \
             WHERE LOWER(director) LIKE LOWER($1) AND rating >= $2 \
             ORDER BY title"
        );
        sqlx::query_as::<_, MovieRow>(&query)
            .bind(like_pattern)
            .bind(min_rating)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert a new movie. Fails with a unique violation if the title exists.
    pub async fn insert(
        pool: &PgPool,
        title: &str,
        director: Option<&str>,
        rating: f32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO movies (title, director, rating) VALUES ($1, $2, $3)")
            .bind(title)
            .bind(director)
            .bind(rating)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Rename a movie. Returns the number of rows updated.
    pub async fn update_title(
        pool: &PgPool,
        current_title: &str,
        new_title: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE movies SET title = $1 WHERE LOWER(title) = LOWER($2)")
            .bind(new_title)
            .bind(current_title)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Set or clear (`None`) a movie's director. Returns the number of rows updated.
    pub async fn update_director(
        pool: &PgPool,
        title: &str,
        director: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE movies SET director = $1 WHERE LOWER(title) = LOWER($2)")
                .bind(director)
                .bind(title)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Overwrite a movie's stored rating. Returns the number of rows updated.
    pub async fn update_rating(pool: &PgPool, title: &str, rating: f32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE movies SET rating = $1 WHERE LOWER(title) = LOWER($2)")
            .bind(rating)
            .bind(title)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a movie. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, title: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE LOWER(title) = LOWER($1)")
            .bind(title)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Clear the director on every movie directed by `director`
    /// (case-insensitive). Returns the number of rows updated.
    pub async fn clear_director(pool: &PgPool, director: &str) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE movies SET director = NULL WHERE LOWER(director) = LOWER($1)")
                .bind(director)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Delete every movie. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
