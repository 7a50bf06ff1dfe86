//! Catalogue business rules.
//!
//! [`CatalogueService`] validates and truncates ratings, turns store lookups
//! into [`Catalogue`] values, issues only the writes an edit actually needs,
//! and runs bulk director assignment as validate-then-apply so a single
//! unknown title aborts the whole request before anything is written.
//!
//! No operation here holds a lock or wraps its writes in a transaction.
//! Concurrent edits race at the store and the last write wins; a storage
//! failure part-way through an edit or a bulk assignment leaves the writes
//! issued so far in place and is reported as [`CoreError::Storage`].

use std::sync::Arc;

use crate::error::CoreError;
use crate::movie::{Catalogue, DirectorAssignment, Movie, MovieEdit, NewMovie};
use crate::rating::Rating;
use crate::store::{MovieStore, StoreError};

/// Convenience alias for service results.
pub type CoreResult<T> = Result<T, CoreError>;

/// Domain entry point for every catalogue read and mutation.
#[derive(Clone)]
pub struct CatalogueService {
    store: Arc<dyn MovieStore>,
}

impl std::fmt::Debug for CatalogueService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogueService").finish_non_exhaustive()
    }
}

impl CatalogueService {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Every movie in the catalogue.
    pub async fn get_catalogue(&self) -> CoreResult<Catalogue> {
        Ok(self.store.find_all().await?.into())
    }

    /// The movie filed under exactly `title`, or an empty catalogue.
    pub async fn get_by_title(&self, title: &str) -> CoreResult<Catalogue> {
        let movie = self.store.find_by_title(title).await?;
        Ok(movie
            .map(|movie| (title.to_string(), movie))
            .into_iter()
            .collect())
    }

    /// Movies whose director matches `pattern` (`*`/`%` wildcards,
    /// case-insensitive).
    pub async fn get_by_director(&self, pattern: &str) -> CoreResult<Catalogue> {
        Ok(self.store.find_by_director_pattern(pattern).await?.into())
    }

    /// Movies rated at or above `rating` after truncation. Unrated movies
    /// never match.
    pub async fn get_above_rating(&self, rating: f32) -> CoreResult<Catalogue> {
        let threshold = Rating::new(rating)?;
        Ok(self.store.find_by_rating_at_least(threshold).await?.into())
    }

    /// Intersection of [`get_by_director`](Self::get_by_director) and
    /// [`get_above_rating`](Self::get_above_rating).
    pub async fn get_by_director_above_rating(
        &self,
        pattern: &str,
        rating: f32,
    ) -> CoreResult<Catalogue> {
        let threshold = Rating::new(rating)?;
        Ok(self
            .store
            .find_by_director_pattern_and_rating_at_least(pattern, threshold)
            .await?
            .into())
    }

    // -----------------------------------------------------------------------
    // Single-movie mutations
    // -----------------------------------------------------------------------

    /// Add a new movie and return it as stored. A missing rating is stored
    /// as "no rating".
    pub async fn add_movie(&self, movie: NewMovie) -> CoreResult<Catalogue> {
        let title = movie
            .title
            .filter(|title| !title.trim().is_empty())
            .ok_or(CoreError::MissingTitle)?;
        let rating = movie.rating.map(Rating::new).transpose()?;

        match self
            .store
            .insert(&title, movie.director.as_deref(), rating)
            .await
        {
            Ok(()) => tracing::info!(title = %title, "Movie added"),
            Err(StoreError::DuplicateKey(_)) => return Err(CoreError::DuplicateTitle(title)),
            Err(err) => return Err(err.into()),
        }

        self.get_by_title(&title).await
    }

    /// Apply a partial edit to the movie filed under `title`.
    ///
    /// All input is validated before the first write. Each field is then
    /// written only when it differs from what is stored, in the order
    /// rating, director, title. The rename goes last so the earlier writes
    /// can still address the movie by its current title.
    pub async fn edit_movie(&self, title: &str, edit: MovieEdit) -> CoreResult<()> {
        let current = self.require_movie(title).await?;

        let rating = edit.rating.map(Rating::new).transpose()?;
        if edit
            .title
            .as_deref()
            .is_some_and(|new_title| new_title.trim().is_empty())
        {
            return Err(CoreError::MissingTitle);
        }

        if let Some(rating) = rating {
            if current.rating == Some(rating) {
                tracing::debug!(title, %rating, "Rating unchanged, skipping write");
            } else {
                self.store.update_rating(title, Some(rating)).await?;
                tracing::info!(title, %rating, "Movie rating updated");
            }
        }

        if let Some(director) = edit.director.as_deref() {
            if current.director.as_deref() == Some(director) {
                tracing::debug!(title, director, "Director unchanged, skipping write");
            } else {
                self.store.update_director(title, Some(director)).await?;
                tracing::info!(title, director, "Movie director updated");
            }
        }

        if let Some(new_title) = edit.title.as_deref() {
            if new_title != title {
                match self.store.update_title(title, new_title).await {
                    Ok(()) => tracing::info!(title, new_title, "Movie renamed"),
                    Err(StoreError::DuplicateKey(_)) => {
                        return Err(CoreError::DuplicateTitle(new_title.to_string()));
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }

        Ok(())
    }

    /// Remove the director from one movie. No write if it has none.
    pub async fn delete_director_from_movie(&self, title: &str) -> CoreResult<()> {
        let current = self.require_movie(title).await?;

        if current.director.is_some() {
            self.store.update_director(title, None).await?;
            tracing::info!(title, "Director removed from movie");
        }
        Ok(())
    }

    /// Remove the rating from one movie. No write if it has none.
    pub async fn delete_rating_from_movie(&self, title: &str) -> CoreResult<()> {
        let current = self.require_movie(title).await?;

        if current.rating.is_some() {
            self.store.update_rating(title, None).await?;
            tracing::info!(title, "Rating removed from movie");
        }
        Ok(())
    }

    pub async fn delete_movie(&self, title: &str) -> CoreResult<()> {
        self.require_movie(title).await?;
        self.store.delete(title).await?;
        tracing::info!(title, "Movie deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Bulk mutations
    // -----------------------------------------------------------------------

    /// Clear `director` from every movie it is set on (case-insensitive).
    ///
    /// Matching nothing is not an error. Returns the number of movies
    /// touched.
    pub async fn delete_director(&self, director: &str) -> CoreResult<u64> {
        let cleared = self.store.clear_director_where(director).await?;
        tracing::info!(director, cleared, "Director removed from catalogue");
        Ok(cleared)
    }

    /// Set one director on every listed movie, or on none of them.
    ///
    /// Every title is confirmed to exist before the first write; an unknown
    /// title fails the request with [`CoreError::UnknownTitle`] and nothing
    /// is written. Nothing is locked between the two phases, so a movie
    /// deleted concurrently after validation is silently skipped by the
    /// store.
    pub async fn add_director_bulk(&self, assignment: DirectorAssignment) -> CoreResult<()> {
        let name = assignment
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(CoreError::MissingDirector)?;
        let titles = assignment
            .movies
            .filter(|movies| !movies.is_empty())
            .ok_or(CoreError::EmptyTitleList)?;

        for title in &titles {
            if self.store.find_by_title(title).await?.is_none() {
                return Err(CoreError::UnknownTitle(title.clone()));
            }
        }

        for title in &titles {
            self.store.update_director(title, Some(name.as_str())).await?;
        }

        tracing::info!(
            director = %name,
            count = titles.len(),
            "Director assigned to movies",
        );
        Ok(())
    }

    /// Drop every movie from the catalogue.
    pub async fn clear_catalogue(&self) -> CoreResult<()> {
        self.store.drop_all().await?;
        tracing::info!("Catalogue cleared");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn require_movie(&self, title: &str) -> CoreResult<Movie> {
        self.store
            .find_by_title(title)
            .await?
            .ok_or_else(|| CoreError::NotFound(title.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
