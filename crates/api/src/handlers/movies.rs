//! Handlers for the movie catalogue.
//!
//! Lookups return the matching catalogue wrapped in [`DataResponse`];
//! mutations return `204 No Content`, except movie creation which answers
//! `201 Created` with the stored movie.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use moviecat_core::movie::{DirectorAssignment, MovieEdit, NewMovie};

use crate::error::AppResult;
use crate::query::{MovieFilter, MovieQueryParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// GET /api/v1/movies
///
/// Full catalogue, or the subset selected by `title`, `director` (with `*`
/// wildcards) and/or a minimum `rating`.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieQueryParams>,
) -> AppResult<impl IntoResponse> {
    let catalogue = &state.catalogue;

    let movies = match params.into_filter()? {
        MovieFilter::All => catalogue.get_catalogue().await?,
        MovieFilter::Title(title) => catalogue.get_by_title(&title).await?,
        MovieFilter::Director(pattern) => catalogue.get_by_director(&pattern).await?,
        MovieFilter::MinRating(rating) => catalogue.get_above_rating(rating).await?,
        MovieFilter::DirectorAndMinRating(pattern, rating) => {
            catalogue
                .get_by_director_above_rating(&pattern, rating)
                .await?
        }
    };

    Ok(Json(DataResponse { data: movies }))
}

// ---------------------------------------------------------------------------
// Single-movie mutations
// ---------------------------------------------------------------------------

/// POST /api/v1/movies
pub async fn add_movie(
    State(state): State<AppState>,
    Json(input): Json<NewMovie>,
) -> AppResult<impl IntoResponse> {
    let created = state.catalogue.add_movie(input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PATCH /api/v1/movies/{title}
///
/// Only the fields present in the body are written, and only when they
/// differ from the stored values.
pub async fn edit_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(input): Json<MovieEdit>,
) -> AppResult<impl IntoResponse> {
    state.catalogue.edit_movie(&title, input).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/movies/{title}
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.catalogue.delete_movie(&title).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/movies/{title}/director
pub async fn delete_director_from_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.catalogue.delete_director_from_movie(&title).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/movies/{title}/rating
pub async fn delete_rating_from_movie(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.catalogue.delete_rating_from_movie(&title).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Bulk mutations
// ---------------------------------------------------------------------------

/// DELETE /api/v1/movies
///
/// Remove every movie from the catalogue.
pub async fn clear_catalogue(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.catalogue.clear_catalogue().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/movies/directors
///
/// Assign one director to every listed movie. An unknown title rejects the
/// whole request and nothing is written.
pub async fn assign_director(
    State(state): State<AppState>,
    Json(input): Json<DirectorAssignment>,
) -> AppResult<impl IntoResponse> {
    state.catalogue.add_director_bulk(input).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/movies/directors/{director}
///
/// Clear the director from every movie it is set on. Matching nothing is
/// still a success.
pub async fn delete_director(
    State(state): State<AppState>,
    Path(director): Path<String>,
) -> AppResult<impl IntoResponse> {
    let cleared = state.catalogue.delete_director(&director).await?;
    tracing::debug!(director = %director, cleared, "Director cleared via API");

    Ok(StatusCode::NO_CONTENT)
}
