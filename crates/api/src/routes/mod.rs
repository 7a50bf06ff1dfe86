pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                                  list (GET), add (POST), clear (DELETE)
/// /movies/directors                        assign director to movies (POST)
/// /movies/directors/{director}             remove director everywhere (DELETE)
/// /movies/{title}                          edit (PATCH), delete (DELETE)
/// /movies/{title}/director                 remove director (DELETE)
/// /movies/{title}/rating                   remove rating (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/movies", movies::router())
}
