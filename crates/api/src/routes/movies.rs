//! Route definitions for the movie catalogue, mounted at `/movies`.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// ```text
/// GET    /                          -> list_movies
/// POST   /                          -> add_movie
/// DELETE /                          -> clear_catalogue
/// POST   /directors                 -> assign_director
/// DELETE /directors/{director}      -> delete_director
/// PATCH  /{title}                   -> edit_movie
/// DELETE /{title}                   -> delete_movie
/// DELETE /{title}/director          -> delete_director_from_movie
/// DELETE /{title}/rating            -> delete_rating_from_movie
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(movies::list_movies)
                .post(movies::add_movie)
                .delete(movies::clear_catalogue),
        )
        .route("/directors", post(movies::assign_director))
        .route("/directors/{director}", delete(movies::delete_director))
        .route(
            "/{title}",
            patch(movies::edit_movie).delete(movies::delete_movie),
        )
        .route(
            "/{title}/director",
            delete(movies::delete_director_from_movie),
        )
        .route("/{title}/rating", delete(movies::delete_rating_from_movie))
}
