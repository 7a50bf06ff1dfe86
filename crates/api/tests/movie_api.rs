//! Integration tests for the `/api/v1/movies` endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, delete, get, patch_json, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Seed the catalogue through the API.
async fn seed(app: &Router) {
    for movie in [
        json!({"title": "Hot Fuzz", "director": "Edgar Wright", "rating": 4.9}),
        json!({"title": "Baby Driver", "director": "Edgar Wright", "rating": 3.8}),
        json!({"title": "Snatch", "director": "Guy Ritchie", "rating": 4.5}),
        json!({"title": "Untitled Draft"}),
    ] {
        let response = post_json(app.clone(), "/api/v1/movies", movie).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

async fn movies(app: &Router, uri: &str) -> serde_json::Value {
    let response = get(app.clone(), uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["movies"].clone()
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_catalogue_lists_no_movies(pool: PgPool) {
    let app = common::build_test_app(pool);

    let list = movies(&app, "/api/v1/movies").await;
    assert_eq!(list, json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn full_catalogue_omits_absent_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let list = movies(&app, "/api/v1/movies").await;
    assert_eq!(list.as_object().unwrap().len(), 4);
    assert_eq!(list["Hot Fuzz"]["director"], "Edgar Wright");
    assert_eq!(list["Hot Fuzz"]["rating"], 4.9);
    assert_eq!(list["Untitled Draft"], json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_by_title(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let list = movies(&app, "/api/v1/movies?title=Snatch").await;
    assert_eq!(list, json!({"Snatch": {"director": "Guy Ritchie", "rating": 4.5}}));

    let missing = movies(&app, "/api/v1/movies?title=Nothing").await;
    assert_eq!(missing, json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn title_parameter_wins_over_filters(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let list = movies(&app, "/api/v1/movies?title=Snatch&director=edgar*&rating=4.0").await;
    assert_eq!(list.as_object().unwrap().len(), 1);
    assert!(list.get("Snatch").is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_by_director_pattern(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let list = movies(&app, "/api/v1/movies?director=edgar*").await;
    let titles: Vec<_> = list.as_object().unwrap().keys().cloned().collect();
    assert_eq!(titles, vec!["Baby Driver", "Hot Fuzz"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lookup_by_minimum_rating_excludes_unrated(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let list = movies(&app, "/api/v1/movies?rating=0").await;
    assert_eq!(list.as_object().unwrap().len(), 3);
    assert!(list.get("Untitled Draft").is_none());

    let high = movies(&app, "/api/v1/movies?rating=4.5").await;
    let titles: Vec<_> = high.as_object().unwrap().keys().cloned().collect();
    assert_eq!(titles, vec!["Hot Fuzz", "Snatch"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn director_and_rating_intersect(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let list = movies(&app, "/api/v1/movies?director=Edgar*&rating=4.0").await;
    let titles: Vec<_> = list.as_object().unwrap().keys().cloned().collect();
    assert_eq!(titles, vec!["Hot Fuzz"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_rating_filter_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/movies?rating=high").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");

    let response = get(app, "/api/v1/movies?rating=6").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_RATING");
}

// ---------------------------------------------------------------------------
// Adding movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_movie_returns_created_movie_with_truncated_rating(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/movies",
        json!({"title": "Hot Fuzz", "director": "Edgar Wright", "rating": 4.99999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["movies"],
        json!({"Hot Fuzz": {"director": "Edgar Wright", "rating": 4.9}})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_movie_rejects_bad_input(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/movies", json!({"director": "Nobody"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_TITLE");

    let response = post_json(
        app.clone(),
        "/api/v1/movies",
        json!({"title": null, "director": "Nobody"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "MISSING_TITLE");

    let response = post_json(
        app.clone(),
        "/api/v1/movies",
        json!({"title": "Too Good", "rating": 5.1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_RATING");

    assert_eq!(movies(&app, "/api/v1/movies").await, json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn add_duplicate_title_conflicts(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = post_json(app.clone(), "/api/v1/movies", json!({"title": "Hot Fuzz"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json(app, "/api/v1/movies", json!({"title": "hot fuzz"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Editing and deleting single movies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_movie_updates_fields_and_renames(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = patch_json(
        app.clone(),
        "/api/v1/movies/Hot%20Fuzz",
        json!({"title": "Hot Fuzz (2007)", "rating": 4.25, "director": "E. Wright"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = movies(&app, "/api/v1/movies").await;
    assert!(list.get("Hot Fuzz").is_none());
    assert_eq!(
        list["Hot Fuzz (2007)"],
        json!({"director": "E. Wright", "rating": 4.2})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn edit_movie_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = patch_json(app.clone(), "/api/v1/movies/Nothing", json!({"rating": 3.0})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = patch_json(app.clone(), "/api/v1/movies/Snatch", json!({"rating": -0.5})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = patch_json(
        app.clone(),
        "/api/v1/movies/Snatch",
        json!({"title": "Hot Fuzz"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let list = movies(&app, "/api/v1/movies?title=Snatch").await;
    assert_eq!(list["Snatch"]["rating"], 4.5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_movie(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = delete(app.clone(), "/api/v1/movies/Snatch").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(movies(&app, "/api/v1/movies").await.get("Snatch").is_none());

    let response = delete(app, "/api/v1/movies/Snatch").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_director_and_rating_from_movie(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = delete(app.clone(), "/api/v1/movies/Hot%20Fuzz/director").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete(app.clone(), "/api/v1/movies/Hot%20Fuzz/rating").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = movies(&app, "/api/v1/movies?title=Hot%20Fuzz").await;
    assert_eq!(list, json!({"Hot Fuzz": {}}));

    // Already absent: still a success.
    let response = delete(app.clone(), "/api/v1/movies/Hot%20Fuzz/rating").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(app, "/api/v1/movies/Nothing/director").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Bulk operations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_director_to_several_movies(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = post_json(
        app.clone(),
        "/api/v1/movies/directors",
        json!({"name": "Guy Ritchie", "movies": ["Untitled Draft", "Baby Driver"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = movies(&app, "/api/v1/movies?director=guy%20ritchie").await;
    let titles: Vec<_> = list.as_object().unwrap().keys().cloned().collect();
    assert_eq!(titles, vec!["Baby Driver", "Snatch", "Untitled Draft"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_director_with_unknown_title_writes_nothing(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = post_json(
        app.clone(),
        "/api/v1/movies/directors",
        json!({"name": "Guy Ritchie", "movies": ["Untitled Draft", "Nonexistent"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "UNKNOWN_TITLE");

    let list = movies(&app, "/api/v1/movies?title=Untitled%20Draft").await;
    assert_eq!(list["Untitled Draft"], json!({}));

    for body in [
        json!({"name": "Guy Ritchie", "movies": []}),
        json!({"name": "Guy Ritchie", "movies": null}),
        json!({"name": null, "movies": ["Snatch"]}),
    ] {
        let response = post_json(app.clone(), "/api/v1/movies/directors", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_director_everywhere(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = delete(app.clone(), "/api/v1/movies/directors/edgar%20wright").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let list = movies(&app, "/api/v1/movies").await;
    assert_eq!(list["Hot Fuzz"], json!({"rating": 4.9}));
    assert_eq!(list["Baby Driver"], json!({"rating": 3.8}));
    assert_eq!(list["Snatch"]["director"], "Guy Ritchie");

    // Nobody left to clear: still a success.
    let response = delete(app, "/api/v1/movies/directors/Edgar%20Wright").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn clear_catalogue(pool: PgPool) {
    let app = common::build_test_app(pool);
    seed(&app).await;

    let response = delete(app.clone(), "/api/v1/movies").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(movies(&app, "/api/v1/movies").await, json!({}));
}
