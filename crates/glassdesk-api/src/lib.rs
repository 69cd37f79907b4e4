pub mod auth;
pub mod config;
pub mod error;
pub mod media;
pub mod middleware;
pub mod music;
pub mod notes;
pub mod token;
pub mod users;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::AppState;
use crate::media::MediaKind;
use crate::middleware::require_auth;

/// The full HTTP surface: JSON API, uploaded-asset mounts, CORS and tracing.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/music", get(music::list_music))
        .route("/api/users", get(users::list_users))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/api/users", put(users::update_current_user))
        .route("/api/notes", post(notes::create_note).get(notes::list_notes))
        .route(
            "/api/notes/{id}",
            put(notes::update_note).delete(notes::delete_note),
        )
        .layer(from_fn_with_state(state.clone(), require_auth))
        .with_state(state.clone());

    let assets = Router::new()
        .nest_service(
            MediaKind::ProfilePicture.mount(),
            ServeDir::new(state.media.dir(MediaKind::ProfilePicture)),
        )
        .nest_service(
            MediaKind::Wallpaper.mount(),
            ServeDir::new(state.media.dir(MediaKind::Wallpaper)),
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(assets)
        .layer(DefaultBodyLimit::max(state.config.body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
