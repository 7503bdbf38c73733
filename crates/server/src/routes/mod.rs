use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, get_service, post},
    Router,
};
use shared::api::Object;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::AppState;

pub mod exercise;

mod not_found;
pub use not_found::*;

/// Builds the full application: the exercise API, the landing page, static
/// assets and the not found fallback
pub fn app(state: AppState) -> Router {
    let args = state.args.clone();

    Router::new()
        .route(
            Object::NewUser.path(),
            post(exercise::new_user).fallback(not_found),
        )
        .route(
            Object::AddExercise.path(),
            post(exercise::add_exercise).fallback(not_found),
        )
        .route(
            Object::Log.path(),
            get(exercise::exercise_log).fallback(not_found),
        )
        .route(
            Object::Users.path(),
            get(exercise::users).fallback(not_found),
        )
        .route(
            "/",
            get_service(ServeFile::new(args.views_dir.join("index.html"))).fallback(not_found),
        )
        .fallback_service(
            ServeDir::new(&args.public_dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(not_found.into_service()),
        )
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
