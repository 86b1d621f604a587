// src/routes.rs

use axum::{Router, http::Method, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::questions, state::AppState};

/// Assembles the main application router.
///
/// * Mounts the questions sub-router.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database handle + Config).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let question_routes = Router::new()
        .route("/", get(questions::list_questions))
        .route("/{id}", get(questions::get_question));

    Router::new()
        .nest("/api/questions", question_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
