use crate::{
    AppState, create_person, delete_person, get_person, health, list_people, update_person,
    upload_picture,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let pictures = ServeDir::new(&state.upload_dir);
    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        // People
        .route("/api/v1/people", post(create_person).get(list_people))
        .route(
            "/api/v1/people/picture",
            post(upload_picture).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/api/v1/people/{id}",
            get(get_person).patch(update_person).delete(delete_person),
        )
        // Stored pictures
        .nest_service("/pictures", pictures)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
