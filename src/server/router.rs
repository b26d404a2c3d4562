use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/health", get(handlers::health))
        // Patients
        .route("/view", get(handlers::view))
        .route("/patient/:patient_id", get(handlers::view_patient))
        .route("/sort", get(handlers::sorted_patients))
        // Classifier
        .route("/predict", post(handlers::predict))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
