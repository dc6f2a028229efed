use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use campus_core::health::healthz;
use campus_core::middleware::request_id_layer;

use crate::handlers::{
    class::{create_class, get_class, get_classes_by_year},
    health::readyz,
    meal::{create_meal, get_meals},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Classes
        .route("/classes", get(get_classes_by_year))
        .route("/classes", post(create_class))
        .route("/classes/{class_id}", get(get_class))
        // Meals
        .route("/meals", get(get_meals))
        .route("/meals", post(create_meal))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
