//! API route definitions
//!
//! Organizes endpoints for the oil well dashboard:
//! - /api/v1/health - Service health and well identity
//! - /api/v1/thresholds - Reference-dataset percentile thresholds
//! - /api/v1/bounds - Input bounds (day range per year/month)
//! - /api/v1/predict - Run a prediction
//! - /api/v1/alert - Evaluate the current reading

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{self, DashboardState};

/// Create all API routes for the dashboard
pub fn api_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/thresholds", get(handlers::get_thresholds))
        .route("/bounds", get(handlers::get_bounds))
        .route("/predict", post(handlers::post_predict))
        .route("/alert", post(handlers::post_alert))
        .with_state(state)
}

/// Legacy health endpoint at root level
pub fn legacy_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/health", get(handlers::legacy_health_check))
        .with_state(state)
}
