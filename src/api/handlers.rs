//! API route handlers
//!
//! Request handling logic for the dashboard endpoints:
//! - Service health and well identity
//! - Reference thresholds
//! - Input bounds (day range recomputed per year/month)
//! - Prediction runs and alert evaluations

use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::envelope::{ApiErrorResponse, ApiResponse};
use crate::model::ModelArtifacts;
use crate::types::{
    days_in_month, input_bounds, AlertEvaluation, FieldBounds, PredictionResult,
    ReferenceThresholds, WellReading, OUTPUT_RATE_UNIT,
};
use crate::{alert, config, predict};

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers.
///
/// Both artifacts are loaded once at startup and shared read-only; no
/// interaction mutates them, so plain `Arc` suffices.
#[derive(Clone)]
pub struct DashboardState {
    /// Percentile thresholds from the reference dataset
    pub thresholds: Arc<ReferenceThresholds>,
    /// Regression model and its feature ordering
    pub artifacts: Arc<ModelArtifacts>,
}

impl DashboardState {
    pub fn new(thresholds: ReferenceThresholds, artifacts: ModelArtifacts) -> Self {
        Self {
            thresholds: Arc::new(thresholds),
            artifacts: Arc::new(artifacts),
        }
    }
}

// ============================================================================
// Health Endpoint
// ============================================================================

/// Service health and identity.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub well: String,
    pub field: String,
    /// Number of features the loaded model expects
    pub model_features: usize,
}

/// GET /api/v1/health - Service health and well identity
pub async fn get_health(State(state): State<DashboardState>) -> Response {
    let cfg = config::get();
    ApiResponse::ok(HealthResponse {
        status: "ok",
        well: cfg.well.name.clone(),
        field: cfg.well.field.clone(),
        model_features: state.artifacts.model.n_features,
    })
}

/// GET /health - Legacy liveness probe (no envelope)
pub async fn legacy_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Thresholds Endpoint
// ============================================================================

/// GET /api/v1/thresholds - Reference-dataset percentile thresholds
pub async fn get_thresholds(State(state): State<DashboardState>) -> Response {
    ApiResponse::ok(*state.thresholds)
}

// ============================================================================
// Bounds Endpoint
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BoundsQuery {
    year: i32,
    month: u32,
}

#[derive(Debug, Serialize)]
pub struct BoundsResponse {
    pub fields: Vec<FieldBounds>,
    pub days_in_month: u32,
}

/// GET /api/v1/bounds?year=YYYY&month=M - Input bounds table
///
/// The day maximum tracks the selected year/month so the page re-clamps
/// its day control, leap-year February included.
pub async fn get_bounds(Query(query): Query<BoundsQuery>) -> Response {
    let Some(max_day) = days_in_month(query.year, query.month) else {
        return ApiErrorResponse::bad_request(format!(
            "no such calendar month: year {}, month {}",
            query.year, query.month
        ));
    };
    ApiResponse::ok(BoundsResponse {
        fields: input_bounds(max_day),
        days_in_month: max_day,
    })
}

// ============================================================================
// Prediction Endpoint
// ============================================================================

/// Prediction panel payload: the raw scalar plus its display form.
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: PredictionResult,
    /// Two-decimal display value for the result panel
    pub display: String,
    pub unit: &'static str,
    /// Selected date echoed back (d/m/yyyy)
    pub date: String,
    /// Input summary echoed back for the summary panel
    pub reading: WellReading,
}

/// POST /api/v1/predict - Run one prediction for the submitted reading
///
/// Explicit-trigger only: the dashboard calls this from its Run
/// Prediction button, never on input change.
pub async fn post_predict(
    State(state): State<DashboardState>,
    Json(reading): Json<WellReading>,
) -> Response {
    if let Err(e) = reading.validate() {
        return ApiErrorResponse::bad_request(e.to_string());
    }

    match predict::run_prediction(&reading, &state.artifacts) {
        Ok(prediction) => {
            tracing::info!(
                rate = prediction.rate_m3_day,
                date = %reading.date_display(),
                "Prediction run complete"
            );
            ApiResponse::ok(PredictionResponse {
                display: prediction.display_value(),
                unit: OUTPUT_RATE_UNIT,
                date: reading.date_display(),
                reading,
                prediction,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "Prediction failed");
            ApiErrorResponse::prediction_failed(e.to_string())
        }
    }
}

// ============================================================================
// Alert Endpoint
// ============================================================================

/// Alert evaluation result; `alert` is null while either gating value is
/// still zero ("not entered").
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub alert: Option<AlertEvaluation>,
}

/// POST /api/v1/alert - Evaluate the reading against the thresholds
///
/// Runs on every interaction, independently of prediction.
pub async fn post_alert(
    State(state): State<DashboardState>,
    Json(reading): Json<WellReading>,
) -> Response {
    if let Err(e) = reading.validate() {
        return ApiErrorResponse::bad_request(e.to_string());
    }

    let evaluation = alert::evaluate(&reading, &state.thresholds);
    ApiResponse::ok(AlertResponse { alert: evaluation })
}
