//! WELLSIGHT: ML-powered oil well monitoring
//!
//! Single-page dashboard service that collects well operating parameters,
//! runs them through a pre-trained regression model, and raises
//! rule-based health alerts from reference-dataset percentiles.
//!
//! ## Architecture
//!
//! - **Reference statistics**: percentile thresholds from the well's
//!   historical feature CSV, computed once at startup
//! - **Model inference**: serialized gradient-boosted tree ensemble with
//!   a declared feature ordering
//! - **Prediction orchestration**: feature-row assembly in training order
//! - **Alert evaluation**: fixed-priority threshold comparison

pub mod alert;
pub mod api;
pub mod config;
pub mod model;
pub mod predict;
pub mod reference;
pub mod types;

// Re-export configuration
pub use config::DashboardConfig;

// Re-export commonly used types
pub use types::{
    AlertEvaluation, AlertStatus, Banner, FieldBounds, PredictionResult, ReferenceThresholds,
    ValidationError, WellReading,
};

// Re-export the inference adapter
pub use model::{GradientBoostingModel, ModelArtifacts, ModelError};

// Re-export orchestration entry points
pub use predict::{run_prediction, PredictError};
pub use reference::{load_thresholds, ReferenceError};
