//! Core domain types shared by every module.

pub mod alert;
pub mod reading;

pub use alert::{AlertEvaluation, AlertStatus, Banner};
pub use reading::{days_in_month, input_bounds, FieldBounds, ValidationError, WellReading};

use serde::{Deserialize, Serialize};

/// Percentile thresholds derived from the reference dataset.
///
/// Computed once at startup by [`crate::reference::load_thresholds`] and
/// shared read-only for the remainder of the process. Both values are in
/// the units of their source columns (% and atm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceThresholds {
    /// 75th percentile of the reference water-cut column (%).
    pub water_cut_warn: f64,
    /// 25th percentile of the reference reservoir-pressure column (atm).
    pub reservoir_pressure_low: f64,
}

/// Display unit for predicted output rates.
pub const OUTPUT_RATE_UNIT: &str = "m3/day";

/// A single predicted output rate. Ephemeral — recomputed per trigger,
/// never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted oil well output (m³/day).
    pub rate_m3_day: f64,
}

impl PredictionResult {
    /// Format the rate for the dashboard panel, two decimal places.
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.rate_m3_day)
    }
}
