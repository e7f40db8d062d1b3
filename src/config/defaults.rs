//! System-wide default constants.
//!
//! Centralises the input ranges, dashboard step hints, and quantile levels
//! in one place. Grouped by subsystem for easy discovery.

// ============================================================================
// Input Bounds
// ============================================================================

/// Maximum produced liquid volume (m³/day).
pub const LIQUID_VOLUME_MAX: f64 = 150.0;

/// Maximum produced water volume (m³/day).
pub const WATER_VOLUME_MAX: f64 = 100.0;

/// Maximum water cut (%).
pub const WATER_CUT_MAX: f64 = 100.0;

/// Maximum working hours per day.
pub const WORKING_HOURS_MAX: f64 = 24.0;

/// Maximum dynamic fluid level (m).
pub const DYNAMIC_LEVEL_MAX: f64 = 2500.0;

/// Maximum reservoir pressure (atm).
pub const RESERVOIR_PRESSURE_MAX: f64 = 250.0;

/// First year covered by the reference dataset.
pub const YEAR_MIN: i32 = 2013;

/// Last year covered by the reference dataset.
pub const YEAR_MAX: i32 = 2021;

// ============================================================================
// Dashboard Control Hints
// ============================================================================

/// Step for the liquid / water volume controls (m³/day).
pub const VOLUME_STEP: f64 = 10.0;

/// Step for the dynamic level control (m).
pub const DYNAMIC_LEVEL_STEP: f64 = 100.0;

/// Step for the reservoir pressure control (atm).
pub const PRESSURE_STEP: f64 = 10.0;

/// Initial water cut slider position (%).
pub const WATER_CUT_DEFAULT: f64 = 50.0;

/// Initial working hours value.
pub const WORKING_HOURS_DEFAULT: f64 = 12.0;

// ============================================================================
// Reference Statistics
// ============================================================================

/// Quantile level for the high water cut warning threshold.
pub const WATER_CUT_WARN_QUANTILE: f64 = 0.75;

/// Quantile level for the low reservoir pressure threshold.
pub const RESERVOIR_PRESSURE_LOW_QUANTILE: f64 = 0.25;

// ============================================================================
// Artifact Paths
// ============================================================================

/// Default path to the reference dataset CSV.
pub const REFERENCE_CSV_PATH: &str = "data/oilwell_features_clean.csv";

/// Default path to the serialized regression model.
pub const MODEL_PATH: &str = "artifacts/gradient_boosting_model.json";

/// Default path to the ordered feature-name list.
pub const FEATURES_PATH: &str = "artifacts/features_names.json";

// ============================================================================
// Server
// ============================================================================

/// Default HTTP bind address.
pub const SERVER_ADDR: &str = "0.0.0.0:8080";
