//! Health status types for threshold-based alerting.

use serde::{Deserialize, Serialize};

/// Well health status derived from the reference thresholds.
///
/// Derived, never stored. Exactly one status per evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    /// Water cut above the 75th percentile of the reference dataset.
    HighWaterCut,
    /// Reservoir pressure below the 25th percentile of the reference dataset.
    LowReservoirPressure,
    /// Both parameters within expected range.
    Nominal,
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertStatus::HighWaterCut => write!(f, "HIGH_WATER_CUT"),
            AlertStatus::LowReservoirPressure => write!(f, "LOW_RESERVOIR_PRESSURE"),
            AlertStatus::Nominal => write!(f, "NOMINAL"),
        }
    }
}

/// Which banner the dashboard renders for an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Banner {
    Warning,
    Error,
    Success,
}

/// One rendered alert: status, banner kind, and the operator-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvaluation {
    pub status: AlertStatus,
    pub banner: Banner,
    pub message: String,
}
