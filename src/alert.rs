//! Threshold-based health evaluation.
//!
//! Compares the current reading against the reference-dataset percentiles
//! and yields exactly one of three statuses. Two behaviors are preserved
//! from the original operator workflow and are intentional:
//!
//! - A zero water cut or zero reservoir pressure is treated as "not
//!   entered" and suppresses evaluation entirely, even though zero is a
//!   structurally valid reading. Replacing the sentinel with an optional
//!   field would change observable boundary behavior.
//! - Conditions are checked in fixed priority order, first match wins. A
//!   reading that is simultaneously high-water-cut and low-pressure
//!   reports only `HighWaterCut`; the second breach is never surfaced.

use crate::types::{AlertEvaluation, AlertStatus, Banner, ReferenceThresholds, WellReading};

/// Evaluate the reading against the thresholds.
///
/// Returns `None` when either gating value is zero (nothing entered yet).
/// Otherwise returns exactly one evaluation with its banner and message.
pub fn evaluate(
    reading: &WellReading,
    thresholds: &ReferenceThresholds,
) -> Option<AlertEvaluation> {
    if reading.water_cut == 0.0 || reading.reservoir_pressure == 0.0 {
        return None;
    }

    let evaluation = if reading.water_cut > thresholds.water_cut_warn {
        AlertEvaluation {
            status: AlertStatus::HighWaterCut,
            banner: Banner::Warning,
            message: format!(
                "High water cut detected! Current: {}% (above 75th percentile: {:.1}%).",
                reading.water_cut, thresholds.water_cut_warn
            ),
        }
    } else if reading.reservoir_pressure < thresholds.reservoir_pressure_low {
        AlertEvaluation {
            status: AlertStatus::LowReservoirPressure,
            banner: Banner::Error,
            message: format!(
                "Low reservoir pressure! Current: {} atm (below 25th percentile: {:.1} atm).",
                reading.reservoir_pressure, thresholds.reservoir_pressure_low
            ),
        }
    } else {
        AlertEvaluation {
            status: AlertStatus::Nominal,
            banner: Banner::Success,
            message: "Parameters within expected range. Well is performing optimally."
                .to_string(),
        }
    };

    Some(evaluation)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: ReferenceThresholds = ReferenceThresholds {
        water_cut_warn: 70.0,
        reservoir_pressure_low: 60.0,
    };

    fn reading(water_cut: f64, reservoir_pressure: f64) -> WellReading {
        WellReading {
            water_cut,
            reservoir_pressure,
            ..WellReading::default()
        }
    }

    #[test]
    fn test_high_water_cut() {
        let eval = evaluate(&reading(80.0, 100.0), &THRESHOLDS).unwrap();
        assert_eq!(eval.status, AlertStatus::HighWaterCut);
        assert_eq!(eval.banner, Banner::Warning);
        assert!(eval.message.contains("80%"));
        assert!(eval.message.contains("70.0%"));
    }

    #[test]
    fn test_low_reservoir_pressure() {
        let eval = evaluate(&reading(40.0, 50.0), &THRESHOLDS).unwrap();
        assert_eq!(eval.status, AlertStatus::LowReservoirPressure);
        assert_eq!(eval.banner, Banner::Error);
        assert!(eval.message.contains("50 atm"));
    }

    #[test]
    fn test_nominal() {
        let eval = evaluate(&reading(40.0, 100.0), &THRESHOLDS).unwrap();
        assert_eq!(eval.status, AlertStatus::Nominal);
        assert_eq!(eval.banner, Banner::Success);
    }

    #[test]
    fn test_simultaneous_breach_reports_high_water_cut_only() {
        // Both rules breached: 80 > 70 and 50 < 60. Priority order means
        // only the water cut status is reported.
        let eval = evaluate(&reading(80.0, 50.0), &THRESHOLDS).unwrap();
        assert_eq!(eval.status, AlertStatus::HighWaterCut);
    }

    #[test]
    fn test_zero_sentinel_suppresses_evaluation() {
        assert_eq!(evaluate(&reading(0.0, 0.0), &THRESHOLDS), None);
        assert_eq!(evaluate(&reading(0.0, 100.0), &THRESHOLDS), None);
        assert_eq!(evaluate(&reading(80.0, 0.0), &THRESHOLDS), None);
    }

    #[test]
    fn test_threshold_boundary_is_not_a_breach() {
        // Strict comparisons: exactly-at-threshold readings are nominal.
        let eval = evaluate(&reading(70.0, 60.0), &THRESHOLDS).unwrap();
        assert_eq!(eval.status, AlertStatus::Nominal);
    }
}
