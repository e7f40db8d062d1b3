//! Prediction orchestration: feature-vector assembly and model invocation.
//!
//! The feature-order artifact dictates column order; reading fields are
//! looked up by name so the resulting vector is identical no matter how
//! the reading was populated. The adapter itself does no reordering.

use crate::model::{ModelArtifacts, ModelError};
use crate::types::{PredictionResult, WellReading};

/// Errors from a prediction run. Recoverable — surfaced to the operator
/// as an inline error, the session stays usable.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("feature order artifact names unknown feature '{0}'")]
    UnknownFeature(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Map one reading field by its training-time feature name.
fn feature_value(reading: &WellReading, name: &str) -> Option<f64> {
    match name {
        "liquid_volume_m3_day" => Some(reading.liquid_volume),
        "water_volume_m3_day" => Some(reading.water_volume),
        "water_cut_%" => Some(reading.water_cut),
        "working_hours" => Some(reading.working_hours),
        "dynamic_level_m" => Some(reading.dynamic_level),
        "reservoir_pressure_atm" => Some(reading.reservoir_pressure),
        "year" => Some(f64::from(reading.year)),
        "month" => Some(f64::from(reading.month)),
        "day" => Some(f64::from(reading.day)),
        _ => None,
    }
}

/// Assemble the feature row in exactly the declared order.
pub fn build_feature_vector(
    reading: &WellReading,
    feature_order: &[String],
) -> Result<Vec<f64>, PredictError> {
    feature_order
        .iter()
        .map(|name| {
            feature_value(reading, name).ok_or_else(|| PredictError::UnknownFeature(name.clone()))
        })
        .collect()
}

/// Run one prediction: assemble the row, invoke the model, wrap the scalar.
///
/// Triggered only by explicit operator action, never on input change.
pub fn run_prediction(
    reading: &WellReading,
    artifacts: &ModelArtifacts,
) -> Result<PredictionResult, PredictError> {
    let features = build_feature_vector(reading, &artifacts.feature_order)?;
    let rate_m3_day = artifacts.model.predict(&features)?;
    Ok(PredictionResult { rate_m3_day })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GradientBoostingModel;

    fn training_order() -> Vec<String> {
        [
            "liquid_volume_m3_day",
            "water_volume_m3_day",
            "water_cut_%",
            "working_hours",
            "dynamic_level_m",
            "reservoir_pressure_atm",
            "year",
            "month",
            "day",
        ]
        .iter()
        .map(ToString::to_string)
        .collect()
    }

    fn sample_reading() -> WellReading {
        WellReading {
            liquid_volume: 50.0,
            water_volume: 20.0,
            water_cut: 40.0,
            working_hours: 12.0,
            dynamic_level: 1000.0,
            reservoir_pressure: 150.0,
            year: 2020,
            month: 6,
            day: 15,
        }
    }

    #[test]
    fn test_vector_follows_declared_order() {
        let vector = build_feature_vector(&sample_reading(), &training_order()).unwrap();
        assert_eq!(
            vector,
            vec![50.0, 20.0, 40.0, 12.0, 1000.0, 150.0, 2020.0, 6.0, 15.0]
        );
    }

    #[test]
    fn test_permuted_order_permutes_vector() {
        // Order is owned by the artifact, not by the struct layout: a
        // reversed declaration must yield the reversed vector.
        let mut reversed = training_order();
        reversed.reverse();
        let vector = build_feature_vector(&sample_reading(), &reversed).unwrap();
        assert_eq!(
            vector,
            vec![15.0, 6.0, 2020.0, 150.0, 1000.0, 12.0, 40.0, 20.0, 50.0]
        );
    }

    #[test]
    fn test_unknown_feature_name_rejected() {
        let order = vec!["gas_oil_ratio".to_string()];
        let err = build_feature_vector(&sample_reading(), &order).unwrap_err();
        assert!(matches!(err, PredictError::UnknownFeature(name) if name == "gas_oil_ratio"));
    }

    #[test]
    fn test_stub_model_end_to_end() {
        let artifacts = ModelArtifacts::from_parts(
            GradientBoostingModel::constant(42.567, 9),
            training_order(),
        )
        .unwrap();
        let result = run_prediction(&sample_reading(), &artifacts).unwrap();
        assert_eq!(result.display_value(), "42.57");
    }

    #[test]
    fn test_dimension_mismatch_surfaces_as_error() {
        // Model expecting 9 features fed through a 2-name order artifact
        // (count check bypassed to simulate a corrupt deployment).
        let artifacts = ModelArtifacts {
            model: GradientBoostingModel::constant(1.0, 9),
            feature_order: vec!["year".to_string(), "month".to_string()],
        };
        let err = run_prediction(&sample_reading(), &artifacts).unwrap_err();
        assert!(matches!(
            err,
            PredictError::Model(ModelError::DimensionMismatch { expected: 9, got: 2 })
        ));
    }
}
