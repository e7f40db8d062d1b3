//! Reference dataset ingestion and percentile threshold computation.
//!
//! Loads the well's historical feature CSV once at startup and derives the
//! two alerting thresholds: the 75th percentile of water cut and the 25th
//! percentile of reservoir pressure. Any problem with the dataset is fatal —
//! the dashboard cannot produce alerts without it.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::defaults;
use crate::types::ReferenceThresholds;

/// Reference CSV column holding water cut percentages.
pub const WATER_CUT_COLUMN: &str = "water_cut_%";

/// Reference CSV column holding reservoir pressure in atm.
pub const RESERVOIR_PRESSURE_COLUMN: &str = "reservoir_pressure_atm";

/// Errors from loading the reference dataset.
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("failed to open reference dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("reference dataset has no header line")]
    MissingHeader,

    #[error("reference dataset is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("reference dataset line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("reference dataset contains no data rows")]
    Empty,
}

/// Load the reference dataset and compute both alerting thresholds.
///
/// Deterministic for a given file: reloading yields bit-identical
/// thresholds. Called once from `main`; the result is shared read-only
/// via the API state for the rest of the process.
pub fn load_thresholds(path: &Path) -> Result<ReferenceThresholds, ReferenceError> {
    let columns = load_columns(path)?;

    let mut water_cut = columns.water_cut;
    let mut reservoir_pressure = columns.reservoir_pressure;
    sort_unstable_f64(&mut water_cut);
    sort_unstable_f64(&mut reservoir_pressure);

    let thresholds = ReferenceThresholds {
        water_cut_warn: quantile(&water_cut, defaults::WATER_CUT_WARN_QUANTILE),
        reservoir_pressure_low: quantile(
            &reservoir_pressure,
            defaults::RESERVOIR_PRESSURE_LOW_QUANTILE,
        ),
    };

    tracing::info!(
        path = %path.display(),
        rows = water_cut.len(),
        water_cut_warn = thresholds.water_cut_warn,
        reservoir_pressure_low = thresholds.reservoir_pressure_low,
        "Computed reference thresholds"
    );
    Ok(thresholds)
}

struct ReferenceColumns {
    water_cut: Vec<f64>,
    reservoir_pressure: Vec<f64>,
}

/// Read the two required columns from the reference CSV.
///
/// Schema beyond the two named columns is opaque; extra columns are
/// ignored. Unlike streaming sensor ingestion, a malformed row here is a
/// hard error rather than a skip — a corrupt reference dataset must halt
/// startup, not silently shift the percentiles.
fn load_columns(path: &Path) -> Result<ReferenceColumns, ReferenceError> {
    let file = File::open(path).map_err(|e| ReferenceError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(Ok(line)) => line,
        Some(Err(e)) => {
            return Err(ReferenceError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
        None => return Err(ReferenceError::MissingHeader),
    };

    let names: Vec<&str> = header.split(',').map(str::trim).collect();
    let water_cut_idx = names
        .iter()
        .position(|n| *n == WATER_CUT_COLUMN)
        .ok_or(ReferenceError::MissingColumn(WATER_CUT_COLUMN))?;
    let pressure_idx = names
        .iter()
        .position(|n| *n == RESERVOIR_PRESSURE_COLUMN)
        .ok_or(ReferenceError::MissingColumn(RESERVOIR_PRESSURE_COLUMN))?;

    let mut water_cut = Vec::new();
    let mut reservoir_pressure = Vec::new();
    let mut line_num = 1;

    for line_result in lines {
        line_num += 1;
        let line = line_result.map_err(|e| ReferenceError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() <= water_cut_idx.max(pressure_idx) {
            return Err(ReferenceError::Malformed {
                line: line_num,
                message: format!("expected at least {} fields, got {}", names.len(), fields.len()),
            });
        }

        water_cut.push(parse_f64(fields[water_cut_idx], WATER_CUT_COLUMN, line_num)?);
        reservoir_pressure.push(parse_f64(
            fields[pressure_idx],
            RESERVOIR_PRESSURE_COLUMN,
            line_num,
        )?);
    }

    if water_cut.is_empty() {
        return Err(ReferenceError::Empty);
    }

    Ok(ReferenceColumns {
        water_cut,
        reservoir_pressure,
    })
}

fn parse_f64(s: &str, column: &str, line: usize) -> Result<f64, ReferenceError> {
    let value = s
        .trim()
        .parse::<f64>()
        .map_err(|_| ReferenceError::Malformed {
            line,
            message: format!("cannot parse {column} value '{s}' as a number"),
        })?;
    // `"NaN"` and `"inf"` parse successfully but would poison the
    // quantiles, leaving alerting silently stuck at Nominal.
    if !value.is_finite() {
        return Err(ReferenceError::Malformed {
            line,
            message: format!("non-finite {column} value '{s}'"),
        });
    }
    Ok(value)
}

fn sort_unstable_f64(values: &mut [f64]) {
    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

/// Quantile by linear interpolation between order statistics.
///
/// `sorted` must be ascending and non-empty; `q` in [0, 1]. Matches the
/// definition used when the thresholds were first derived (position
/// `(n - 1) * q`, interpolated), so reloading the original dataset
/// reproduces the exact same thresholds.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));

    if sorted.len() == 1 {
        return sorted[0];
    }

    let pos = (sorted.len() - 1) as f64 * q;
    let lower = pos.floor() as usize;
    let frac = pos - pos.floor();

    if frac == 0.0 || lower + 1 >= sorted.len() {
        sorted[lower]
    } else {
        sorted[lower] + frac * (sorted[lower + 1] - sorted[lower])
    }
}
