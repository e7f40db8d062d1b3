//! Operator-entered well readings and their declared input bounds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// A snapshot of operator-entered well parameters.
///
/// Constructed fresh from dashboard input on each interaction; never
/// persisted. Every numeric field carries an explicit [min, max] range
/// enforced by [`WellReading::validate`], mirroring the bounds the
/// dashboard controls clamp to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellReading {
    /// Produced liquid volume (m³/day), [0, 150]
    pub liquid_volume: f64,
    /// Produced water volume (m³/day), [0, 100]
    pub water_volume: f64,
    /// Water cut (%), [0, 100]
    pub water_cut: f64,
    /// Operating hours per day, [0, 24]
    pub working_hours: f64,
    /// Dynamic fluid level (m), [0, 2500]
    pub dynamic_level: f64,
    /// Reservoir pressure (atm), [0, 250]
    pub reservoir_pressure: f64,
    /// Calendar year, [2013, 2021]
    pub year: i32,
    /// Calendar month, [1, 12]
    pub month: u32,
    /// Day of month, [1, days-in-month(year, month)]
    pub day: u32,
}

impl Default for WellReading {
    fn default() -> Self {
        Self {
            liquid_volume: 0.0,
            water_volume: 0.0,
            water_cut: defaults::WATER_CUT_DEFAULT,
            working_hours: defaults::WORKING_HOURS_DEFAULT,
            dynamic_level: 0.0,
            reservoir_pressure: 0.0,
            year: defaults::YEAR_MIN,
            month: 1,
            day: 1,
        }
    }
}

/// Errors from server-side range validation.
///
/// The dashboard controls clamp structurally, so these only fire for raw
/// API clients sending out-of-range JSON.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} = {value} outside allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("no such calendar month: year {year}, month {month}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("day {day} exceeds {days_in_month} days in {year}-{month:02}")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        days_in_month: u32,
    },
}

impl WellReading {
    /// Re-check every declared bound, including the day-of-month invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range(
            "liquid_volume",
            self.liquid_volume,
            0.0,
            defaults::LIQUID_VOLUME_MAX,
        )?;
        check_range(
            "water_volume",
            self.water_volume,
            0.0,
            defaults::WATER_VOLUME_MAX,
        )?;
        check_range("water_cut", self.water_cut, 0.0, defaults::WATER_CUT_MAX)?;
        check_range(
            "working_hours",
            self.working_hours,
            0.0,
            defaults::WORKING_HOURS_MAX,
        )?;
        check_range(
            "dynamic_level",
            self.dynamic_level,
            0.0,
            defaults::DYNAMIC_LEVEL_MAX,
        )?;
        check_range(
            "reservoir_pressure",
            self.reservoir_pressure,
            0.0,
            defaults::RESERVOIR_PRESSURE_MAX,
        )?;
        check_range(
            "year",
            f64::from(self.year),
            f64::from(defaults::YEAR_MIN),
            f64::from(defaults::YEAR_MAX),
        )?;
        check_range("month", f64::from(self.month), 1.0, 12.0)?;

        let max_day = days_in_month(self.year, self.month).ok_or(ValidationError::InvalidMonth {
            year: self.year,
            month: self.month,
        })?;
        if self.day < 1 || self.day > max_day {
            return Err(ValidationError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
                days_in_month: max_day,
            });
        }
        Ok(())
    }

    /// Selected date formatted the way the dashboard echoes it (d/m/yyyy).
    pub fn date_display(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Number of days in a calendar month, leap years included.
///
/// Returns `None` for months that do not exist (month 0, month 13, or a
/// year outside chrono's range).
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Declared bounds for one dashboard input control.
///
/// `step` and `default` are rendering hints for the page; `min`/`max` are
/// the authoritative range that [`WellReading::validate`] enforces.
#[derive(Debug, Clone, Serialize)]
pub struct FieldBounds {
    pub field: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Bounds table for every input control.
///
/// `max_day` comes from [`days_in_month`] for the selected year/month so
/// the page can re-clamp the day control whenever either changes.
pub fn input_bounds(max_day: u32) -> Vec<FieldBounds> {
    vec![
        FieldBounds {
            field: "liquid_volume",
            label: "Volume of liquid",
            unit: "m3/day",
            min: 0.0,
            max: defaults::LIQUID_VOLUME_MAX,
            step: defaults::VOLUME_STEP,
            default: 0.0,
        },
        FieldBounds {
            field: "water_volume",
            label: "Water volume",
            unit: "m3/day",
            min: 0.0,
            max: defaults::WATER_VOLUME_MAX,
            step: defaults::VOLUME_STEP,
            default: 0.0,
        },
        FieldBounds {
            field: "water_cut",
            label: "Water cut",
            unit: "%",
            min: 0.0,
            max: defaults::WATER_CUT_MAX,
            step: 1.0,
            default: defaults::WATER_CUT_DEFAULT,
        },
        FieldBounds {
            field: "working_hours",
            label: "Working hours",
            unit: "hrs",
            min: 0.0,
            max: defaults::WORKING_HOURS_MAX,
            step: 1.0,
            default: defaults::WORKING_HOURS_DEFAULT,
        },
        FieldBounds {
            field: "dynamic_level",
            label: "Dynamic level",
            unit: "m",
            min: 0.0,
            max: defaults::DYNAMIC_LEVEL_MAX,
            step: defaults::DYNAMIC_LEVEL_STEP,
            default: 0.0,
        },
        FieldBounds {
            field: "reservoir_pressure",
            label: "Reservoir pressure",
            unit: "atm",
            min: 0.0,
            max: defaults::RESERVOIR_PRESSURE_MAX,
            step: defaults::PRESSURE_STEP,
            default: 0.0,
        },
        FieldBounds {
            field: "year",
            label: "Year",
            unit: "",
            min: f64::from(defaults::YEAR_MIN),
            max: f64::from(defaults::YEAR_MAX),
            step: 1.0,
            default: f64::from(defaults::YEAR_MIN),
        },
        FieldBounds {
            field: "month",
            label: "Month",
            unit: "",
            min: 1.0,
            max: 12.0,
            step: 1.0,
            default: 1.0,
        },
        FieldBounds {
            field: "day",
            label: "Day of Month",
            unit: "",
            min: 1.0,
            max: f64::from(max_day),
            step: 1.0,
            default: 1.0,
        },
    ]
}
