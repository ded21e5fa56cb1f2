//! Core engine types: weather inputs, profile points, and evaluation records.

use serde::Serialize;

use crate::devices::SystemConfig;

use super::balance::BalanceReport;
use super::load::LoadSpec;
use super::savings::SavingsResult;
use super::scaling::ScaledPrediction;

/// Ambient conditions for one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherSample {
    /// Ambient temperature (°C).
    pub temperature_c: f32,
    /// Normalized sunlight intensity in `[0, 1]`.
    pub irradiance: f32,
}

impl WeatherSample {
    pub fn new(temperature_c: f32, irradiance: f32) -> Self {
        Self {
            temperature_c,
            irradiance,
        }
    }
}

/// One hour of the daily profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyPoint {
    /// Hour of day, 6 through 18.
    pub hour: u32,
    /// Synthetic irradiance used for this hour.
    pub irradiance: f32,
    /// Predictor output before scaling (W).
    pub base_power_w: f32,
    /// Output scaled to the installed array (W).
    pub scaled_power_w: f32,
}

/// Hourly scaled-power series in ascending hour order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailyProfile {
    points: Vec<HourlyPoint>,
}

impl DailyProfile {
    /// Wraps a series of points, sorting them by hour.
    pub fn from_points(mut points: Vec<HourlyPoint>) -> Self {
        points.sort_by_key(|p| p.hour);
        Self { points }
    }

    pub fn iter(&self) -> impl Iterator<Item = &HourlyPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point with the highest scaled output; the earliest wins ties.
    pub fn peak(&self) -> Option<&HourlyPoint> {
        self.points.iter().reduce(|best, p| {
            if p.scaled_power_w > best.scaled_power_w {
                p
            } else {
                best
            }
        })
    }
}

/// Complete input snapshot for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationInput {
    pub system: SystemConfig,
    pub weather: WeatherSample,
    pub load: LoadSpec,
    /// Electricity price per kWh, in the caller's currency.
    pub unit_price: f32,
}

/// Everything the engine computes for one input snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub system: SystemConfig,
    pub total_capacity_w: f32,
    pub weather: WeatherSample,
    /// Live prediction for `weather`.
    pub prediction: ScaledPrediction,
    /// Sum of selected appliances and manual load (W).
    pub total_load_w: f32,
    pub balance: BalanceReport,
    pub profile: DailyProfile,
    pub savings: SavingsResult,
}

impl Evaluation {
    pub fn total_load_kw(&self) -> f32 {
        self.total_load_w / 1000.0
    }
}
