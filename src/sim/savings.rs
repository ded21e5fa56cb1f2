//! Daily energy and savings from the hourly profile.

use std::fmt;

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

use super::types::DailyProfile;

/// Energy produced over the modeled day and what it is worth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsResult {
    /// Sum of hourly scaled power, one hour per sample (kWh, >= 0).
    pub daily_energy_kwh: f32,
    /// Price per kWh.
    pub unit_price: f32,
    /// `daily_energy_kwh * unit_price`.
    pub total_savings: f32,
}

impl SavingsResult {
    /// Savings for an already-integrated energy figure.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `unit_price` is negative or not finite.
    pub fn from_energy(daily_energy_kwh: f32, unit_price: f32) -> EngineResult<Self> {
        validate_unit_price(unit_price)?;
        Ok(Self {
            daily_energy_kwh,
            unit_price,
            total_savings: daily_energy_kwh * unit_price,
        })
    }
}

impl fmt::Display for SavingsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} kWh x {:.2} = {:.2}",
            self.daily_energy_kwh, self.unit_price, self.total_savings
        )
    }
}

pub(crate) fn validate_unit_price(unit_price: f32) -> EngineResult<()> {
    if !unit_price.is_finite() || unit_price < 0.0 {
        return Err(EngineError::validation(
            "unit_price",
            format!("must be >= 0, got {unit_price}"),
        ));
    }
    Ok(())
}

/// Daily energy (Wh) as an hourly Riemann sum of the profile.
///
/// Negative samples count as zero generation.
pub fn daily_energy_wh(profile: &DailyProfile) -> f32 {
    profile.iter().map(|p| p.scaled_power_w.max(0.0)).sum()
}

/// Integrates `profile` to kWh and prices it at `unit_price`.
///
/// # Errors
///
/// Returns a validation error if `unit_price` is negative or not finite.
pub fn compute(profile: &DailyProfile, unit_price: f32) -> EngineResult<SavingsResult> {
    SavingsResult::from_energy(daily_energy_wh(profile) / 1000.0, unit_price)
}
