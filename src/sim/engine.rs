//! Estimation engine tying predictor, scaler, profile, load, balance, and savings together.

use tracing::{debug, warn};

use crate::devices::{ApplianceCatalog, SystemConfig};
use crate::error::EngineResult;
use crate::model::Predictor;

use super::balance;
use super::profile::daily_profile;
use super::savings::{self, validate_unit_price};
use super::scaling::ScaledPrediction;
use super::types::{DailyProfile, Evaluation, EvaluationInput, WeatherSample};

/// Stateless evaluator over a loaded predictor and appliance catalog.
///
/// Generic over `P: Predictor` for static dispatch. Both collaborators are
/// borrowed read-only, so one predictor and catalog can back any number of
/// engines.
pub struct Engine<'a, P: Predictor + ?Sized> {
    predictor: &'a P,
    catalog: &'a ApplianceCatalog,
}

impl<'a, P: Predictor + ?Sized> Engine<'a, P> {
    pub fn new(predictor: &'a P, catalog: &'a ApplianceCatalog) -> Self {
        Self { predictor, catalog }
    }

    /// Live prediction for `weather`, scaled to `system`.
    pub fn live_power(&self, system: &SystemConfig, weather: WeatherSample) -> ScaledPrediction {
        let capacity = system.total_capacity_w();
        let base = self
            .predictor
            .predict(weather.temperature_c, weather.irradiance);
        let prediction = ScaledPrediction::new(base, capacity);
        if prediction.exceeds_capacity(capacity) {
            warn!(
                scaled_w = prediction.scaled_power_w,
                capacity_w = capacity,
                "scaled prediction exceeds installed capacity; predictor may be mis-calibrated"
            );
        }
        prediction
    }

    /// Hourly profile at a constant `temperature_c`.
    pub fn daily_profile(&self, system: &SystemConfig, temperature_c: f32) -> DailyProfile {
        daily_profile(self.predictor, temperature_c, system.total_capacity_w())
    }

    /// Runs the full chain for one input snapshot.
    ///
    /// All inputs are validated before anything is computed, so the call
    /// either returns a complete [`Evaluation`] or an error.
    ///
    /// # Errors
    ///
    /// * validation errors for the array, manual load, or unit price
    /// * [`crate::error::EngineError::UnknownAppliance`] for names missing from the catalog
    pub fn evaluate(&self, input: &EvaluationInput) -> EngineResult<Evaluation> {
        input.system.validate()?;
        validate_unit_price(input.unit_price)?;
        let total_load_w = input.load.total_load_w(self.catalog)?;

        let prediction = self.live_power(&input.system, input.weather);
        let balance = balance::evaluate(prediction.scaled_power_w, total_load_w);
        let profile = self.daily_profile(&input.system, input.weather.temperature_c);
        let savings = savings::compute(&profile, input.unit_price)?;

        debug!(
            capacity_w = input.system.total_capacity_w(),
            base_w = prediction.base_power_w,
            scaled_w = prediction.scaled_power_w,
            load_w = total_load_w,
            verdict = %balance.verdict,
            daily_kwh = savings.daily_energy_kwh,
            "evaluation complete"
        );

        Ok(Evaluation {
            system: input.system,
            total_capacity_w: input.system.total_capacity_w(),
            weather: input.weather,
            prediction,
            total_load_w,
            balance,
            profile,
            savings,
        })
    }
}
