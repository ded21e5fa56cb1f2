//! Linear regression model over temperature and irradiance.

use serde::{Deserialize, Serialize};

use super::Predictor;

/// `base = intercept + temperature_coef * t + irradiance_coef * irr`.
///
/// No clamping is applied, so a poorly fitted model can predict negative
/// base power at low irradiance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Constant term (W).
    pub intercept: f32,
    /// Watts per degree Celsius.
    pub temperature_coef: f32,
    /// Watts per unit of normalized irradiance.
    pub irradiance_coef: f32,
}

impl LinearModel {
    pub fn new(intercept: f32, temperature_coef: f32, irradiance_coef: f32) -> Self {
        Self {
            intercept,
            temperature_coef,
            irradiance_coef,
        }
    }

    /// Checks that every coefficient is finite.
    pub(crate) fn check(&self) -> Result<(), String> {
        for (name, v) in [
            ("intercept", self.intercept),
            ("temperature_coef", self.temperature_coef),
            ("irradiance_coef", self.irradiance_coef),
        ] {
            if !v.is_finite() {
                return Err(format!("linear coefficient `{name}` is not finite"));
            }
        }
        Ok(())
    }
}

impl Predictor for LinearModel {
    fn predict(&self, temperature_c: f32, irradiance: f32) -> f32 {
        self.intercept + self.temperature_coef * temperature_c + self.irradiance_coef * irradiance
    }
}
