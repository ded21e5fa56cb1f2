//! Regression predictors mapping weather conditions to base power output.

/// Serialized model artifacts and loading.
pub mod artifact;
/// Averaged decision-tree regression model.
pub mod forest;
pub mod linear;

pub use artifact::ModelArtifact;
pub use forest::RegressionForest;
pub use linear::LinearModel;

use crate::sim::types::WeatherSample;

/// Peak output (W) the predictors are calibrated against.
///
/// Base power is expressed relative to this reference array; the capacity
/// scaler converts it to the user's installed wattage.
pub const MODEL_PEAK_OUTPUT_W: f32 = 950.0;

/// A frozen regression function `(temperature, irradiance) -> base power`.
///
/// Implementations are pure and perform no range validation; callers are
/// responsible for supplying inputs in the documented domain.
pub trait Predictor {
    /// Predicts base power output (W) for a single weather sample.
    ///
    /// # Arguments
    ///
    /// * `temperature_c` - Ambient temperature in degrees Celsius
    /// * `irradiance` - Normalized sunlight intensity (0.0 = shade, 1.0 = full sun)
    fn predict(&self, temperature_c: f32, irradiance: f32) -> f32;

    /// Predicts base power for each sample, element-wise.
    ///
    /// Equivalent to calling [`Predictor::predict`] once per sample, in order.
    fn predict_many(&self, samples: &[WeatherSample]) -> Vec<f32> {
        samples
            .iter()
            .map(|s| self.predict(s.temperature_c, s.irradiance))
            .collect()
    }
}

impl<P: Predictor + ?Sized> Predictor for &P {
    fn predict(&self, temperature_c: f32, irradiance: f32) -> f32 {
        (**self).predict(temperature_c, irradiance)
    }

    fn predict_many(&self, samples: &[WeatherSample]) -> Vec<f32> {
        (**self).predict_many(samples)
    }
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(&self, temperature_c: f32, irradiance: f32) -> f32 {
        (**self).predict(temperature_c, irradiance)
    }

    fn predict_many(&self, samples: &[WeatherSample]) -> Vec<f32> {
        (**self).predict_many(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sum;

    impl Predictor for Sum {
        fn predict(&self, temperature_c: f32, irradiance: f32) -> f32 {
            temperature_c + 1000.0 * irradiance
        }
    }

    #[test]
    fn predict_many_matches_repeated_predict() {
        let samples = [
            WeatherSample::new(10.0, 0.0),
            WeatherSample::new(20.0, 0.5),
            WeatherSample::new(30.0, 1.0),
        ];
        let batch = Sum.predict_many(&samples);
        let single: Vec<f32> = samples
            .iter()
            .map(|s| Sum.predict(s.temperature_c, s.irradiance))
            .collect();
        assert_eq!(batch, single);
        assert_eq!(batch, vec![10.0, 520.0, 1030.0]);
    }

    #[test]
    fn predict_many_empty() {
        assert!(Sum.predict_many(&[]).is_empty());
    }

    #[test]
    fn boxed_predictor_delegates() {
        let boxed: Box<dyn Predictor> = Box::new(Sum);
        assert_eq!(boxed.predict(5.0, 0.1), 105.0);
    }
}
