//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use solar_balance::devices::{ApplianceCatalog, SystemConfig};
use solar_balance::model::{MODEL_PEAK_OUTPUT_W, Predictor};
use solar_balance::sim::load::LoadSpec;
use solar_balance::sim::types::{EvaluationInput, WeatherSample};

/// Predictor that ignores its inputs.
pub struct Constant(pub f32);

impl Predictor for Constant {
    fn predict(&self, _temperature_c: f32, _irradiance: f32) -> f32 {
        self.0
    }
}

/// Base power proportional to irradiance, reaching the reference peak at full sun.
pub struct Proportional;

impl Predictor for Proportional {
    fn predict(&self, _temperature_c: f32, irradiance: f32) -> f32 {
        irradiance * MODEL_PEAK_OUTPUT_W
    }
}

/// Records every sample it is asked about and returns its irradiance.
#[derive(Default)]
pub struct Recorder {
    pub seen: RefCell<Vec<WeatherSample>>,
}

impl Predictor for Recorder {
    fn predict(&self, temperature_c: f32, irradiance: f32) -> f32 {
        self.seen
            .borrow_mut()
            .push(WeatherSample::new(temperature_c, irradiance));
        irradiance
    }
}

/// Default array (4 x 550 W = 2200 W).
pub fn default_system() -> SystemConfig {
    SystemConfig {
        panel_wattage_w: 550.0,
        panel_count: 4,
    }
}

/// Default input: 25 °C, half sun, the given load, price 35.
pub fn default_input(load: LoadSpec) -> EvaluationInput {
    EvaluationInput {
        system: default_system(),
        weather: WeatherSample::new(25.0, 0.5),
        load,
        unit_price: 35.0,
    }
}

pub fn catalog() -> ApplianceCatalog {
    ApplianceCatalog::builtin()
}

/// Asserts `a` and `b` agree within `tol`.
pub fn assert_close(a: f32, b: f32, tol: f32) {
    assert!((a - b).abs() <= tol, "expected {b}, got {a} (tol {tol})");
}
