//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::devices::{ApplianceCatalog, SystemConfig};
use crate::model::artifact::DEFAULT_MODEL_FILE;
use crate::sim::load::LoadSpec;
use crate::sim::types::{EvaluationInput, WeatherSample};

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Installed solar array.
    #[serde(default)]
    pub system: SystemSection,
    /// Live weather conditions.
    #[serde(default)]
    pub weather: WeatherSection,
    /// Household load selection.
    #[serde(default)]
    pub load: LoadSection,
    /// Electricity price and currency label.
    #[serde(default)]
    pub tariff: TariffSection,
    /// Model artifact location.
    #[serde(default)]
    pub model: ModelSection,
    /// Diagnostic log settings.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Installed solar array.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemSection {
    /// Rated output per panel (W, >= 100).
    pub panel_wattage_w: f32,
    /// Number of panels (>= 1).
    pub panel_count: u32,
}

impl Default for SystemSection {
    fn default() -> Self {
        Self {
            panel_wattage_w: 550.0,
            panel_count: 4,
        }
    }
}

/// Live weather conditions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeatherSection {
    /// Ambient temperature (°C, 0-50).
    pub temperature_c: f32,
    /// Sunlight intensity (0.0 = shade, 1.0 = full sun).
    pub irradiance: f32,
}

impl Default for WeatherSection {
    fn default() -> Self {
        Self {
            temperature_c: 25.0,
            irradiance: 0.5,
        }
    }
}

/// Household load selection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadSection {
    /// Catalog appliance names to run.
    pub appliances: Vec<String>,
    /// Additional custom load (W, >= 0, step 10).
    pub manual_load_w: f32,
}

/// Electricity price and currency label.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TariffSection {
    /// Price per kWh (>= 0).
    pub unit_price: f32,
    /// Label printed in front of monetary values.
    pub currency: String,
}

impl Default for TariffSection {
    fn default() -> Self {
        Self {
            unit_price: 35.0,
            currency: "PKR".to_string(),
        }
    }
}

/// Model artifact location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSection {
    /// Path to the JSON model artifact; `solar_model.json` in the working
    /// directory when unset.
    pub path: Option<PathBuf>,
}

/// Diagnostic log settings. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSection {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field} - {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"system.panel_count"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accepted values for `logging.level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl ScenarioConfig {
    /// Returns the baseline scenario: 4 x 550 W panels, 25 °C, half sun, no load.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns the evening-peak preset: air conditioning plus a fan on a small array.
    pub fn evening_peak() -> Self {
        Self {
            load: LoadSection {
                appliances: vec!["Air Conditioner".to_string(), "Fan".to_string()],
                manual_load_w: 25.0,
            },
            ..Self::default()
        }
    }

    /// Returns the overcast preset: cool, dim day with light household load.
    pub fn overcast() -> Self {
        Self {
            weather: WeatherSection {
                temperature_c: 15.0,
                irradiance: 0.2,
            },
            load: LoadSection {
                appliances: vec![
                    "LED Light".to_string(),
                    "Inverter Fridge".to_string(),
                    "Television".to_string(),
                ],
                manual_load_w: 0.0,
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "evening_peak", "overcast"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "evening_peak" => Ok(Self::evening_peak()),
            "overcast" => Ok(Self::overcast()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// A relative `model.path` is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        let mut cfg = Self::from_toml_str(&content)?;
        if let (Some(model), Some(dir)) = (cfg.model.path.as_mut(), path.parent()) {
            if model.is_relative() {
                *model = dir.join(&*model);
            }
        }
        Ok(cfg)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields against the caller-side input domain and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self, catalog: &ApplianceCatalog) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let s = &self.system;
        if !s.panel_wattage_w.is_finite() || s.panel_wattage_w < 100.0 {
            errors.push(ConfigError::new("system.panel_wattage_w", "must be >= 100"));
        }
        if s.panel_count == 0 {
            errors.push(ConfigError::new("system.panel_count", "must be >= 1"));
        }

        let w = &self.weather;
        if !(0.0..=50.0).contains(&w.temperature_c) {
            errors.push(ConfigError::new(
                "weather.temperature_c",
                "must be in [0.0, 50.0]",
            ));
        }
        if !(0.0..=1.0).contains(&w.irradiance) {
            errors.push(ConfigError::new("weather.irradiance", "must be in [0.0, 1.0]"));
        }

        let l = &self.load;
        if !l.manual_load_w.is_finite() || l.manual_load_w < 0.0 {
            errors.push(ConfigError::new("load.manual_load_w", "must be >= 0"));
        }
        for name in &l.appliances {
            if !catalog.contains(name) {
                errors.push(ConfigError::new(
                    "load.appliances",
                    format!("unknown appliance \"{name}\""),
                ));
            }
        }

        let t = &self.tariff;
        if !t.unit_price.is_finite() || t.unit_price < 0.0 {
            errors.push(ConfigError::new("tariff.unit_price", "must be >= 0"));
        }
        if t.currency.trim().is_empty() {
            errors.push(ConfigError::new("tariff.currency", "must not be empty"));
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ConfigError::new(
                "logging.level",
                format!(
                    "must be one of {}, got \"{}\"",
                    LOG_LEVELS.join(", "),
                    self.logging.level
                ),
            ));
        }

        errors
    }

    /// Model artifact path, falling back to [`DEFAULT_MODEL_FILE`].
    pub fn model_path(&self) -> PathBuf {
        self.model
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_FILE))
    }

    /// Converts the scenario into an engine input snapshot.
    pub fn to_input(&self) -> EvaluationInput {
        EvaluationInput {
            system: SystemConfig {
                panel_wattage_w: self.system.panel_wattage_w,
                panel_count: self.system.panel_count,
            },
            weather: WeatherSample::new(self.weather.temperature_c, self.weather.irradiance),
            load: LoadSpec::new(self.load.appliances.iter().cloned(), self.load.manual_load_w),
            unit_price: self.tariff.unit_price,
        }
    }
}
