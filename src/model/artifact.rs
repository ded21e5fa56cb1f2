//! JSON model artifacts: the serialized predictor consumed at startup.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{LinearModel, Predictor, RegressionForest};
use crate::error::{EngineError, EngineResult};
use crate::sim::types::WeatherSample;

/// Default artifact filename looked up when no path is configured.
pub const DEFAULT_MODEL_FILE: &str = "solar_model.json";

/// A deserialized predictor, tagged by model kind.
///
/// ```json
/// { "kind": "linear", "intercept": 0.0, "temperature_coef": 2.0, "irradiance_coef": 900.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Forest(RegressionForest),
    Linear(LinearModel),
}

impl ModelArtifact {
    /// The artifact written by `--write-reference-model`.
    pub fn reference() -> Self {
        ModelArtifact::Forest(RegressionForest::reference())
    }

    /// Loads and validates an artifact from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ModelMissing`] if the file does not exist and
    /// [`EngineError::ModelCorrupt`] if it cannot be read, parsed, or fails
    /// structural validation. Both are fatal startup errors.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => EngineError::model_missing(path),
            _ => EngineError::ModelCorrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;
        let artifact = Self::from_json_str(&raw).map_err(|reason| EngineError::ModelCorrupt {
            path: path.to_path_buf(),
            reason,
        })?;
        info!(path = %path.display(), kind = artifact.kind(), "model artifact loaded");
        Ok(artifact)
    }

    /// Parses and validates an artifact from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, String> {
        let artifact: Self = serde_json::from_str(s).map_err(|e| e.to_string())?;
        artifact.check()?;
        Ok(artifact)
    }

    /// Writes the artifact as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(io::Error::other)?;
        writeln!(writer)?;
        writer.flush()
    }

    /// Short name of the model kind, as used in the `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Forest(_) => "forest",
            ModelArtifact::Linear(_) => "linear",
        }
    }

    fn check(&self) -> Result<(), String> {
        match self {
            ModelArtifact::Forest(f) => f.check(),
            ModelArtifact::Linear(m) => m.check(),
        }
    }
}

impl Predictor for ModelArtifact {
    fn predict(&self, temperature_c: f32, irradiance: f32) -> f32 {
        match self {
            ModelArtifact::Forest(f) => f.predict(temperature_c, irradiance),
            ModelArtifact::Linear(m) => m.predict(temperature_c, irradiance),
        }
    }

    fn predict_many(&self, samples: &[WeatherSample]) -> Vec<f32> {
        match self {
            ModelArtifact::Forest(f) => f.predict_many(samples),
            ModelArtifact::Linear(m) => m.predict_many(samples),
        }
    }
}
