//! Engine error types.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the estimation engine and model loading.
///
/// Every evaluation either fully succeeds or fails with one of these;
/// no partial results are returned.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Model artifact does not exist at the expected path.
    #[error(
        "Model file ('{file}') not found. Please run 'solar-balance --write-reference-model {}' first.",
        .path.display()
    )]
    ModelMissing { path: PathBuf, file: String },

    /// Model artifact exists but cannot be read or decoded.
    #[error("Model file ('{}') is unreadable or corrupt: {reason}", .path.display())]
    ModelCorrupt { path: PathBuf, reason: String },

    /// Caller input outside its documented domain.
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Selected appliance is not in the catalog.
    #[error("unknown appliance \"{0}\": not present in the appliance catalog")]
    UnknownAppliance(String),
}

impl EngineError {
    /// Builds a validation error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds a missing-model error.
    ///
    /// The message names the bare filename; the remediation command carries
    /// the full path so it writes the file that was looked up.
    pub fn model_missing(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        EngineError::ModelMissing { path, file }
    }
}
