use std::path::Path;

use thiserror::Error;
use tilecal_core::DigitizationConfig;

use crate::validator::validate_config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    ReadError { path: String, message: String },
    #[error("Failed to parse config RON: {0}")]
    ParseError(String),
    #[error("Invalid config: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Parse a digitization config from a RON string.
pub fn load_config_from_str(ron_str: &str) -> Result<DigitizationConfig, ConfigError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Read, parse and validate a digitization config file.
pub fn load_config(path: &Path) -> Result<DigitizationConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let config = load_config_from_str(&contents)?;
    validate_config(&config)
        .map_err(|errors| ConfigError::Invalid(errors.iter().map(|e| e.to_string()).collect()))?;
    log::info!(
        "Loaded config from {} ({} frames of {} ns)",
        path.display(),
        config.frames(),
        config.bin_width_ns
    );
    Ok(config)
}
