//! Configuration loading with default merging.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::domain::{AppError, Config};

/// Load the configuration at `path`, overlaying file values onto the
/// defaults (shallow, top-level keys only).
///
/// An empty file, or a bare `null` document, yields the defaults untouched.
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Err(AppError::ConfigMissing(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let document: Value = serde_yaml::from_str(&content)
        .map_err(|source| AppError::YamlParse { path: path.display().to_string(), source })?;

    if matches!(document, Value::Null) {
        return Ok(Config::default());
    }

    serde_yaml::from_value(document)
        .map_err(|source| AppError::YamlParse { path: path.display().to_string(), source })
}
