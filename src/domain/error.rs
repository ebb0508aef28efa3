use std::io;

use thiserror::Error;

/// Library-wide error type for orgcfg operations.
///
/// Validation findings are not errors: the validator reports them as an
/// ordered list of messages and never fails for expected-invalid input.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file absent at the expected path.
    #[error(
        "Configuration file not found: {0}\nCopy config/config.example.yaml to config/config.yaml and customize it."
    )]
    ConfigMissing(String),

    /// Configuration file present but not parseable into a configuration.
    #[error("Invalid YAML in configuration file {path}:\n{source}")]
    YamlParse { path: String, source: serde_yaml::Error },

    /// Internal invariant failure (e.g. report serialization).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigMissing(_) => io::ErrorKind::NotFound,
            AppError::YamlParse { .. } => io::ErrorKind::InvalidInput,
            AppError::Internal(_) => io::ErrorKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_missing_message_carries_path_and_hint() {
        let err = AppError::ConfigMissing("config/config.yaml".to_string());
        let message = err.to_string();
        assert!(message.contains("config/config.yaml"));
        assert!(message.contains("Copy config/config.example.yaml"));
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn yaml_parse_wraps_parser_diagnostics() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("key: [unclosed").unwrap_err();
        let err = AppError::YamlParse { path: "config/config.yaml".to_string(), source };
        let message = err.to_string();
        assert!(message.starts_with("Invalid YAML in configuration file config/config.yaml:"));
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
