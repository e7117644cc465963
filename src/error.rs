//! Error types for reqinspect

use thiserror::Error;

/// Result type alias for reqinspect operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Inspection(#[from] InspectionError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{count} finding(s) at or above {threshold} severity")]
    FindingsAtOrAbove { count: usize, threshold: String },

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `reqinspect init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Request document loading errors
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Request file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse request document: {0}")]
    ParseError(String),
}

impl From<serde_yaml::Error> for DocumentError {
    fn from(err: serde_yaml::Error) -> Self {
        DocumentError::ParseError(err.to_string())
    }
}

/// Inspector registration errors
#[derive(Debug, Error)]
pub enum InspectionError {
    #[error("Inspector already registered: {0}")]
    DuplicateInspector(String),
}

/// Transport selection errors
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Unknown transport '{0}'. Run `reqinspect transport list` to see available transports.")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("reqinspect init"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::ParseError("unexpected key".to_string());
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_config_error_save() {
        let err = ConfigError::SaveError("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_document_error_not_found() {
        let err = DocumentError::NotFound("req.yaml".to_string());
        assert!(err.to_string().contains("req.yaml"));
    }

    #[test]
    fn test_duplicate_inspector_message() {
        let err = InspectionError::DuplicateInspector("authorization".to_string());
        assert!(err.to_string().contains("authorization"));
    }

    #[test]
    fn test_unknown_transport_message() {
        let err = TransportError::Unknown("carrier-pigeon".to_string());
        let msg = err.to_string();
        assert!(msg.contains("carrier-pigeon"));
        assert!(msg.contains("transport list"));
    }

    #[test]
    fn test_findings_gate_message() {
        let err = Error::FindingsAtOrAbove {
            count: 2,
            threshold: "warning".to_string(),
        };
        assert_eq!(err.to_string(), "2 finding(s) at or above warning severity");
    }

    #[test]
    fn test_error_from_transport_error() {
        let err: Error = TransportError::Unknown("x".to_string()).into();

        match err {
            Error::Transport(TransportError::Unknown(id)) => assert_eq!(id, "x"),
            _ => panic!("Expected Error::Transport(TransportError::Unknown)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
