//! Error types for platonic.
//!
//! Every fallible operation returns `Result<T, DiceError>`; nothing in the
//! library panics on bad input.

use thiserror::Error;

/// Result type alias for platonic operations.
pub type DiceResult<T> = Result<T, DiceError>;

/// Unified error type for all platonic operations.
///
/// The simulation engine only ever raises [`DiceError::InvalidArgument`].
/// The remaining variants belong to the application layer (catalog lookup by
/// name, configuration loading, output encoding).
#[derive(Debug, Error)]
pub enum DiceError {
    // ===== Engine Errors =====
    /// A simulation parameter was out of its domain (zero faces, zero rolls).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected parameter.
        message: String,
    },

    // ===== Catalog Errors =====
    /// No die in the catalog matches the requested name.
    #[error("Unknown die '{0}' (expected one of: tetrahedron, cube, octahedron, dodecahedron, icosahedron)")]
    UnknownDie(String),

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DiceError {
    /// Create an invalid-argument error with a message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Check if this error came from rejected simulation parameters.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl From<serde_json::Error> for DiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_detection() {
        let err = DiceError::invalid_argument("faces must be at least 1");
        assert!(err.is_invalid_argument());

        let config = DiceError::config("invalid");
        assert!(!config.is_invalid_argument());

        let unknown = DiceError::UnknownDie("d7".to_string());
        assert!(!unknown.is_invalid_argument());
    }

    #[test]
    fn test_error_invalid_argument_display() {
        let err = DiceError::invalid_argument("total_rolls must be at least 1, got 0");
        let msg = err.to_string();
        assert!(msg.contains("Invalid argument"));
        assert!(msg.contains("total_rolls"));
    }

    #[test]
    fn test_error_unknown_die_display() {
        let err = DiceError::UnknownDie("d7".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Unknown die 'd7'"));
        assert!(msg.contains("icosahedron"));
    }

    #[test]
    fn test_error_config() {
        let err = DiceError::config("min_rolls exceeds max_rolls");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("min_rolls exceeds max_rolls"));
    }

    #[test]
    fn test_error_serialization() {
        let err = DiceError::serialization("failed to serialize");
        let msg = err.to_string();
        assert!(msg.contains("Serialization error"));
        assert!(msg.contains("failed to serialize"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: DiceError = json_err.into();
        assert!(matches!(err, DiceError::Serialization(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml");
        let err: DiceError = io_err.into();
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("missing.yaml"));
    }

    #[test]
    fn test_error_debug() {
        let err = DiceError::invalid_argument("test");
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidArgument"));
    }
}
