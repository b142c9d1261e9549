//! Error types for the NewsGraph engine
//!
//! Every failure mode in this crate is local and recoverable: the caller can
//! react (register the missing source, pick a different name) and retry. The
//! authority scorer's numeric non-convergence is deliberately *not* an error;
//! it degrades to a best-effort result and is only logged.

use thiserror::Error;

/// Result type alias using EngineError
pub type Result<T> = std::result::Result<T, EngineError>;

/// Engine error types
#[derive(Error, Debug)]
pub enum EngineError {
    /// Registering a source name that already exists. Idempotent
    /// re-registration is not supported; callers check existence first.
    #[error("duplicate source: {name} is already registered")]
    DuplicateSource { name: String },

    /// A citation referenced a source that was never registered. Usually a
    /// data-ordering bug in the caller (extraction ran before registration).
    #[error("unknown source: {name} is not registered")]
    UnknownSource { name: String },

    /// Invalid engine configuration (bad damping factor, zero iteration cap, ...)
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// Whether the caller can recover by adjusting its input and retrying.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::DuplicateSource { .. } | EngineError::UnknownSource { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        let err = EngineError::DuplicateSource {
            name: "CNN".into(),
        };
        assert!(err.is_recoverable());

        let err = EngineError::UnknownSource {
            name: "Daily Bugle".into(),
        };
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("Daily Bugle"));
    }

    #[test]
    fn test_configuration_not_recoverable() {
        let err = EngineError::Configuration {
            message: "damping must be in (0, 1)".into(),
        };
        assert!(!err.is_recoverable());
    }
}
