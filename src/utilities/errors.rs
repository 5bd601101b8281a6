//! Error taxonomy for evaluation-target operations.

use thiserror::Error;

/// Errors raised while building, validating, or executing a target.
///
/// Every failure is detected at its point of occurrence and returned
/// immediately; the core performs no retries and no fallbacks.
#[derive(Debug, Error)]
pub enum TargetError {
    /// Caller or configuration error: missing credential, malformed input
    /// JSON, missing version/config on a rebuilt target.
    #[error("invalid parameter: {message}")]
    InvalidParam { message: String },

    /// Network-level failure reaching the external endpoint, including
    /// timeouts and cancellation.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The external endpoint responded with a non-200 status.
    #[error("remote endpoint returned status {status}: {body}")]
    RemoteHttp { status: u16, body: String },

    /// The response body did not decode into the expected envelope.
    #[error("failed to parse response: {source}; raw response: {body}")]
    MalformedResponse {
        source: serde_json::Error,
        body: String,
    },

    /// The external workflow ran but reported a non-success status.
    #[error("workflow execution failed with status '{status}': {message}")]
    ExecutionFailed { status: String, message: String },
}

impl TargetError {
    /// Shorthand for an [`TargetError::InvalidParam`].
    pub fn invalid_param(message: impl Into<String>) -> Self {
        TargetError::InvalidParam {
            message: message.into(),
        }
    }

    /// Whether this is a caller/configuration error.
    pub fn is_invalid_param(&self) -> bool {
        matches!(self, TargetError::InvalidParam { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_display() {
        let err = TargetError::invalid_param("api key is required");
        assert!(err.is_invalid_param());
        assert_eq!(err.to_string(), "invalid parameter: api key is required");
    }

    #[test]
    fn test_remote_http_display() {
        let err = TargetError::RemoteHttp {
            status: 500,
            body: "boom".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_execution_failed_display() {
        let err = TargetError::ExecutionFailed {
            status: "failed".to_string(),
            message: "node crashed".to_string(),
        };
        assert!(err.to_string().contains("failed"));
        assert!(err.to_string().contains("node crashed"));
    }
}
