//! API client error types.

use serde_json::Value;

/// Errors returned by remote calls.
///
/// Never panics across the fetch boundary: every failure of a call is one
/// of these variants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-200 status, or a 200 without a body.
    #[error("HTTP {status}: {payload}")]
    Status { status: u16, payload: Value },

    /// The body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Request parameters could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Upstream error payload, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Status { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_accessors() {
        let err = ApiError::Status {
            status: 404,
            payload: json!({"error": "not found"}),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.payload(), Some(&json!({"error": "not found"})));
        assert_eq!(err.to_string(), r#"HTTP 404: {"error":"not found"}"#);
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.payload(), None);
    }
}
