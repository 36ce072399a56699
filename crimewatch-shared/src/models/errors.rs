use serde::{Deserialize, Serialize};

/// Error envelope the API returns on non-2xx responses.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Server-provided detail message.
    pub detail: String,
}

impl ErrorBody {
    /// Creates a new error body with the provided detail message.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail)
    }
}

impl std::error::Error for ErrorBody {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_display() {
        let error = ErrorBody::new("Invalid credentials");
        assert_eq!(error.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_error_body_from_server_json() {
        let error: ErrorBody = serde_json::from_str(r#"{"detail": "Token expired"}"#).unwrap();
        assert_eq!(error.detail, "Token expired");
    }
}
