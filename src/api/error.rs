//! API Error Types

use thiserror::Error;

/// Message shown whenever the backend cannot be reached at all
pub const CONNECTIVITY_MESSAGE: &str =
    "Could not connect to the server. Please check your connection and try again.";

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything that can go wrong between a user action and a parsed response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Rejected client-side, or a failure the user only sees as a fixed message
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response; carries the backend's `detail` or the status text
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Request could not be sent or the response could not be read
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Connectivity,

    /// Response parsed but did not have the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_facing() {
        let err = ApiError::Api { status: 400, message: "Email already registered".into() };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(400));

        assert_eq!(ApiError::Connectivity.to_string(), CONNECTIVITY_MESSAGE);
        assert_eq!(ApiError::validation("Please enter an admin key.").to_string(), "Please enter an admin key.");
    }
}
