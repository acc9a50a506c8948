use thiserror::Error;

/// Errors raised by a [`StorefrontApi`](super::StorefrontApi) call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No response arrived: connection failure or timeout.
    #[error("Network error. Please check your connection.")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Request failed with status code {status}")]
    Status {
        status: u16,
        /// `message` field of the response body, if it had one.
        message: Option<String>,
    },

    /// The response body was not what the endpoint promises.
    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

impl ApiError {
    /// The message the server put in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Message to surface in a store's `error` field.
    ///
    /// Prefers the server-supplied message, then the error's own description, then `default`.
    pub fn user_message(&self, default: &str) -> String {
        if let Some(message) = self.server_message() {
            return message.to_string();
        }
        let own = self.to_string();
        if own.trim().is_empty() {
            default.to_string()
        } else {
            own
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() || e.is_connect() || e.is_request() {
            ApiError::Network(e.to_string())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: None,
            }
        } else {
            ApiError::Other(e.to_string())
        }
    }
}
