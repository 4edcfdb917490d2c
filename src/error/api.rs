use thiserror::Error;

use super::category::ErrorCategory;
use crate::traits::HttpError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned by [`crate::unsplash::UnsplashClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The body was not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body parsed but a required field was absent
    #[error("Response is missing `{0}`")]
    MissingField(&'static str),
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Http(_) => ErrorCategory::Network,
            ApiError::Status { status: 401, .. } => ErrorCategory::Auth,
            ApiError::Status { status: 403, message }
                if message.to_ascii_lowercase().contains("rate limit") =>
            {
                ErrorCategory::RateLimit
            }
            ApiError::Status { status: 429, .. } => ErrorCategory::RateLimit,
            ApiError::Status { status, .. } if *status >= 500 => ErrorCategory::Server,
            ApiError::Status { .. } => ErrorCategory::Client,
            ApiError::Decode(_) | ApiError::MissingField(_) => ErrorCategory::Decode,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Http(err) => err.is_transient(),
            _ => self.category().is_retryable(),
        }
    }

    /// One-line message for the status bar.
    pub fn user_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => "Could not reach Unsplash".to_string(),
            ErrorCategory::Auth => "Unsplash rejected the access key".to_string(),
            ErrorCategory::RateLimit => "Unsplash rate limit reached".to_string(),
            ErrorCategory::Server => "Unsplash is having trouble".to_string(),
            ErrorCategory::Client | ErrorCategory::Decode => {
                format!("Unexpected response: {}", self)
            }
        }
    }
}
