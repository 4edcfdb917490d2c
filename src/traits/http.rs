//! HTTP client trait abstraction.
//!
//! The photo API and the image CDN are both reached through plain GET
//! requests, so the seam is a single async method. Production code uses
//! [`crate::adapters::ReqwestHttpClient`]; tests use
//! [`crate::adapters::mock::MockHttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers (lower-cased names)
    pub headers: Headers,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response without headers.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Create a new response with headers.
    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if the response is a client error (4xx status).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Get the response body as text, replacing invalid UTF-8.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Look up a header by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Transport-level HTTP errors. Status codes are not errors at this layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HttpError {
    /// Connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Body could not be read
    #[error("IO error: {0}")]
    Io(String),
    /// Other error
    #[error("HTTP error: {0}")]
    Other(String),
}

impl HttpError {
    /// Whether retrying the same request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            HttpError::ConnectionFailed(_) | HttpError::Timeout(_) | HttpError::Io(_)
        )
    }
}

/// Trait for HTTP client operations.
///
/// # Example
///
/// ```ignore
/// use unsplash_tui::traits::{HttpClient, Headers};
///
/// async fn fetch<C: HttpClient>(client: &C) -> Result<usize, HttpError> {
///     let response = client.get("https://api.unsplash.com/photos", &Headers::new()).await?;
///     Ok(response.body.len())
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and buffer the full body.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
