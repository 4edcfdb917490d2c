use std::fmt;

/// High-level classification of an [`super::ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems
    Network,
    /// Access key missing or rejected (401)
    Auth,
    /// Hourly request quota used up (403 with rate-limit body or headers)
    RateLimit,
    /// HTTP 5xx
    Server,
    /// Other HTTP 4xx
    Client,
    /// The body was not the JSON shape we expect
    Decode,
}

impl ErrorCategory {
    /// Returns true if errors in this category are transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::RateLimit => "rate_limit",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Decode => "decode",
        }
    }

    /// Suggested next step shown next to the status-line message.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "check your connection and scroll to retry",
            ErrorCategory::Auth => "check UNSPLASH_ACCESS_KEY",
            ErrorCategory::RateLimit => "wait for the hourly quota to reset",
            ErrorCategory::Server => "try again shortly",
            ErrorCategory::Client | ErrorCategory::Decode => "this is likely a bug",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
