//! Error types for the photo API client.
//!
//! Every failure the client can hit (transport, non-2xx status, decode)
//! becomes an [`ApiError`]. Screens never surface these beyond a status
//! line: a failed page simply appends nothing.
//!
//! | Category | Examples | Retryable |
//! |----------|----------|-----------|
//! | Network | connect refused, timeout | Yes |
//! | Auth | 401 bad access key | No |
//! | RateLimit | 403 "Rate Limit Exceeded" | Later |
//! | Server | 5xx | Yes |
//! | Client | other 4xx | No |
//! | Decode | malformed JSON, missing fields | No |

mod api;
mod category;

pub use api::{ApiError, ApiResult};
pub use category::ErrorCategory;
