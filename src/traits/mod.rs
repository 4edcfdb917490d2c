//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET operations used by the Unsplash client and
//!   the thumbnail loader

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
