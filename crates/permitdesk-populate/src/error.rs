//! Error types for the population flow

use thiserror::Error;

/// Errors that can occur while populating a form
///
/// `Validation` is always raised before any provider call; the other two
/// variants describe the single provider round trip. Nothing is retried and
/// nothing is swallowed - every failure reaches the caller.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Request failed validation; no network cost was incurred
    #[error("validation error: {0}")]
    Validation(String),

    /// Provider returned nothing that parses as extracted data
    #[error("provider returned no extractable data")]
    EmptyResponse,

    /// Network or provider-level failure, including timeout
    #[error("provider transport error: {0}")]
    Transport(String),
}
