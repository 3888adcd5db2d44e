//! Error types for the IGDB client.
//!
//! # Design
//! Errors fall into five groups, and callers usually care which group an
//! error belongs to rather than the exact variant:
//! - input validation (`NegativeId`, `EmptyIds`), raised before any request;
//! - option validation (`OutOfRange`), raised when an `Options` value is
//!   finalized, also before any request;
//! - transport (`Transport`, `HttpStatus`), passed through unchanged;
//! - decoding (`InvalidJson`), for empty or unparseable bodies;
//! - semantic-empty (`NoResults`), for a well-formed response with no data.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by `Client` and its entity services.
#[derive(Debug, Error)]
pub enum Error {
    /// An ID argument was negative.
    #[error("negative ID")]
    NegativeId,

    /// A list lookup was given no IDs.
    #[error("empty list of IDs")]
    EmptyIds,

    /// A paging option fell outside its accepted range.
    #[error("{option} out of range: {value}")]
    OutOfRange { option: &'static str, value: i64 },

    /// The response parsed but held no entities.
    #[error("no results")]
    NoResults,

    /// The response body was empty or not valid JSON for the expected shape.
    #[error("invalid JSON in response body: {0}")]
    InvalidJson(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request never produced a response (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The query string could not be form-encoded.
    #[error("query encoding failed: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl Error {
    /// True for bad arguments detected before any request was built.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::NegativeId | Error::EmptyIds)
    }

    /// True when the supplied `Options` failed validation.
    pub fn is_option_error(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }

    /// True when the request succeeded but matched nothing.
    pub fn is_no_results(&self) -> bool {
        matches!(self, Error::NoResults)
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        Error::Transport(Box::new(err))
    }
}
