//! Error types for the Sonance library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SonanceError`] enum. The three domain variants mirror the failure modes
//! of query handling: a representation the crate does not know
//! ([`SonanceError::UnsupportedRepresentation`]), a representation/dimension
//! pairing that cannot be scored ([`SonanceError::IncomparableQuery`]), and a
//! transcription service that produced nothing
//! ([`SonanceError::EmptyTranscription`]). None of them are retried; all are
//! deterministic functions of the input and are reported synchronously.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Sonance operations.
#[derive(Error, Debug)]
pub enum SonanceError {
    /// I/O errors (corpus files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The declared input representation is not one of the supported values.
    #[error("unsupported input representation: {0}")]
    UnsupportedRepresentation(String),

    /// The query cannot be compared to a record on the requested dimension.
    #[error("incomparable query: {0}")]
    IncomparableQuery(String),

    /// A transcription service returned an empty result.
    #[error("empty transcription: {0}")]
    EmptyTranscription(String),

    /// Text analysis errors (symbol table construction, rule compilation).
    #[error("analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SonanceError.
pub type Result<T> = std::result::Result<T, SonanceError>;

impl SonanceError {
    /// Create a new unsupported-representation error.
    pub fn unsupported_representation<S: Into<String>>(msg: S) -> Self {
        SonanceError::UnsupportedRepresentation(msg.into())
    }

    /// Create a new incomparable-query error.
    pub fn incomparable<S: Into<String>>(msg: S) -> Self {
        SonanceError::IncomparableQuery(msg.into())
    }

    /// Create a new empty-transcription error.
    pub fn empty_transcription<S: Into<String>>(msg: S) -> Self {
        SonanceError::EmptyTranscription(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SonanceError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SonanceError::Other(format!("invalid argument: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SonanceError::Other(msg.into())
    }

    /// True when a record hitting this error should be excluded from ranking
    /// rather than aborting the whole query.
    pub fn is_incomparable(&self) -> bool {
        matches!(
            self,
            SonanceError::IncomparableQuery(_) | SonanceError::EmptyTranscription(_)
        )
    }
}
