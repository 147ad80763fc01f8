//! Error types for the placeholder API client.
//!
//! # Design
//! Every operation returns the same `ApiError`. Each variant names the stage
//! that failed and keeps the underlying cause reachable through `source()`.
//! `HttpStatus` only comes out of decoded fetches; raw and mutating calls
//! report the status to the observer instead of checking it.

use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed cause of a transport failure.
pub type TransportCause = Box<dyn StdError + Send + Sync + 'static>;

/// Errors returned by `ApiClient` parse methods and `PlaceholderClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response body could not be read.
    #[error("transport failed: {0}")]
    Transport(#[source] TransportCause),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decoding(#[source] serde_json::Error),

    /// A decoded fetch got a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The id cannot be used as part of a single output file name.
    #[error("invalid user id {id:?}: must be one file name component")]
    InvalidId { id: String },

    /// The user has no posts, so there is no last post to pick.
    #[error("user {user_id} has no posts")]
    EmptyResult { user_id: String },

    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse category of an `ApiError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Encoding,
    Decoding,
    HttpStatus,
    InvalidId,
    EmptyResult,
    FileWrite,
}

impl ApiError {
    pub fn transport(cause: impl Into<TransportCause>) -> Self {
        ApiError::Transport(cause.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport(_) => ErrorKind::Transport,
            ApiError::Encoding(_) => ErrorKind::Encoding,
            ApiError::Decoding(_) => ErrorKind::Decoding,
            ApiError::HttpStatus { .. } => ErrorKind::HttpStatus,
            ApiError::InvalidId { .. } => ErrorKind::InvalidId,
            ApiError::EmptyResult { .. } => ErrorKind::EmptyResult,
            ApiError::FileWrite { .. } => ErrorKind::FileWrite,
        }
    }
}
