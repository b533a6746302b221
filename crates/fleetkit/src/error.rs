//! Error types for fleet auditing operations.
//!
//! Every failure in this crate is fatal for the run: nothing is retried or
//! recovered locally, and collaborator failures surface unchanged at the top
//! level.

use std::io;
use std::path::PathBuf;

/// Result type alias for fleet auditing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while auditing a fleet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or incomplete run configuration (missing credentials,
    /// named-but-missing exclusions file).
    #[error("configuration error: {0}")]
    Config(String),

    /// The requested source endpoint is not in the fleet listing.
    #[error("source endpoint not found in the fleet: {name}")]
    SourceNotFound {
        /// Requested source name, as given on the command line.
        name: String,
    },

    /// Explicit target names were given but none of them resolved.
    #[error("no requested target endpoints found in the fleet")]
    NoTargetsFound,

    /// The management service failed a device listing or software request.
    #[error("dashboard request failed: {message}")]
    Collaborator {
        /// Error message from the failed request.
        message: String,
        /// HTTP status code if the service answered at all.
        status: Option<u16>,
    },

    /// The service answered with a payload this crate cannot parse.
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// IO error during file operations.
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path involved in the error.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a collaborator error.
    pub fn collaborator(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Collaborator {
            message: message.into(),
            status,
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Collaborator {
                message: format!("HTTP {code}"),
                status: Some(code),
            },
            other => Self::Collaborator {
                message: other.to_string(),
                status: None,
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}
