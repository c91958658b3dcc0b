//! Error types for the digest library.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Classification of a failed exchange request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkErrorKind {
    /// The request did not complete within the client timeout
    Timeout,
    /// The exchange host could not be reached
    Connection,
    /// The exchange answered with a non-success HTTP status
    Status(u16),
    /// The response body was not in the expected shape
    Decode,
    /// Any other transport failure
    Request,
}

impl NetworkErrorKind {
    /// Classify a reqwest error.
    pub fn classify(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connection
        } else if let Some(status) = error.status() {
            Self::Status(status.as_u16())
        } else if error.is_decode() {
            Self::Decode
        } else {
            Self::Request
        }
    }
}

impl fmt::Display for NetworkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "request timed out"),
            Self::Connection => write!(f, "connection failed"),
            Self::Status(code) => write!(f, "unexpected HTTP status {code}"),
            Self::Decode => write!(f, "malformed response"),
            Self::Request => write!(f, "request failed"),
        }
    }
}

/// Comprehensive error type for all digest operations.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Exchange request failures
    #[error("Network error on {endpoint}: {kind}")]
    Network {
        endpoint: String,
        kind: NetworkErrorKind,
        #[source]
        source: reqwest::Error,
    },
    /// The exchange search returned no code for a symbol
    #[error("No scrip code found for symbol '{symbol}'")]
    ScripNotFound { symbol: String },
    /// Watchlist file is missing
    #[error("Watchlist '{path}' not found. Use -f to generate watchlist.json")]
    WatchlistNotFound { path: PathBuf },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating network errors tagged with the failing endpoint.
pub struct NetworkErrorBuilder {
    endpoint: String,
}

impl NetworkErrorBuilder {
    /// Create a new network error builder for an endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Build the error with the given source, classifying its kind.
    pub fn with_source(self, source: reqwest::Error) -> DigestError {
        DigestError::Network {
            endpoint: self.endpoint,
            kind: NetworkErrorKind::classify(&source),
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> DigestError {
        DigestError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl DigestError {
    /// Creates a builder for network errors.
    pub fn network(endpoint: impl Into<String>) -> NetworkErrorBuilder {
        NetworkErrorBuilder::new(endpoint)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns the network failure kind, if this is a network error.
    pub fn network_kind(&self) -> Option<NetworkErrorKind> {
        match self {
            Self::Network { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// True for timeouts, connection failures and other exchange errors.
    pub fn is_network(&self) -> bool {
        self.network_kind().is_some()
    }
}

/// Extension trait for mapping I/O results onto [`DigestError::FileSystem`].
pub trait FileSystemResultExt<T> {
    /// Attach the path the operation was working on.
    fn fs_context(self, path: &Path) -> Result<T>;
}

impl<T> FileSystemResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| DigestError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to DigestError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| DigestError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for digest operations
pub type Result<T> = std::result::Result<T, DigestError>;
