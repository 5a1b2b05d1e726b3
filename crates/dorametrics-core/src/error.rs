//! Shared error type across dorametrics crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed arguments.
    BadRequest,
    /// No provider registered the requested tool.
    UnknownTool,
    /// Requested resource (e.g. a static asset) does not exist.
    NotFound,
    /// Unsupported envelope version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnknownTool => "UNKNOWN_TOOL",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, DoraError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum DoraError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unsupported protocol version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl DoraError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            DoraError::BadRequest(_) => ClientCode::BadRequest,
            DoraError::UnknownTool(_) => ClientCode::UnknownTool,
            DoraError::NotFound(_) => ClientCode::NotFound,
            DoraError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            DoraError::Internal(_) => ClientCode::Internal,
        }
    }
}
