//! Shared error type across smsGate crates.

use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid input / malformed request or config.
    BadRequest,
    /// Required platform capability is absent.
    Unsupported,
    /// Lookup key has no entry.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal gateway error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and rendered diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Unsupported => "UNSUPPORTED_OPERATION",
            ErrorCode::NotFound => "NO_SUCH_ELEMENT",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SmsGateError>;

/// Unified error type used by core and gateway.
///
/// Only `Unsupported` and `NotFound` ever reach API callers; admission
/// denials are silent no-ops and never become errors (see the pipeline).
#[derive(Debug, Error)]
pub enum SmsGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported operation: {0}")]
    Unsupported(String),
    #[error("no such element: {0}")]
    NotFound(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SmsGateError {
    /// Map internal error to a stable caller-facing code.
    pub fn client_code(&self) -> ErrorCode {
        match self {
            SmsGateError::BadRequest(_) => ErrorCode::BadRequest,
            SmsGateError::Unsupported(_) => ErrorCode::Unsupported,
            SmsGateError::NotFound(_) => ErrorCode::NotFound,
            SmsGateError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            SmsGateError::Internal(_) => ErrorCode::Internal,
        }
    }
}
