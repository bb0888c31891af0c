//! Executor error types.
//!
//! The executor never fails on absent criteria or empty results; its only
//! error surface is upstream document access:
//! - VIEW_DOCUMENT_UNAVAILABLE (FATAL)

use std::fmt;

use crate::document::DocumentError;

/// Severity levels for executor errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The host must give up on this document
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Executor-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorCode {
    /// The host invalidated the document before the query could run
    ViewDocumentUnavailable,
}

impl ExecutorErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorErrorCode::ViewDocumentUnavailable => "VIEW_DOCUMENT_UNAVAILABLE",
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }
}

impl fmt::Display for ExecutorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Executor error with context.
#[derive(Debug)]
pub struct ExecutorError {
    code: ExecutorErrorCode,
    message: String,
}

impl ExecutorError {
    pub fn document_unavailable(reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::ViewDocumentUnavailable,
            message: reason.into(),
        }
    }

    pub fn code(&self) -> ExecutorErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ExecutorError {}

impl From<DocumentError> for ExecutorError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::Unavailable => Self::document_unavailable(err.to_string()),
        }
    }
}

/// Result type for executor operations.
pub type ExecutorResult<T> = Result<T, ExecutorError>;
