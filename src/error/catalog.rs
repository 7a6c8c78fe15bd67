//! Item catalog errors

use super::SplitterError;

/// Creates a catalog read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SplitterError {
    SplitterError::CatalogReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a catalog parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SplitterError {
    SplitterError::CatalogParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid catalog error
pub fn invalid(message: impl Into<String>) -> SplitterError {
    SplitterError::CatalogInvalid {
        message: message.into(),
    }
}
