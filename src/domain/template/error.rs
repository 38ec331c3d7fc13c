// Errors raised while compiling templates or matching URIs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("scheme mismatch: expected '{expected}', got '{actual}'")]
    SchemeMismatch { expected: String, actual: String },

    #[error("host mismatch: expected '{expected}', got '{actual}'")]
    HostMismatch { expected: String, actual: String },

    #[error("path segment count mismatch: expected {expected}, got {actual}")]
    PathSegmentCountMismatch { expected: usize, actual: usize },

    #[error("path segment {index} mismatch: expected '{expected}', got '{actual}'")]
    PathSegmentLiteralMismatch {
        index: usize,
        expected: String,
        actual: String,
    },
}
