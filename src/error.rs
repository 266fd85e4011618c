use std::fmt;
use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;

/// Result type for trainviz operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for the reporting helpers
#[derive(Debug, Clone)]
pub enum ReportError {
    /// Input sequences or matrices have incompatible shapes
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Named column is absent from a dataset table (or has the wrong kind)
    MissingColumn(String),

    /// Output directory does not exist and creation was not requested
    MissingOutputDir(PathBuf),

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Errors raised by the plotting backend
    DrawingError(String),

    /// Operation is declared but not available yet
    NotImplemented(&'static str),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            ReportError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            ReportError::MissingColumn(name) => write!(f, "Missing column: {}", name),
            ReportError::MissingOutputDir(dir) => {
                write!(f, "Output directory does not exist: {}", dir.display())
            }
            ReportError::IoError(msg) => write!(f, "IO error: {}", msg),
            ReportError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ReportError::DrawingError(msg) => write!(f, "Drawing error: {}", msg),
            ReportError::NotImplemented(op) => write!(f, "{} is not implemented yet", op),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::SerializationError(err.to_string())
    }
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ReportError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ReportError::DrawingError(err.to_string())
    }
}

// Helper functions for common error patterns
impl ReportError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        ReportError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        ReportError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
