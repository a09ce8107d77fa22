//! Error types for cut-list generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for cut-list processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Request could not be decoded (-3)
    ParseError = -3,
    /// No generator for the cabinet type (E100)
    UnsupportedCabinetType = 100,
    /// Panel dimension is not physically possible (E101)
    InvalidCabinetGeometry = 101,
    /// Type-specific configuration missing or inconsistent (E200)
    MalformedRequest = 200,
}

/// Main error type for the cut-list engine.
#[derive(Debug, Error)]
pub enum CutListError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Cabinet {index}: unsupported cabinet type '{cabinet_type}'")]
    UnsupportedCabinetType { index: usize, cabinet_type: String },

    #[error("Cabinet {index}: invalid geometry, '{field}' resolves to {value} mm")]
    InvalidCabinetGeometry {
        index: usize,
        field: String,
        value: i32,
    },

    #[error("Cabinet {index}: malformed request: {message}")]
    MalformedRequest { index: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CutListError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CutListError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CutListError::EmptyFile { .. } => ErrorCode::EmptyFile,
            CutListError::UnsupportedCabinetType { .. } => ErrorCode::UnsupportedCabinetType,
            CutListError::InvalidCabinetGeometry { .. } => ErrorCode::InvalidCabinetGeometry,
            CutListError::MalformedRequest { .. } => ErrorCode::MalformedRequest,
            CutListError::Json(_) => ErrorCode::ParseError,
            CutListError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Index of the cabinet that caused the error, if the error is cabinet-specific.
    pub fn cabinet_index(&self) -> Option<usize> {
        match self {
            CutListError::UnsupportedCabinetType { index, .. }
            | CutListError::InvalidCabinetGeometry { index, .. }
            | CutListError::MalformedRequest { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub(crate) fn geometry(index: usize, field: impl Into<String>, value: i32) -> Self {
        CutListError::InvalidCabinetGeometry {
            index,
            field: field.into(),
            value,
        }
    }

    pub(crate) fn malformed(index: usize, message: impl Into<String>) -> Self {
        CutListError::MalformedRequest {
            index,
            message: message.into(),
        }
    }
}

/// Result type alias for cut-list operations.
pub type Result<T> = std::result::Result<T, CutListError>;
