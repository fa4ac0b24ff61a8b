//! Error types for search-widget-layout
//!
//! Form document I/O gets its own error enum; the top-level [`Error`] wraps
//! it together with configuration and reconciliation errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::error::ConfigError;
use layout_ordering::OrderingError;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// Form document or site data error
    #[error(transparent)]
    Form(#[from] FormError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reconciliation error
    #[error(transparent)]
    Ordering(#[from] OrderingError),
}

/// Form document and site data file errors
#[derive(Debug, Error)]
pub enum FormError {
    /// I/O error reading a file
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON for the expected shape
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File that could not be parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the form document
    #[error("Failed to serialize form: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Failed to write the form document atomically
    #[error("Failed to write form atomically: {path} - {message}")]
    WriteAtomic {
        /// Target path
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

/// Result type alias for search-widget-layout operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use layout_ordering::{Column, Section};

    #[test]
    fn test_form_parse_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FormError::Parse {
            path: PathBuf::from("/tmp/form.json"),
            source,
        };
        let display = err.to_string();
        assert!(display.contains("/tmp/form.json"), "Error should contain path");
        assert!(display.contains("EOF"), "Error should contain parse details");
    }

    #[test]
    fn test_form_read_error_display_includes_cause() {
        let err = FormError::Read {
            path: PathBuf::from("/tmp/site.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        };
        let display = err.to_string();
        assert!(display.contains("/tmp/site.json"));
        assert!(display.ends_with(": permission denied"), "got: {display}");
    }

    #[test]
    fn test_write_atomic_display() {
        let err = FormError::WriteAtomic {
            path: PathBuf::from("/tmp/form.json"),
            message: "Failed to fsync".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("/tmp/form.json"));
        assert!(display.contains("Failed to fsync"));
    }

    #[test]
    fn test_ordering_error_is_transparent() {
        let err: Error = OrderingError::NotFound {
            column: Column::ColumnOne,
            section: Section::SectionOne,
            id: "gone".to_string(),
        }
        .into();
        let display = err.to_string();
        assert!(display.starts_with("Item not found"));
        assert!(display.contains("gone"));
    }
}
