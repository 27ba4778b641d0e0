//! Error types for the YNAB export library
//!
//! Constructing a transaction record and rendering its export row are total
//! operations that cannot fail. Errors exist only on the CSV serialization
//! path, where the caller-supplied writer is involved.

use thiserror::Error;

/// Error raised while serializing export rows to CSV
///
/// Each variant carries a descriptive message suitable for CLI output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// I/O error from the underlying writer
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Error reported by the CSV serializer
    #[error("CSV write error: {message}")]
    Csv {
        /// Description of the serialization error
        message: String,
    },
}

impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        ExportError::Csv {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::io_error(
        ExportError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::csv_error(
        ExportError::Csv { message: "invalid record".to_string() },
        "CSV write error: invalid record"
    )]
    fn test_error_display(#[case] error: ExportError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ExportError = io_error.into();
        assert!(matches!(error, ExportError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
