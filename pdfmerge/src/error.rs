//! Error types for pdfmerge.
//!
//! Every failure of the merge pipeline is reported as one [`MergeError`].
//! All variants are terminal: nothing is retried and no partial output is
//! ever written.
//!
//! # Error Categories
//!
//! - **Validation Errors**: too few inputs, missing files, wrong file type
//! - **Processing Errors**: an input could not be parsed by the codec
//! - **Output Errors**: the merged document could not be written or is empty

use std::path::{Path, PathBuf};

/// Result type alias for pdfmerge operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Main error type for the merge pipeline.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// Fewer than two input files were supplied.
    #[error("At least 2 PDF files are required for merging")]
    InsufficientInputs,

    /// An input path does not exist or is not a regular file.
    #[error("Input file not found: {}", path.display())]
    InputNotFound {
        /// Path as given by the caller.
        path: PathBuf,
    },

    /// An input path does not carry a `.pdf` extension.
    #[error("File is not a PDF: {}", path.display())]
    InvalidFileType {
        /// Path as given by the caller.
        path: PathBuf,
    },

    /// An input file exists but has no content.
    #[error("Input file is empty: {}", path.display())]
    EmptyInput {
        /// Path as given by the caller.
        path: PathBuf,
    },

    /// The codec could not open or read the pages of an input.
    #[error("Failed to process {filename}: {reason}")]
    PageProcessingFailed {
        /// Basename of the failing input.
        filename: String,
        /// Reason reported by the codec.
        reason: String,
    },

    /// The output file is missing or zero bytes after writing.
    #[error("Failed to create merged PDF file")]
    EmptyOutput,

    /// The codec or filesystem failed while writing the output.
    #[error("Failed to write merged PDF: {reason}")]
    WriteFailure {
        /// Underlying error, surfaced verbatim.
        reason: String,
    },

    /// Command-line arguments could not be parsed.
    #[error("{message}")]
    Usage {
        /// Usage message shown to the caller.
        message: String,
    },
}

impl MergeError {
    /// Create an InputNotFound error.
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an InvalidFileType error.
    pub fn invalid_file_type(path: impl Into<PathBuf>) -> Self {
        Self::InvalidFileType { path: path.into() }
    }

    /// Create an EmptyInput error.
    pub fn empty_input(path: impl Into<PathBuf>) -> Self {
        Self::EmptyInput { path: path.into() }
    }

    /// Create a PageProcessingFailed error for the input at `path`.
    ///
    /// Only the basename of `path` is kept.
    pub fn page_processing_failed(path: &Path, reason: impl Into<String>) -> Self {
        Self::PageProcessingFailed {
            filename: basename(path),
            reason: reason.into(),
        }
    }

    /// Create a WriteFailure error.
    pub fn write_failure(reason: impl Into<String>) -> Self {
        Self::WriteFailure {
            reason: reason.into(),
        }
    }

    /// Create a Usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Check if this error was raised before any input was processed.
    ///
    /// Validation errors are reported to the user verbatim; processing
    /// errors are reported as a failed merge.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InsufficientInputs
                | Self::InputNotFound { .. }
                | Self::InvalidFileType { .. }
                | Self::EmptyInput { .. }
                | Self::Usage { .. }
        )
    }

    /// Get the process exit code for this error.
    ///
    /// Every failure exits with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Final path component as a display string.
pub(crate) fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
