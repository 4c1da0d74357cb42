//! Input validation for pdfmerge.
//!
//! Preconditions are checked before any input is opened, one pass per rule,
//! so the first violated rule wins regardless of which file violates it:
//!
//! 1. At least two inputs
//! 2. Every input exists and is a regular file
//! 3. Every input has a `.pdf` extension (case-insensitive)
//! 4. Every input is non-empty
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::config::MergeRequest;
//! use pdfmerge::validation::Validator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = MergeRequest::new(["a.pdf", "b.pdf"], "out.pdf");
//! Validator::new().validate_request(&request)?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use crate::config::{MIN_INPUTS, MergeRequest};
use crate::error::{MergeError, Result};

/// Validator for merge requests.
#[derive(Debug, Clone, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate every precondition of a merge request.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in this order:
    /// - [`MergeError::InsufficientInputs`]
    /// - [`MergeError::InputNotFound`]
    /// - [`MergeError::InvalidFileType`]
    /// - [`MergeError::EmptyInput`]
    pub fn validate_request(&self, request: &MergeRequest) -> Result<()> {
        if request.len() < MIN_INPUTS {
            return Err(MergeError::InsufficientInputs);
        }

        for path in &request.inputs {
            self.check_path_exists(path)?;
        }

        for path in &request.inputs {
            if !has_pdf_extension(path) {
                return Err(MergeError::invalid_file_type(path));
            }
        }

        for path in &request.inputs {
            self.check_not_empty(path)?;
        }

        Ok(())
    }

    /// Check that `path` exists and is a regular file.
    pub fn check_path_exists(&self, path: &Path) -> Result<()> {
        // An unreadable parent directory is reported as not found.
        let exists = path.try_exists().unwrap_or(false);
        if !exists || !path.is_file() {
            return Err(MergeError::input_not_found(path));
        }
        Ok(())
    }

    /// Check that the file at `path` has content.
    pub fn check_not_empty(&self, path: &Path) -> Result<()> {
        let size = std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|_| MergeError::input_not_found(path))?;
        if size == 0 {
            return Err(MergeError::empty_input(path));
        }
        Ok(())
    }
}

/// True if the file name ends in `.pdf`, ignoring case.
///
/// A bare `.pdf` file name is accepted.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().to_lowercase().ends_with(".pdf"))
}
