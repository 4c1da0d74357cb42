//! External report shapes.
//!
//! A merge ends in exactly one JSON object:
//!
//! - on success, the [`MergeResult`] itself
//! - on failure, an [`ErrorReport`] `{ "error": ..., "success": false }`
//!
//! Validation failures carry their message verbatim. Failures after
//! validation are prefixed with `PDF merge failed: `.
//!
//! # Examples
//!
//! ```
//! use pdfmerge::error::MergeError;
//! use pdfmerge::output::Report;
//!
//! let report = Report::from_outcome(Err(MergeError::InsufficientInputs));
//! assert_eq!(report.exit_code(), 1);
//! assert!(report.to_json().contains("At least 2 PDF files"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, Result};
use crate::merge::MergeResult;

/// Prefix for failures that happen after validation.
const MERGE_FAILED_PREFIX: &str = "PDF merge failed: ";

/// Failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Human-readable failure message.
    pub error: String,

    /// Always false.
    pub success: bool,
}

impl From<&MergeError> for ErrorReport {
    fn from(err: &MergeError) -> Self {
        let error = if err.is_validation() {
            err.to_string()
        } else {
            format!("{MERGE_FAILED_PREFIX}{err}")
        };
        Self {
            error,
            success: false,
        }
    }
}

/// The single payload emitted for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Merge succeeded.
    Success(MergeResult),
    /// Merge failed.
    Failure(ErrorReport),
}

impl Report {
    /// Build the report for a pipeline outcome.
    pub fn from_outcome(outcome: Result<MergeResult>) -> Self {
        match outcome {
            Ok(result) => Self::Success(result),
            Err(err) => Self::Failure(ErrorReport::from(&err)),
        }
    }

    /// Process exit code: 0 on success, 1 on failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success(_) => 0,
            Self::Failure(_) => 1,
        }
    }

    /// Render as a single-line JSON object.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            serde_json::json!({ "error": err.to_string(), "success": false }).to_string()
        })
    }
}
