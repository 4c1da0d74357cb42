//! Merge request configuration.
//!
//! A [`MergeRequest`] is the normalized input to the merge pipeline: the
//! ordered list of files to concatenate and the path of the document to
//! create. It is built once from command-line arguments (or directly by
//! library callers) and is not persisted.

use std::path::{Path, PathBuf};

/// Minimum number of inputs accepted by the pipeline.
pub const MIN_INPUTS: usize = 2;

/// Ordered inputs and the output path for one merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Input PDF files, in the order their pages are appended.
    pub inputs: Vec<PathBuf>,

    /// Output PDF path. Overwritten if it already exists.
    pub output: PathBuf,
}

impl MergeRequest {
    /// Create a request from any iterable of paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfmerge::config::MergeRequest;
    ///
    /// let request = MergeRequest::new(["a.pdf", "b.pdf"], "out.pdf");
    /// assert_eq!(request.inputs.len(), 2);
    /// ```
    pub fn new<I, P>(inputs: I, output: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: output.into(),
        }
    }

    /// Output path as given.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Number of inputs.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// True when no inputs were given.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
