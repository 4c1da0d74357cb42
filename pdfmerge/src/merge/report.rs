//! Merge report types.

use serde::{Deserialize, Serialize};

/// Per-input summary included in a merge report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetail {
    /// Basename of the input file.
    pub filename: String,

    /// Number of pages taken from the input.
    #[serde(rename = "pages")]
    pub page_count: usize,

    /// Size of the input file in bytes, from filesystem metadata.
    #[serde(rename = "size")]
    pub size_bytes: u64,
}

/// Report of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    /// Always true; failures are reported as errors instead.
    pub success: bool,

    /// Label of the codec that performed the merge.
    pub method: String,

    /// Sum of the page counts of all inputs.
    pub total_pages: usize,

    /// Number of inputs merged.
    pub files_processed: usize,

    /// Wall-clock time from start to verified output, in milliseconds.
    #[serde(rename = "processingTime")]
    pub processing_time_ms: u64,

    /// Size of the written output in bytes.
    #[serde(rename = "outputSize")]
    pub output_size_bytes: u64,

    /// Output path, echoed back.
    pub output_path: String,

    /// One entry per input, in input order.
    pub file_details: Vec<FileDetail>,

    /// Human-readable summary.
    pub note: String,
}

/// Summary line for a merge of `files` inputs.
pub fn merge_note(files: usize) -> String {
    format!("Successfully merged {files} PDF files into one document")
}
