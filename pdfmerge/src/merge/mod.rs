//! PDF merging.
//!
//! - [`merger`]: the sequential merge pipeline
//! - [`observer`]: progress events emitted by the pipeline
//! - [`report`]: the success report and its per-file details

pub mod merger;
pub mod observer;
pub mod report;

pub use merger::Merger;
pub use observer::{MergeObserver, NoopObserver, TracingObserver};
pub use report::{FileDetail, MergeResult};

use crate::config::MergeRequest;
use crate::error::Result;
use crate::io::LopdfCodec;

/// Merge PDFs with the `lopdf` codec and no progress reporting.
///
/// Convenience wrapper around [`Merger`].
///
/// # Errors
///
/// See [`Merger::merge`].
pub fn merge_pdfs(request: &MergeRequest) -> Result<MergeResult> {
    Merger::new(LopdfCodec::new()).merge(request)
}
