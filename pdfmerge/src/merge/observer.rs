//! Progress observation for the merge pipeline.
//!
//! The pipeline reports progress through a [`MergeObserver`] instead of
//! printing. [`TracingObserver`] forwards events to `tracing`;
//! [`NoopObserver`] discards them.

use std::path::Path;

use crate::error::MergeError;
use crate::merge::report::{FileDetail, MergeResult};

/// Receiver of merge pipeline events.
///
/// All methods default to doing nothing.
pub trait MergeObserver {
    /// An input is about to be opened. `index` is zero-based.
    fn on_file_start(&mut self, _index: usize, _total: usize, _path: &Path) {}

    /// All pages of an input were appended.
    fn on_file_done(&mut self, _index: usize, _total: usize, _detail: &FileDetail) {}

    /// The merged document is about to be written.
    fn on_write_start(&mut self, _output: &Path, _total_pages: usize) {}

    /// The merge succeeded.
    fn on_complete(&mut self, _result: &MergeResult) {}

    /// The merge failed. Called at most once per merge.
    fn on_error(&mut self, _error: &MergeError) {}
}

impl<T: MergeObserver + ?Sized> MergeObserver for &mut T {
    fn on_file_start(&mut self, index: usize, total: usize, path: &Path) {
        (**self).on_file_start(index, total, path);
    }

    fn on_file_done(&mut self, index: usize, total: usize, detail: &FileDetail) {
        (**self).on_file_done(index, total, detail);
    }

    fn on_write_start(&mut self, output: &Path, total_pages: usize) {
        (**self).on_write_start(output, total_pages);
    }

    fn on_complete(&mut self, result: &MergeResult) {
        (**self).on_complete(result);
    }

    fn on_error(&mut self, error: &MergeError) {
        (**self).on_error(error);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {}

/// Observer that emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Create a new tracing observer.
    pub fn new() -> Self {
        Self
    }
}

impl MergeObserver for TracingObserver {
    fn on_file_start(&mut self, index: usize, total: usize, path: &Path) {
        tracing::info!(
            "Processing file {}/{}: {}",
            index + 1,
            total,
            crate::error::basename(path)
        );
    }

    fn on_file_done(&mut self, _index: usize, _total: usize, detail: &FileDetail) {
        tracing::info!(
            pages = detail.page_count,
            bytes = detail.size_bytes,
            "Added {} pages from {}",
            detail.page_count,
            detail.filename
        );
    }

    fn on_write_start(&mut self, output: &Path, total_pages: usize) {
        tracing::info!(
            "Writing merged PDF with {} total pages to {}",
            total_pages,
            output.display()
        );
    }

    fn on_complete(&mut self, result: &MergeResult) {
        tracing::info!(
            output_size = result.output_size_bytes,
            "PDF merge completed successfully in {}ms",
            result.processing_time_ms
        );
    }

    fn on_error(&mut self, error: &MergeError) {
        tracing::error!("PDF merge failed: {error}");
    }
}
