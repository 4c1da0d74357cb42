//! Core merge pipeline.
//!
//! Runs one merge from start to finish:
//! `Validating → Reading(1..N) → Writing → Verifying → Done | Failed`.
//!
//! Inputs are processed strictly in order. Each input is opened, its pages
//! are moved into the output document, and it is dropped before the next one
//! is opened. Nothing is written until every input has been read, so a
//! failure never leaves a partial merge on disk.

use std::path::Path;
use std::time::Instant;

use crate::config::MergeRequest;
use crate::error::{MergeError, Result, basename};
use crate::io::{LopdfCodec, PdfCodec};
use crate::merge::observer::{MergeObserver, NoopObserver};
use crate::merge::report::{FileDetail, MergeResult, merge_note};
use crate::validation::Validator;

/// PDF merger over a codec `C`, reporting progress to observer `O`.
pub struct Merger<C, O = NoopObserver> {
    /// Codec used to read inputs and write the output.
    codec: C,

    /// Receiver of progress events.
    observer: O,

    /// Precondition checks.
    validator: Validator,
}

impl<C: PdfCodec> Merger<C, NoopObserver> {
    /// Create a merger that reports nothing.
    pub fn new(codec: C) -> Self {
        Self::with_observer(codec, NoopObserver)
    }
}

impl Default for Merger<LopdfCodec, NoopObserver> {
    fn default() -> Self {
        Self::new(LopdfCodec::new())
    }
}

impl<C: PdfCodec, O: MergeObserver> Merger<C, O> {
    /// Create a merger reporting to `observer`.
    pub fn with_observer(codec: C, observer: O) -> Self {
        Self {
            codec,
            observer,
            validator: Validator::new(),
        }
    }

    /// The observer this merger reports to.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Merge the inputs of `request` into its output path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A precondition fails (see [`Validator::validate_request`])
    /// - An input cannot be parsed by the codec
    /// - The output cannot be written
    /// - The written output is missing or empty
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfmerge::merge::Merger;
    /// # use pdfmerge::io::LopdfCodec;
    /// # use pdfmerge::config::MergeRequest;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let request = MergeRequest::new(["a.pdf", "b.pdf"], "out.pdf");
    /// let mut merger = Merger::new(LopdfCodec::new());
    /// let result = merger.merge(&request)?;
    /// println!("Merged {} files into {} pages",
    ///          result.files_processed,
    ///          result.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&mut self, request: &MergeRequest) -> Result<MergeResult> {
        let outcome = self.run(request);
        match &outcome {
            Ok(result) => self.observer.on_complete(result),
            Err(err) => self.observer.on_error(err),
        }
        outcome
    }

    fn run(&mut self, request: &MergeRequest) -> Result<MergeResult> {
        let start = Instant::now();

        self.validator.validate_request(request)?;

        let total = request.len();
        let mut output = self.codec.new_output();
        let mut total_pages = 0;
        let mut file_details = Vec::with_capacity(total);

        for (index, path) in request.inputs.iter().enumerate() {
            self.observer.on_file_start(index, total, path);

            let detail = self.read_input(&mut output, path)?;
            total_pages += detail.page_count;

            self.observer.on_file_done(index, total, &detail);
            file_details.push(detail);
        }

        self.observer.on_write_start(request.output(), total_pages);
        self.codec
            .write(&mut output, request.output())
            .map_err(|e| MergeError::write_failure(e.to_string()))?;
        drop(output);

        let output_size_bytes = verify_output(request.output())?;
        let processing_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        Ok(MergeResult {
            success: true,
            method: self.codec.label().to_string(),
            total_pages,
            files_processed: file_details.len(),
            processing_time_ms,
            output_size_bytes,
            output_path: request.output().display().to_string(),
            file_details,
            note: merge_note(total),
        })
    }

    /// Open one input and append all of its pages to `output`.
    fn read_input(&self, output: &mut C::Output, path: &Path) -> Result<FileDetail> {
        let document = self
            .codec
            .open(path)
            .map_err(|e| MergeError::page_processing_failed(path, e.to_string()))?;

        let page_count = self.codec.page_count(&document);
        let appended = self
            .codec
            .append_pages(output, document)
            .map_err(|e| MergeError::page_processing_failed(path, e.to_string()))?;

        if appended != page_count {
            return Err(MergeError::page_processing_failed(
                path,
                format!("expected {page_count} pages but appended {appended}"),
            ));
        }

        let size_bytes = std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| MergeError::page_processing_failed(path, e.to_string()))?;

        Ok(FileDetail {
            filename: basename(path),
            page_count,
            size_bytes,
        })
    }
}

/// Size of the written output, failing if it is missing or empty.
fn verify_output(path: &Path) -> Result<u64> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(meta.len()),
        _ => Err(MergeError::EmptyOutput),
    }
}
