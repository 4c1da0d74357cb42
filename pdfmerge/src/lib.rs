//! pdfmerge - Concatenate the pages of several PDF files into one document.
//!
//! The library exposes a small, sequential merge pipeline:
//!
//! - Precondition checks on the requested inputs
//! - Ordered page concatenation through a pluggable PDF codec
//! - A structured report (page counts, sizes, timing) on success
//! - A single structured error on failure, with no partial output
//!
//! Byte-level PDF parsing and writing is delegated to the codec. The shipped
//! adapter, [`io::LopdfCodec`], is built on `lopdf`.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::config::MergeRequest;
//! use pdfmerge::merge::merge_pdfs;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = MergeRequest::new(["a.pdf", "b.pdf"], "merged.pdf");
//! let result = merge_pdfs(&request)?;
//! println!("Created {} page document", result.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Observing progress
//!
//! ```no_run
//! use pdfmerge::config::MergeRequest;
//! use pdfmerge::io::LopdfCodec;
//! use pdfmerge::merge::{Merger, TracingObserver};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let request = MergeRequest::new(["a.pdf", "b.pdf", "c.pdf"], "merged.pdf");
//! let mut merger = Merger::with_observer(LopdfCodec::new(), TracingObserver::new());
//! let result = merger.merge(&request)?;
//! println!("{}", result.note);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod validation;


// Re-export commonly used types
pub use config::MergeRequest;
pub use error::{MergeError, Result};
pub use merge::{FileDetail, MergeResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
