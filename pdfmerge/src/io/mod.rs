//! PDF codec capability and its `lopdf` adapter.
//!
//! The merge pipeline never touches a PDF library directly. It depends on
//! the narrow [`PdfCodec`] trait:
//!
//! - open and parse an input into a page collection
//! - report its page count
//! - append all of its pages to an accumulating output document
//! - serialize the accumulated document to a file
//!
//! [`LopdfCodec`] implements the trait on top of `lopdf`.

pub mod reader;
pub mod writer;

pub use reader::PdfReader;
pub use writer::{MergedDocument, PdfWriter};

use std::path::Path;

/// Errors reported by a codec.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input could not be parsed.
    #[error("{0}")]
    Parse(String),

    /// The input is encrypted.
    #[error("PDF is encrypted and cannot be merged")]
    Encrypted,

    /// The document parsed but its structure is unusable.
    #[error("invalid document structure: {0}")]
    Structure(String),

    /// Serialization of the output document failed.
    #[error("{0}")]
    Serialize(String),

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Capability interface for a PDF library.
pub trait PdfCodec {
    /// A parsed input document.
    type Document;

    /// The accumulating output document.
    type Output;

    /// Label identifying this codec in merge reports.
    fn label(&self) -> &str;

    /// Open and parse the PDF at `path`.
    fn open(&self, path: &Path) -> Result<Self::Document, CodecError>;

    /// Number of pages in a parsed document.
    fn page_count(&self, document: &Self::Document) -> usize;

    /// Create an empty output document.
    fn new_output(&self) -> Self::Output;

    /// Append every page of `document`, in order, to `output`.
    ///
    /// Returns the number of pages appended. The document is consumed.
    fn append_pages(
        &self,
        output: &mut Self::Output,
        document: Self::Document,
    ) -> Result<usize, CodecError>;

    /// Serialize `output` to `path`, replacing any existing file.
    fn write(&self, output: &mut Self::Output, path: &Path) -> Result<(), CodecError>;
}

/// Label reported for merges performed by [`LopdfCodec`].
pub const LOPDF_LABEL: &str = "lopdf Merge";

/// [`PdfCodec`] backed by `lopdf`.
#[derive(Debug, Clone, Default)]
pub struct LopdfCodec {
    reader: PdfReader,
    writer: PdfWriter,
}

impl LopdfCodec {
    /// Create a codec with default reader and writer settings.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PdfCodec for LopdfCodec {
    type Document = lopdf::Document;
    type Output = MergedDocument;

    fn label(&self) -> &str {
        LOPDF_LABEL
    }

    fn open(&self, path: &Path) -> Result<lopdf::Document, CodecError> {
        self.reader.load(path)
    }

    fn page_count(&self, document: &lopdf::Document) -> usize {
        document.get_pages().len()
    }

    fn new_output(&self) -> MergedDocument {
        MergedDocument::new()
    }

    fn append_pages(
        &self,
        output: &mut MergedDocument,
        document: lopdf::Document,
    ) -> Result<usize, CodecError> {
        output.append(document)
    }

    fn write(&self, output: &mut MergedDocument, path: &Path) -> Result<(), CodecError> {
        self.writer.save(output, path)
    }
}
