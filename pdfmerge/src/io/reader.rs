//! PDF loading.
//!
//! Loads a single input into an `lopdf` document and rejects inputs the
//! merge cannot carry over faithfully (encrypted files, files without a
//! page tree).

use lopdf::{Document, Object, ObjectId};
use std::path::Path;

use super::CodecError;

/// Page attributes a page may inherit from its ancestors in the page tree.
pub(crate) const INHERITABLE_ATTRIBUTES: [&[u8]; 4] =
    [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against cyclic `Parent` chains in malformed files.
const MAX_TREE_DEPTH: usize = 64;

/// PDF reader that rejects inputs the merge cannot carry over.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - File is not a valid PDF
    /// - PDF is encrypted
    /// - PDF has no catalog
    pub fn load(&self, path: &Path) -> Result<Document, CodecError> {
        let doc = Document::load(path).map_err(|e| {
            let err_msg = e.to_string();
            let lowered = err_msg.to_lowercase();
            if lowered.contains("encrypt") || lowered.contains("password") {
                CodecError::Encrypted
            } else {
                CodecError::Parse(err_msg)
            }
        })?;

        if doc.is_encrypted() {
            return Err(CodecError::Encrypted);
        }

        doc.catalog()
            .map_err(|e| CodecError::Structure(format!("missing catalog: {e}")))?;

        Ok(doc)
    }
}

/// Collect inheritable attributes the page at `page_id` does not set itself.
///
/// The nearest ancestor wins, matching how viewers resolve inheritance.
pub(crate) fn inherited_attributes(doc: &Document, page_id: ObjectId) -> Vec<(Vec<u8>, Object)> {
    let mut found: Vec<(Vec<u8>, Object)> = Vec::new();

    let Ok(page) = doc.get_dictionary(page_id) else {
        return found;
    };

    let mut parent = page.get(b"Parent").and_then(Object::as_reference).ok();
    let mut depth = 0;

    while let Some(node_id) = parent {
        if depth >= MAX_TREE_DEPTH {
            break;
        }
        let Ok(node) = doc.get_dictionary(node_id) else {
            break;
        };

        for key in INHERITABLE_ATTRIBUTES {
            if page.has(key) || found.iter().any(|(k, _)| k.as_slice() == key) {
                continue;
            }
            if let Ok(value) = node.get(key) {
                found.push((key.to_vec(), value.clone()));
            }
        }

        parent = node.get(b"Parent").and_then(Object::as_reference).ok();
        depth += 1;
    }

    found
}
