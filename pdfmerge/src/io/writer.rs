//! Page accumulation and PDF writing.
//!
//! [`MergedDocument`] owns a fresh page tree. Each appended input is
//! renumbered past the objects already held, its objects are moved in, and
//! its pages are re-parented onto the single `Pages` root in their original
//! order. Page content streams are moved as-is.
//!
//! [`PdfWriter`] serializes the accumulated document with a buffered writer.

use lopdf::{Document, Object, ObjectId, dictionary};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::CodecError;
use super::reader::inherited_attributes;

/// Output document under construction.
#[derive(Debug)]
pub struct MergedDocument {
    document: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
}

impl MergedDocument {
    /// Create an empty document with a catalog and an empty page tree.
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);

        let mut merged = Self {
            document,
            pages_id,
            kids: Vec::new(),
        };
        merged.sync_page_tree();
        merged
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Append every page of `source`, in page order.
    ///
    /// Returns the number of pages appended.
    pub fn append(&mut self, mut source: Document) -> Result<usize, CodecError> {
        source.renumber_objects_with(self.document.max_id + 1);

        let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();
        let inherited: Vec<_> = page_ids
            .iter()
            .map(|&page_id| inherited_attributes(&source, page_id))
            .collect();

        if source.version > self.document.version {
            self.document.version = source.version.clone();
        }

        // The source catalog and page tree nodes are replaced by our own.
        for (id, object) in std::mem::take(&mut source.objects) {
            if !is_tree_node(&object) {
                self.document.objects.insert(id, object);
            }
        }
        self.document.max_id = self.document.max_id.max(source.max_id);

        for (page_id, attributes) in page_ids.iter().zip(inherited) {
            let page = self.document.get_dictionary_mut(*page_id).map_err(|e| {
                CodecError::Structure(format!("page {page_id:?} is not a dictionary: {e}"))
            })?;
            for (key, value) in attributes {
                page.set(key, value);
            }
            page.set("Parent", self.pages_id);
            self.kids.push(Object::Reference(*page_id));
        }

        self.sync_page_tree();
        Ok(page_ids.len())
    }

    /// Access the underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Rewrite the `Pages` root from the current list of kids.
    fn sync_page_tree(&mut self) {
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => self.kids.clone(),
            "Count" => self.kids.len() as i64,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages));
    }
}

impl Default for MergedDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// True for catalog and intermediate page tree dictionaries.
fn is_tree_node(object: &Object) -> bool {
    let Ok(dict) = object.as_dict() else {
        return false;
    };
    matches!(
        dict.get(b"Type").and_then(Object::as_name),
        Ok(b"Pages") | Ok(b"Catalog")
    )
}

/// Buffer size for writing (in bytes).
const WRITE_BUFFER_SIZE: usize = 8192;

/// PDF writer for merged documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new PDF writer.
    pub fn new() -> Self {
        Self
    }

    /// Save a merged document to `path`.
    ///
    /// Missing parent directories are created. An existing file at `path`
    /// is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directories cannot be created
    /// - The file cannot be created or opened for writing
    /// - Serialization or flushing fails
    pub fn save(&self, merged: &mut MergedDocument, path: &Path) -> Result<(), CodecError> {
        merged.document.prune_objects();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::File::create(path)?;
        let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

        merged
            .document
            .save_to(&mut writer)
            .map_err(|e| CodecError::Serialize(e.to_string()))?;

        writer.flush()?;

        Ok(())
    }
}
