use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use lopdf::Document;

use crate::document::PageSource;
use crate::error::ExtractError;

/// A parsed PDF document backed by `lopdf`.
#[derive(Debug)]
pub struct PdfDocument {
    doc: Document,
    /// 1-based page numbers in document order, as keyed by `Document::get_pages`.
    page_numbers: Vec<u32>,
}

impl PdfDocument {
    /// Opens and parses the PDF at `path`.
    ///
    /// The file handle is moved into the parser and closed as soon as parsing
    /// finishes, whether or not it succeeded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file, path)
    }

    /// Parses a PDF from any byte stream. `path` is only used in error reports.
    pub fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Self, ExtractError> {
        let doc = Document::load_from(reader).map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_document(doc))
    }

    /// Parses a PDF already held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExtractError> {
        Self::from_reader(bytes, Path::new("<memory>"))
    }

    fn from_document(doc: Document) -> Self {
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        debug!("parsed PDF {} with {} pages", doc.version, page_numbers.len());
        Self { doc, page_numbers }
    }
}

impl PageSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, ExtractError> {
        let number = *self
            .page_numbers
            .get(index)
            .ok_or_else(|| ExtractError::Content {
                page: index,
                source: format!("page index out of range ({} pages)", self.page_numbers.len())
                    .into(),
            })?;

        self.doc
            .extract_text(&[number])
            .map_err(|e| ExtractError::Content {
                page: index,
                source: Box::new(e),
            })
    }
}
