//! Page access abstraction over a parsed document

use crate::error::ExtractError;

/// An ordered collection of pages that can each produce plain text.
///
/// Page indices are zero-based. Implementations must not do any work for
/// pages that are never requested.
pub trait PageSource {
    /// Total number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extracts the text layer of the page at `index`.
    ///
    /// Pages without a text layer yield an empty string, not an error.
    fn page_text(&self, index: usize) -> Result<String, ExtractError>;
}
