//! Error types for PDF text extraction

use std::path::PathBuf;

use thiserror::Error;

/// Boxed cause for page-level failures, so any `PageSource` can report them.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be opened for reading
    #[error("failed to open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a decodable PDF document
    #[error("failed to parse {path:?} as a PDF document")]
    Parse {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// A page's content stream could not be turned into text
    #[error("failed to extract text from page {page}")]
    Content {
        /// Zero-based page index
        page: usize,
        #[source]
        source: BoxError,
    },
}
