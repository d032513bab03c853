pub mod config;
pub mod document;
pub mod error;
pub mod pdf;
pub mod runner;

// Re-export key items for convenience
pub use config::{DEFAULT_PDF_PATH, ExtractConfig, MAX_PAGES};
pub use document::PageSource;
pub use error::ExtractError;
pub use pdf::PdfDocument;
pub use runner::{extract_text, render, run, run_to};
