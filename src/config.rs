use std::path::PathBuf;

/// File read when no path is given on the command line.
pub const DEFAULT_PDF_PATH: &str = "epiplexity_paper.pdf";

/// Number of leading pages whose text is extracted.
pub const MAX_PAGES: usize = 15;

/// Resolved settings for a single extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Path to the PDF document, relative paths resolve against the working directory
    pub path: PathBuf,
    /// Upper bound on the number of pages read, counted from the first page
    pub max_pages: usize,
}

impl ExtractConfig {
    /// Overrides the default path when one was supplied.
    pub fn with_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.path = p;
        }
        self
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PDF_PATH),
            max_pages: MAX_PAGES,
        }
    }
}
