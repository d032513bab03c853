use crate::config::ExtractConfig;
use crate::document::PageSource;
use crate::error::ExtractError;
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};

/// Concatenates the text of the first `max_pages` pages of `source`.
///
/// Pages are read in ascending order and joined without a separator. Pages
/// past the bound are never touched. The first failing page aborts the whole
/// extraction and the text gathered so far is dropped.
pub fn extract_text<S: PageSource>(source: &S, max_pages: usize) -> Result<String, ExtractError> {
    let total = source.page_count();
    let limit = total.min(max_pages);
    debug!("extracting {} of {} pages", limit, total);

    let mut text = String::new();
    for index in 0..limit {
        let page = source.page_text(index)?;
        if page.is_empty() {
            debug!("page {} has no text layer", index);
        }
        text.push_str(&page);
    }
    Ok(text)
}

/// Extracts the text, then writes it followed by a single newline.
///
/// Nothing reaches `out` unless every page was extracted.
pub fn render<S: PageSource>(source: &S, max_pages: usize, out: &mut dyn Write) -> Result<()> {
    let text = extract_text(source, max_pages)?;
    writeln!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Opens the configured document and renders it into `out`.
pub fn run_to(config: &ExtractConfig, out: &mut dyn Write) -> Result<()> {
    let doc = PdfDocument::open(&config.path)?;
    render(&doc, config.max_pages, out)
        .with_context(|| format!("while reading {}", config.path.display()))
}

/// Main entry point in CLI mode: prints the extracted text to stdout.
pub fn run(config: &ExtractConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_to(config, &mut handle)
}
