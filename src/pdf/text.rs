use anyhow::{Context, Result};
use std::path::Path;

/// Text of every page of a PDF, in page order.
///
/// pdf-extract has no per-page API, so the whole document is extracted once
/// and split on the form feeds it emits between pages.
pub fn page_texts<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read PDF: {}", path.display()))?;

    let full_text = pdf_extract::extract_text_from_mem(&bytes)
        .with_context(|| format!("Failed to extract text from PDF: {}", path.display()))?;

    Ok(full_text.split('\x0C').map(|s| s.to_string()).collect())
}

/// Whether a 1-indexed page has no extractable text. Page 0 and pages past
/// the end of the text list count as blank. Images are not detected; this
/// mirrors the heuristic used for trailing separator pages in book builds.
pub fn is_blank_page(texts: &[String], page: u32) -> bool {
    let Some(index) = page.checked_sub(1) else {
        return true;
    };
    texts
        .get(index as usize)
        .map(|t| t.trim().is_empty())
        .unwrap_or(true)
}
