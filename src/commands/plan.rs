use crate::chapters;
use crate::pdf::PdfDocument;
use crate::plan::SplitPlan;
use anyhow::Result;
use std::path::Path;

/// Print the resolved chapter ranges without writing any files.
pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(document: P, chapter_table: Q) -> Result<()> {
    let specs = chapters::load(chapter_table)?;
    let doc = PdfDocument::open(document)?;
    let total_pages = doc.page_count();
    let plan = SplitPlan::build(&specs, total_pages)?;

    println!("Document: {} ({} pages)", doc.path, total_pages);
    for c in &plan.chapters {
        println!(
            "{}: '{}' -> pages {}-{} ({} page(s)) -> {}",
            c.index,
            c.title,
            c.start_page,
            c.end_page,
            c.page_count(),
            c.file_name
        );
    }

    Ok(())
}
