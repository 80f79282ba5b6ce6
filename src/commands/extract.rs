use crate::chapters;
use crate::error::SplitError;
use crate::pdf::{self, PdfDocument};
use crate::plan::SplitPlan;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct ExtractOptions {
    /// Drop a chapter's last page when it has no extractable text.
    pub trim_blank: bool,
    /// Only write the chapter with this 0-based index.
    pub chapter: Option<usize>,
}

pub fn run<P: AsRef<Path>, Q: AsRef<Path>, R: AsRef<Path>>(
    document: P,
    chapter_table: Q,
    out_dir: R,
    options: &ExtractOptions,
) -> Result<()> {
    let document = document.as_ref();
    let out_dir = out_dir.as_ref();

    // Phase 1: pure validation. Nothing below touches the filesystem until
    // the whole table has resolved to ranges and names.
    let specs = chapters::load(chapter_table)?;
    let doc = PdfDocument::open(document)?;
    let total_pages = doc.page_count();
    let plan = SplitPlan::build(&specs, total_pages)?;

    if let Some(index) = options.chapter {
        if index >= plan.chapters.len() {
            anyhow::bail!(
                "Chapter index {} is out of range (0-{})",
                index,
                plan.chapters.len() - 1
            );
        }
    }

    for c in &plan.chapters {
        println!(
            "{}: '{}' -> pages {}-{} -> {}",
            c.index, c.title, c.start_page, c.end_page, c.file_name
        );
    }

    let page_texts = if options.trim_blank {
        Some(pdf::text::page_texts(document)?)
    } else {
        None
    };

    // Phase 2: write artifacts.
    std::fs::create_dir_all(out_dir).map_err(|e| SplitError::OutputWrite {
        path: out_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let selected = plan
        .chapters
        .iter()
        .filter(|c| options.chapter.map_or(true, |i| i == c.index));

    let mut written: Vec<PathBuf> = Vec::new();
    for chapter in selected {
        let mut end_page = chapter.end_page;
        if let Some(texts) = &page_texts {
            if end_page > chapter.start_page && pdf::text::is_blank_page(texts, end_page) {
                debug!(
                    "dropping blank last page {} of '{}'",
                    end_page, chapter.title
                );
                end_page -= 1;
            }
        }

        let mut chapter_doc = doc.extract_range(chapter.start_page, end_page)?;
        let out_path = out_dir.join(&chapter.file_name);
        if let Err(e) = PdfDocument::save(&mut chapter_doc, &out_path) {
            // Leave no partial chapter set behind for the uploader to ship.
            for path in &written {
                let _ = std::fs::remove_file(path);
            }
            return Err(SplitError::OutputWrite {
                path: out_path,
                reason: e.to_string(),
            }
            .into());
        }
        info!("wrote {}", out_path.display());
        written.push(out_path);
    }

    println!(
        "Wrote {} chapter file(s) to {}",
        written.len(),
        out_dir.display()
    );

    Ok(())
}
