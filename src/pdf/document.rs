use crate::error::SplitError;
use anyhow::{Context, Result};
use lopdf::Document;
use std::path::Path;

pub struct PdfDocument {
    pub doc: Document,
    pub path: String,
}

impl PdfDocument {
    /// Open a paginated document. A missing or unparseable file is reported
    /// as `InputNotFound`, since the build toolchain that produces it runs
    /// before this tool.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SplitError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| SplitError::InputNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let doc = Document::load_mem(&bytes).map_err(|e| SplitError::InputNotFound {
            path: path.to_path_buf(),
            reason: format!("not a readable PDF: {}", e),
        })?;
        Ok(PdfDocument {
            doc,
            path: path.display().to_string(),
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Extract the contiguous 1-indexed page range `[start, end]` into a new
    /// document. Pages are carried over as-is; nothing is re-rendered.
    pub fn extract_range(&self, start: u32, end: u32) -> Result<Document> {
        let total = self.page_count();
        if start == 0 || start > end || end > total {
            anyhow::bail!("Page range {}-{} is out of range (1-{})", start, end, total);
        }

        let mut new_doc = self.doc.clone();
        let pages_to_delete: Vec<u32> = (1..=total)
            .filter(|p| *p < start || *p > end)
            .collect();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }

        Ok(new_doc)
    }

    /// Save an extracted document to a file.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        doc.save(&path)
            .with_context(|| format!("Failed to save PDF: {}", path.as_ref().display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::Content;
    use lopdf::{dictionary, Object, Stream};

    /// Build an in-memory PDF with `n` empty pages.
    fn make_pdf(n: usize) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut kids = Vec::with_capacity(n);
        for _ in 0..n {
            let content = Content { operations: vec![] };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn wrap(doc: Document) -> PdfDocument {
        PdfDocument {
            doc,
            path: "<memory>".to_string(),
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(wrap(make_pdf(10)).page_count(), 10);
    }

    #[test]
    fn test_extract_middle_range() {
        let doc = wrap(make_pdf(10));
        let extracted = doc.extract_range(5, 7).unwrap();
        assert_eq!(extracted.get_pages().len(), 3);
    }

    #[test]
    fn test_extract_whole_document() {
        let doc = wrap(make_pdf(4));
        let extracted = doc.extract_range(1, 4).unwrap();
        assert_eq!(extracted.get_pages().len(), 4);
    }

    #[test]
    fn test_extract_single_page() {
        let doc = wrap(make_pdf(10));
        let extracted = doc.extract_range(10, 10).unwrap();
        assert_eq!(extracted.get_pages().len(), 1);
    }

    #[test]
    fn test_extract_out_of_range() {
        let doc = wrap(make_pdf(10));
        assert!(doc.extract_range(8, 12).is_err());
        assert!(doc.extract_range(0, 3).is_err());
        assert!(doc.extract_range(5, 4).is_err());
    }

    #[test]
    fn test_repeated_extraction_is_byte_identical() {
        let doc = wrap(make_pdf(10));
        let mut first = doc.extract_range(5, 7).unwrap();
        let mut second = doc.extract_range(5, 7).unwrap();

        let mut a = Vec::new();
        let mut b = Vec::new();
        first.save_to(&mut a).unwrap();
        second.save_to(&mut b).unwrap();

        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn test_source_document_untouched() {
        let doc = wrap(make_pdf(6));
        let _ = doc.extract_range(2, 3).unwrap();
        assert_eq!(doc.page_count(), 6);
    }
}
