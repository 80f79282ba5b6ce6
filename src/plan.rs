use crate::chapters::ChapterSpec;
use crate::error::SplitError;
use crate::slug::chapter_file_name;
use std::collections::HashMap;

/// A resolved chapter: inclusive 1-indexed page range plus the derived
/// output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRange {
    pub index: usize,
    pub title: String,
    pub start_page: u32,
    pub end_page: u32,
    pub file_name: String,
}

impl ChapterRange {
    pub fn page_count(&self) -> u32 {
        self.end_page - self.start_page + 1
    }
}

/// The validated extraction plan. Building it is pure computation; nothing
/// touches the filesystem until the plan exists, so a failing table never
/// leaves partial output behind.
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub chapters: Vec<ChapterRange>,
}

impl SplitPlan {
    /// Resolve chapter specs against a document with `total_pages` pages.
    ///
    /// Each chapter ends one page before the next chapter starts; the last
    /// chapter runs to the end of the document. Start pages must be
    /// strictly increasing and within `[1, total_pages]`. Pages before the
    /// first chapter's start (front matter) are excluded from all output.
    pub fn build(specs: &[ChapterSpec], total_pages: u32) -> Result<Self, SplitError> {
        if specs.is_empty() {
            return Err(SplitError::ChapterTable {
                reason: "chapter table is empty".to_string(),
            });
        }

        let mut chapters = Vec::with_capacity(specs.len());
        let mut seen_names: HashMap<String, usize> = HashMap::new();

        for (index, spec) in specs.iter().enumerate() {
            let start_page = spec.start_page;
            if start_page == 0 {
                return Err(range_error(index, spec, "start page must be >= 1"));
            }
            if start_page > total_pages {
                return Err(range_error(
                    index,
                    spec,
                    &format!(
                        "start page {} exceeds document page count {}",
                        start_page, total_pages
                    ),
                ));
            }

            let end_page = match specs.get(index + 1) {
                Some(next) => {
                    if next.start_page <= start_page {
                        return Err(range_error(
                            index,
                            spec,
                            &format!(
                                "start page {} is not before next chapter's start page {}",
                                start_page, next.start_page
                            ),
                        ));
                    }
                    next.start_page - 1
                }
                None => total_pages,
            };

            let file_name = chapter_file_name(&spec.title, index);
            if let Some(&prev) = seen_names.get(&file_name) {
                return Err(SplitError::NamingCollision {
                    first: specs[prev].title.clone(),
                    second: spec.title.clone(),
                    name: file_name,
                });
            }
            seen_names.insert(file_name.clone(), index);

            chapters.push(ChapterRange {
                index,
                title: spec.title.clone(),
                start_page,
                end_page,
                file_name,
            });
        }

        Ok(SplitPlan { chapters })
    }
}

fn range_error(index: usize, spec: &ChapterSpec, reason: &str) -> SplitError {
    SplitError::Range {
        index,
        title: spec.title.clone(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(title: &str, start_page: u32) -> ChapterSpec {
        ChapterSpec {
            title: title.to_string(),
            start_page,
        }
    }

    #[test]
    fn test_single_chapter_spans_document() {
        let plan = SplitPlan::build(&[spec("All", 1)], 10).unwrap();
        assert_eq!(plan.chapters.len(), 1);
        assert_eq!(plan.chapters[0].start_page, 1);
        assert_eq!(plan.chapters[0].end_page, 10);
        assert_eq!(plan.chapters[0].file_name, "all.pdf");
    }

    #[test]
    fn test_three_chapter_ranges() {
        let plan =
            SplitPlan::build(&[spec("A", 1), spec("B", 5), spec("C", 8)], 10).unwrap();
        let ranges: Vec<(u32, u32)> = plan
            .chapters
            .iter()
            .map(|c| (c.start_page, c.end_page))
            .collect();
        assert_eq!(ranges, vec![(1, 4), (5, 7), (8, 10)]);
    }

    #[test]
    fn test_partition_property() {
        let specs = [spec("One", 3), spec("Two", 9), spec("Three", 20)];
        let total = 31;
        let plan = SplitPlan::build(&specs, total).unwrap();

        assert_eq!(plan.chapters.len(), specs.len());
        // Ranges tile [first start, total] with no gaps or overlaps.
        let mut expected_start = specs[0].start_page;
        for c in &plan.chapters {
            assert_eq!(c.start_page, expected_start);
            assert!(c.end_page >= c.start_page);
            expected_start = c.end_page + 1;
        }
        assert_eq!(expected_start, total + 1);
    }

    #[test]
    fn test_front_matter_excluded() {
        let plan = SplitPlan::build(&[spec("Intro", 5)], 10).unwrap();
        assert_eq!(plan.chapters[0].start_page, 5);
    }

    #[test]
    fn test_duplicate_start_is_range_error() {
        let err = SplitPlan::build(&[spec("A", 1), spec("B", 1)], 10).unwrap_err();
        assert!(matches!(err, SplitError::Range { index: 0, .. }));
    }

    #[test]
    fn test_decreasing_start_is_range_error() {
        let err = SplitPlan::build(&[spec("A", 6), spec("B", 2)], 10).unwrap_err();
        assert!(matches!(err, SplitError::Range { .. }));
    }

    #[test]
    fn test_start_beyond_page_count() {
        let err = SplitPlan::build(&[spec("A", 1), spec("B", 15)], 10).unwrap_err();
        match err {
            SplitError::Range { index, title, .. } => {
                assert_eq!(index, 1);
                assert_eq!(title, "B");
            }
            other => panic!("expected Range error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_start_page() {
        let err = SplitPlan::build(&[spec("A", 0)], 10).unwrap_err();
        assert!(matches!(err, SplitError::Range { .. }));
    }

    #[test]
    fn test_naming_collision() {
        let err = SplitPlan::build(&[spec("Genes", 1), spec("Genes!", 5)], 10).unwrap_err();
        match err {
            SplitError::NamingCollision { first, second, name } => {
                assert_eq!(first, "Genes");
                assert_eq!(second, "Genes!");
                assert_eq!(name, "genes.pdf");
            }
            other => panic!("expected NamingCollision, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(
            SplitPlan::build(&[], 10),
            Err(SplitError::ChapterTable { .. })
        ));
    }

    #[test]
    fn test_plan_is_deterministic() {
        let specs = [spec("Alpha", 1), spec("Beta", 4)];
        let a = SplitPlan::build(&specs, 9).unwrap();
        let b = SplitPlan::build(&specs, 9).unwrap();
        assert_eq!(a.chapters, b.chapters);
    }
}
