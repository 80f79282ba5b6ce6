use crate::error::SplitError;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// One entry of the chapter table: a display title and the 1-indexed page
/// on which the chapter starts. The end page is derived later from the next
/// entry (or the document's last page).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ChapterSpec {
    pub title: String,
    #[serde(rename = "startPage")]
    pub start_page: u32,
}

/// Load the chapter table from a file.
///
/// `.json` files hold an array of `{ "title", "startPage" }` records; any
/// other extension is treated as a LaTeX `.toc` file, from which the
/// chapter-level `\contentsline` entries are recovered.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ChapterSpec>, SplitError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| SplitError::InputNotFound {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let specs = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_json(&content)?,
        _ => parse_latex_toc(&content),
    };

    if specs.is_empty() {
        return Err(SplitError::ChapterTable {
            reason: format!("no chapters found in {}", path.display()),
        });
    }

    Ok(specs)
}

fn parse_json(content: &str) -> Result<Vec<ChapterSpec>, SplitError> {
    serde_json::from_str(content).map_err(|e| SplitError::ChapterTable {
        reason: e.to_string(),
    })
}

/// Parse chapter entries out of a LaTeX `.toc` file.
///
/// Matches lines like
/// `\contentsline {chapter}{\numberline {1}Introduction}{1}{chapter.1}`,
/// capturing the visible title and the starting page number.
pub fn parse_latex_toc(content: &str) -> Vec<ChapterSpec> {
    let pattern = Regex::new(
        r"\\contentsline\s*\{chapter\}\{\s*(?:\\numberline\s*\{[^}]*\})?([^}]*)\}\{(\d+)\}",
    )
    .unwrap();

    pattern
        .captures_iter(content)
        .filter_map(|cap| {
            let title = strip_latex_commands(cap[1].trim());
            let start_page = cap[2].parse::<u32>().ok()?;
            Some(ChapterSpec { title, start_page })
        })
        .collect()
}

/// Remove simple TeX markup from a title, keeping the visible text:
/// `\textit{Genes}` becomes `Genes`, bare commands like `\LaTeX` are dropped,
/// and whitespace is collapsed.
fn strip_latex_commands(s: &str) -> String {
    let with_args = Regex::new(r"\\[a-zA-Z]+\s*\{([^}]*)\}").unwrap();
    let bare = Regex::new(r"\\[a-zA-Z]+").unwrap();
    let spaces = Regex::new(r"\s+").unwrap();

    let s = with_args.replace_all(s, "$1");
    let s = bare.replace_all(&s, "");
    spaces.replace_all(&s, " ").trim().to_string()
}
