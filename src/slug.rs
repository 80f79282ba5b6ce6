/// Derive a filesystem-safe slug from a chapter title.
///
/// Lowercases ASCII letters, keeps alphanumerics, and collapses every other
/// run of characters into a single `-`. Leading and trailing separators are
/// trimmed, so `"Alignment: Methods & Tools"` becomes
/// `"alignment-methods-tools"`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_sep = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}

/// Output file name for a chapter. Falls back to a positional name when the
/// title has no usable characters (e.g. all punctuation).
pub fn chapter_file_name(title: &str, index: usize) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("chapter-{}.pdf", index + 1)
    } else {
        format!("{}.pdf", slug)
    }
}
