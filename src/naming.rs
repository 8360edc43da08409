//! Slug and title derivation for content files.
//!
//! The filename is the only identity a content item has: `case-studies/acme-redesign.md`
//! is served at `/case-study/acme-redesign/`. Nothing is stripped besides the
//! extension, so renaming a file is the only way to move a page.
//!
//! ## Display Titles
//!
//! When a file has neither a frontmatter `title` nor a `# heading`, the slug
//! doubles as its title with dashes converted to spaces:
//! - `acme-redesign.md` → "acme redesign"
//! - `q3_report.md` → "q3_report"

use std::borrow::Cow;
use std::path::Path;

/// Result of parsing a content filename like `acme-redesign.md`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Filename without its extension.
    pub slug: String,
    /// Slug with dashes converted to spaces.
    pub display_title: String,
}

/// Derive the slug and fallback title from a content file path.
///
/// Returns `None` for paths without a usable file stem (`.md`, `..`).
pub fn parse_entry_name(path: &Path) -> Option<ParsedName> {
    let stem = path.file_stem()?.to_string_lossy();
    if stem.is_empty() || stem.starts_with('.') {
        return None;
    }
    Some(ParsedName {
        slug: stem.to_string(),
        display_title: stem.replace('-', " "),
    })
}

/// Percent-encode a slug for use as a single URL path segment.
///
/// Plain ASCII slugs come back borrowed and unchanged.
pub fn url_segment(slug: &str) -> Cow<'_, str> {
    urlencoding::encode(slug)
}

/// Whether a path has the markdown extension (case-insensitive).
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}
