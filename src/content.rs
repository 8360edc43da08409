//! Content loading: one markdown file → one [`ContentItem`].
//!
//! A content file is an optional YAML frontmatter block fenced by `---`
//! lines, followed by the markdown body:
//!
//! ```text
//! ---
//! title: Redesigning Acme's checkout
//! description: Cutting drop-off by a third.
//! author: Jane Doe
//! date: 2024-03-01
//! ---
//!
//! ## Context
//! ...
//! ```
//!
//! Recognised keys are `title`, `description`, `author` and `date`. Other keys
//! are ignored. Scalar values of any type (`date: 2024-03-01`, `date: 2024`)
//! are taken as their string form.

use crate::naming;
use crate::types::ContentItem;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: yaml_serde::Error,
    },
    #[error("Frontmatter in {0} must be a mapping of keys to values")]
    NotAMapping(PathBuf),
    #[error("Unterminated frontmatter block in {0}")]
    Unterminated(PathBuf),
    #[error("Cannot derive a slug from {0}")]
    InvalidName(PathBuf),
}

/// Frontmatter split result.
#[derive(Debug, PartialEq)]
enum Split<'a> {
    /// No frontmatter block; the whole text is body.
    Plain(&'a str),
    Fenced { yaml: &'a str, body: &'a str },
    /// Opening fence without a closing one.
    Unterminated,
}

fn split_frontmatter(text: &str) -> Split<'_> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let Some(first_line_end) = text.find('\n') else {
        return Split::Plain(text);
    };
    if text[..first_line_end].trim_end() != "---" {
        return Split::Plain(text);
    }

    let rest = &text[first_line_end + 1..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if matches!(line.trim_end(), "---" | "...") {
            return Split::Fenced {
                yaml: &rest[..offset],
                body: &rest[offset + line.len()..],
            };
        }
        offset += line.len();
    }
    Split::Unterminated
}

/// Metadata pulled out of a frontmatter block.
#[derive(Debug, Default, PartialEq)]
struct Frontmatter {
    title: Option<String>,
    description: Option<String>,
    author: Option<String>,
    date: Option<String>,
}

fn scalar_string(value: &yaml_serde::Value) -> Option<String> {
    match value {
        yaml_serde::Value::String(s) => Some(s.trim().to_string()),
        yaml_serde::Value::Number(n) => Some(n.to_string()),
        yaml_serde::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
    .filter(|s| !s.is_empty())
}

fn parse_frontmatter(yaml: &str, path: &Path) -> Result<Frontmatter, ContentError> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    let value: yaml_serde::Value =
        yaml_serde::from_str(yaml).map_err(|source| ContentError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;
    let mapping = match value {
        yaml_serde::Value::Mapping(m) => m,
        yaml_serde::Value::Null => return Ok(Frontmatter::default()),
        _ => return Err(ContentError::NotAMapping(path.to_path_buf())),
    };
    let field = |key: &str| mapping.get(key).and_then(scalar_string);
    Ok(Frontmatter {
        title: field("title"),
        description: field("description"),
        author: field("author"),
        date: field("date"),
    })
}

/// First `# heading` line of a markdown body.
fn first_heading(body: &str) -> Option<String> {
    body.lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Build a [`ContentItem`] from a file path and its text.
///
/// The path is only used for the slug and error messages; nothing is read.
pub fn parse_item(path: &Path, text: &str) -> Result<ContentItem, ContentError> {
    let name =
        naming::parse_entry_name(path).ok_or_else(|| ContentError::InvalidName(path.into()))?;

    let (meta, body) = match split_frontmatter(text) {
        Split::Plain(body) => (Frontmatter::default(), body),
        Split::Fenced { yaml, body } => (parse_frontmatter(yaml, path)?, body),
        Split::Unterminated => return Err(ContentError::Unterminated(path.to_path_buf())),
    };

    let title = meta
        .title
        .or_else(|| first_heading(body))
        .unwrap_or(name.display_title);

    Ok(ContentItem {
        slug: name.slug,
        title,
        description: meta.description.unwrap_or_default(),
        author: meta.author,
        date: meta.date,
        body: body.to_string(),
    })
}

/// Read and parse one content file.
pub fn load_item(path: &Path) -> Result<ContentItem, ContentError> {
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_item(path, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const FULL: &str = "---\ntitle: Acme Checkout\ndescription: Cutting drop-off.\nauthor: Jane Doe\ndate: 2024-03-01\n---\n\n## Context\n\nBody text.\n";

    #[test]
    fn split_plain_text() {
        assert_eq!(split_frontmatter("# Hi\n"), Split::Plain("# Hi\n"));
    }

    #[test]
    fn split_fenced_block() {
        let split = split_frontmatter("---\ntitle: A\n---\nbody\n");
        assert_eq!(
            split,
            Split::Fenced {
                yaml: "title: A\n",
                body: "body\n"
            }
        );
    }

    #[test]
    fn split_handles_crlf() {
        let split = split_frontmatter("---\r\ntitle: A\r\n---\r\nbody");
        assert_eq!(
            split,
            Split::Fenced {
                yaml: "title: A\r\n",
                body: "body"
            }
        );
    }

    #[test]
    fn split_accepts_dot_terminator() {
        assert!(matches!(
            split_frontmatter("---\ntitle: A\n...\nbody"),
            Split::Fenced { body: "body", .. }
        ));
    }

    #[test]
    fn split_detects_unterminated_block() {
        assert_eq!(
            split_frontmatter("---\ntitle: A\nbody"),
            Split::Unterminated
        );
    }

    #[test]
    fn horizontal_rule_later_in_body_is_not_frontmatter() {
        assert!(matches!(
            split_frontmatter("Intro\n---\nMore"),
            Split::Plain(_)
        ));
    }

    #[test]
    fn parse_full_item() {
        let item = parse_item(Path::new("case-studies/acme.md"), FULL).unwrap();
        assert_eq!(item.slug, "acme");
        assert_eq!(item.title, "Acme Checkout");
        assert_eq!(item.description, "Cutting drop-off.");
        assert_eq!(item.author.as_deref(), Some("Jane Doe"));
        assert_eq!(item.date.as_deref(), Some("2024-03-01"));
        assert!(item.body.contains("## Context"));
        assert!(!item.body.contains("title:"));
    }

    #[test]
    fn numeric_scalars_become_strings() {
        let item = parse_item(Path::new("a.md"), "---\ntitle: 1999\ndate: 2024\n---\n").unwrap();
        assert_eq!(item.title, "1999");
        assert_eq!(item.date.as_deref(), Some("2024"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let item = parse_item(Path::new("a.md"), "---\ntitle: A\ntags: [x, y]\n---\n").unwrap();
        assert_eq!(item.title, "A");
    }

    #[test]
    fn title_falls_back_to_heading() {
        let item = parse_item(Path::new("a.md"), "---\ndescription: d\n---\n# From Heading\n").unwrap();
        assert_eq!(item.title, "From Heading");
    }

    #[test]
    fn title_falls_back_to_slug() {
        let item = parse_item(Path::new("acme-redesign.md"), "Just text.").unwrap();
        assert_eq!(item.title, "acme redesign");
        assert_eq!(item.description, "");
        assert_eq!(item.body, "Just text.");
    }

    #[test]
    fn empty_frontmatter_is_accepted() {
        let item = parse_item(Path::new("a.md"), "---\n---\nbody").unwrap();
        assert_eq!(item.body, "body");
    }

    #[test]
    fn invalid_yaml_is_error() {
        let result = parse_item(Path::new("a.md"), "---\ntitle: [unclosed\n---\n");
        assert!(matches!(result, Err(ContentError::Frontmatter { .. })));
    }

    #[test]
    fn sequence_frontmatter_is_error() {
        let result = parse_item(Path::new("a.md"), "---\n- a\n- b\n---\n");
        assert!(matches!(result, Err(ContentError::NotAMapping(_))));
    }

    #[test]
    fn unterminated_is_error() {
        let result = parse_item(Path::new("a.md"), "---\ntitle: A\n");
        assert!(matches!(result, Err(ContentError::Unterminated(_))));
    }

    #[test]
    fn load_item_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("acme.md");
        fs::write(&path, FULL).unwrap();
        let item = load_item(&path).unwrap();
        assert_eq!(item.title, "Acme Checkout");
    }

    #[test]
    fn load_item_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_item(&tmp.path().join("missing.md"));
        assert!(matches!(result, Err(ContentError::Io { .. })));
    }
}
