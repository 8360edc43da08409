//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (collection, item) is its semantic identity: title and
//! positional index. Filesystem paths are secondary context on indented
//! `Source:` lines, so the output reads as a content inventory while still
//! tracing back to specific files.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Case Studies (3)
//!     001 Redesigning Acme's Checkout (3 images)
//!         Source: case-studies/acme-checkout.md
//!         Cutting checkout drop-off by a third with a single-page...
//!
//! Use Cases (2)
//!     001 Automating Invoice Intake (2 images)
//!         Source: use-cases/invoice-automation.md
//!         By: Jordan Reyes • 2024-05-14
//!
//! Config
//!     config.toml
//!     public/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Case Studies
//!     001 Redesigning Acme's Checkout → case-study/acme-checkout/index.html
//! Use Cases → use-cases/index.html
//!     001 Automating Invoice Intake → use-cases/invoice-automation/index.html
//! Not found → 404.html
//!
//! Generated 8 pages, copied 7 assets
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure:
//! no I/O, no side effects.

use crate::generate::{GenerateReport, PageKind};
use crate::markdown::Document;
use crate::scan::Manifest;
use crate::types::{CollectionKind, ContentItem};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an item header: positional index + title, with image count when
/// the body has images.
///
/// ```text
/// 001 Redesigning Acme's Checkout (3 images)
/// 002 Orbit Mobile Banking
/// ```
fn entity_header(index: usize, title: &str, images: usize) -> String {
    match images {
        0 => format!("{} {}", format_index(index), title),
        1 => format!("{} {} (1 image)", format_index(index), title),
        n => format!("{} {} ({} images)", format_index(index), title, n),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

fn byline(item: &ContentItem) -> Option<String> {
    match (&item.author, &item.date) {
        (Some(a), Some(d)) => Some(format!("By: {a} \u{2022} {d}")),
        (Some(a), None) => Some(format!("By: {a}")),
        (None, Some(d)) => Some(format!("Date: {d}")),
        (None, None) => None,
    }
}

// ============================================================================
// Scan
// ============================================================================

/// Format scan stage output showing discovered content.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    for kind in CollectionKind::ALL {
        let items = manifest.items(kind);
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{} ({})", kind.heading(), items.len()));
        if items.is_empty() {
            lines.push(format!("{}(none in {}/)", indent(1), kind.source_dir()));
            continue;
        }

        for (i, item) in items.iter().enumerate() {
            let images = Document::parse(&item.body).images().len();
            lines.push(format!(
                "{}{}",
                indent(1),
                entity_header(i + 1, &item.title, images)
            ));
            lines.push(format!(
                "{}Source: {}/{}.md",
                indent(2),
                kind.source_dir(),
                item.slug
            ));
            if let Some(by) = byline(item) {
                lines.push(format!("{}{}", indent(2), by));
            }
            let desc = truncate_desc(item.description.trim(), 60);
            if !desc.is_empty() {
                lines.push(format!("{}{}", indent(2), desc));
            }
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(defaults)", indent(1)));
    }
    if source_root.join("public").is_dir() {
        lines.push(format!("{}public/", indent(1)));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Format generate stage output: every written page, grouped by collection,
/// with `→` and its output path.
pub fn format_generate_output(manifest: &Manifest, report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let path_of = |kind: PageKind| -> Vec<String> {
        report
            .pages
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(p, _)| p.display().to_string())
            .collect()
    };

    for path in path_of(PageKind::Home) {
        lines.push(format!("Home \u{2192} {path}"));
    }

    for kind in CollectionKind::ALL {
        match path_of(PageKind::Listing(kind)).first() {
            Some(path) => lines.push(format!("{} \u{2192} {}", kind.heading(), path)),
            None => lines.push(kind.heading().to_string()),
        }

        let detail_paths = path_of(PageKind::Detail(kind));
        for (i, item) in manifest.items(kind).iter().enumerate() {
            let expected = Path::new(kind.route()).join(&item.slug).join("index.html");
            let expected = expected.display().to_string();
            if detail_paths.contains(&expected) {
                lines.push(format!(
                    "{}{} {} \u{2192} {}",
                    indent(1),
                    format_index(i + 1),
                    item.title,
                    expected
                ));
            }
        }
    }

    for path in path_of(PageKind::NotFound) {
        lines.push(format!("Not found \u{2192} {path}"));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {} pages, copied {} assets",
        report.pages.len(),
        report.assets
    ));

    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest, report: &GenerateReport) {
    for line in format_generate_output(manifest, report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
