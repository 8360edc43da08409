//! Shared test utilities for the casefolio test suite.
//!
//! Provides fixture setup and lookup helpers that work with scan-phase data
//! structures (`Manifest`, `ContentItem`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let item = find_item(&manifest, CollectionKind::CaseStudies, "acme-checkout");
//! assert_eq!(item.title, "Redesigning Acme's Checkout");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::{CollectionKind, ContentItem};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups, panicking with a clear message on miss
// =========================================================================

/// Find an item by slug within a collection. Panics if not found.
pub fn find_item<'a>(manifest: &'a Manifest, kind: CollectionKind, slug: &str) -> &'a ContentItem {
    let items = manifest.items(kind);
    items.iter().find(|i| i.slug == slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = items.iter().map(|i| i.slug.as_str()).collect();
        panic!(
            "item '{slug}' not found in {}. Available: {slugs:?}",
            kind.source_dir()
        )
    })
}

/// All slugs of a collection in manifest order.
pub fn slugs(manifest: &Manifest, kind: CollectionKind) -> Vec<&str> {
    manifest
        .items(kind)
        .iter()
        .map(|i| i.slug.as_str())
        .collect()
}

/// Build an item in memory, for tests that don't need the filesystem.
pub fn item(slug: &str, title: &str, body: &str) -> ContentItem {
    ContentItem {
        slug: slug.to_string(),
        title: title.to_string(),
        description: format!("About {title}"),
        author: None,
        date: None,
        body: body.to_string(),
    }
}
