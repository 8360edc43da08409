//! Content scanning and manifest generation.
//!
//! Stage 1 of the casefolio build pipeline. Reads every collection directory
//! under the content root, parses each markdown file into a [`ContentItem`],
//! and loads the site config, producing a [`Manifest`] that the generate stage
//! consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── case-studies/                # Home-page accordion, /case-study/<slug>/
//! │   ├── acme-checkout.md
//! │   └── beacon-analytics.md
//! ├── use-cases/                   # /use-cases/ listing, /use-cases/<slug>/
//! │   └── invoice-automation.md
//! └── public/                      # Copied verbatim to the output root
//!     └── images/use-cases/flow.svg
//! ```
//!
//! ## Rules
//!
//! - Items are ordered by filename; that order drives previous/next links.
//! - Only `.md` files are content. Anything else in a collection directory is
//!   skipped with a debug log line.
//! - A missing collection directory is an empty collection, not an error.
//! - Two files with the same slug in one collection are an error.

use crate::config::{self, SiteConfig};
use crate::content::{self, ContentError};
use crate::naming;
use crate::types::{Collection, CollectionKind, ContentItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("Content directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("Duplicate slug '{slug}' in {dir}")]
    DuplicateSlug { slug: String, dir: PathBuf },
}

/// Manifest output from the scan stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// One entry per [`CollectionKind`], in [`CollectionKind::ALL`] order.
    pub collections: Vec<Collection>,
    pub config: SiteConfig,
}

impl Manifest {
    /// Items of one collection; empty when the collection wasn't scanned.
    pub fn items(&self, kind: CollectionKind) -> &[ContentItem] {
        self.collections
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let collections = CollectionKind::ALL
        .iter()
        .map(|&kind| scan_collection(root, kind))
        .collect::<Result<Vec<_>, _>>()?;

    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    Ok(Manifest {
        collections,
        config,
    })
}

fn scan_collection(root: &Path, kind: CollectionKind) -> Result<Collection, ScanError> {
    let dir = root.join(kind.source_dir());
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "collection directory missing, treating as empty");
        return Ok(Collection {
            kind,
            items: Vec::new(),
        });
    }

    let mut items = Vec::new();
    let mut seen = HashSet::new();
    for path in collect_entries(&dir)? {
        if !path.is_file() || !naming::is_markdown(&path) {
            tracing::debug!(path = %path.display(), "skipping non-markdown entry");
            continue;
        }
        let item = content::load_item(&path)?;
        if !seen.insert(item.slug.clone()) {
            return Err(ScanError::DuplicateSlug {
                slug: item.slug,
                dir,
            });
        }
        tracing::debug!(collection = kind.source_dir(), slug = %item.slug, "loaded item");
        items.push(item);
    }

    Ok(Collection { kind, items })
}

/// Directory entries sorted by filename, hidden files excluded.
fn collect_entries(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .map(|name| !name.to_string_lossy().starts_with('.'))
                .unwrap_or(false)
        })
        .collect();

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}
