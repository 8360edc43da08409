//! Shared types used across both pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → generate) and
//! must stay identical on both sides.

use serde::{Deserialize, Serialize};

/// One markdown file from a collection directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Filename without extension; unique within its collection.
    pub slug: String,
    /// Frontmatter title, else first `# heading`, else slug with dashes → spaces
    pub title: String,
    /// Frontmatter description (empty when absent)
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Raw markdown after the frontmatter block
    pub body: String,
}

/// The two content collections a site is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionKind {
    CaseStudies,
    UseCases,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 2] = [CollectionKind::CaseStudies, CollectionKind::UseCases];

    /// Directory under the content root holding this collection's files.
    pub fn source_dir(self) -> &'static str {
        match self {
            CollectionKind::CaseStudies => "case-studies",
            CollectionKind::UseCases => "use-cases",
        }
    }

    /// First URL segment of the detail pages.
    pub fn route(self) -> &'static str {
        match self {
            CollectionKind::CaseStudies => "case-study",
            CollectionKind::UseCases => "use-cases",
        }
    }

    /// Heading used on listing pages.
    pub fn heading(self) -> &'static str {
        match self {
            CollectionKind::CaseStudies => "Case Studies",
            CollectionKind::UseCases => "Use Cases",
        }
    }

    /// Where the "back" link on a detail page points, and its label.
    pub fn back_link(self) -> (&'static str, &'static str) {
        match self {
            CollectionKind::CaseStudies => ("/", "Back to Home"),
            CollectionKind::UseCases => ("/use-cases/", "Back to Use Cases"),
        }
    }

    /// Prefix applied to relative image sources in this collection's bodies.
    ///
    /// Use-case articles reference screenshots by bare filename.
    pub fn image_base(self) -> Option<&'static str> {
        match self {
            CollectionKind::CaseStudies => None,
            CollectionKind::UseCases => Some("/images/use-cases/"),
        }
    }

    /// URL of the detail page for `slug`.
    pub fn detail_url(self, slug: &str) -> String {
        format!("/{}/{}/", self.route(), crate::naming::url_segment(slug))
    }
}

/// All items of one collection, ordered by filename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub kind: CollectionKind,
    pub items: Vec<ContentItem>,
}
