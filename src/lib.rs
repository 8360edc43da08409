//! # casefolio
//!
//! A static site generator for personal portfolios: a landing page with an
//! about section, an accordion of case studies, and a set of "use case"
//! articles. Every page comes from a markdown file with YAML frontmatter.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (files → structured data)
//! 2. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! The manifest is human-readable JSON, so what the generator sees can always
//! be inspected, and `generate` can be unit tested without touching content
//! files.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: reads collection directories and config into the manifest |
//! | [`generate`] | Stage 2: renders every page with Maud and copies `public/` |
//! | [`content`] | One markdown file → one [`types::ContentItem`] (frontmatter, title fallback) |
//! | [`markdown`] | Markdown → typed document tree → styled HTML |
//! | [`gallery`] | Per-document image sequence and lightbox state machine |
//! | [`listing`] | Single-open card accordion state machine |
//! | [`navigation`] | Previous/next neighbours and the transition direction |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared types serialized between stages |
//! | [`naming`] | Slug and display-title derivation from filenames |
//! | [`output`] | CLI inventory formatting for each stage |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Interactive Behaviour
//!
//! The gallery, accordion and page transitions run in the browser as small
//! vanilla scripts embedded in each page. Their state machines also exist
//! here in Rust ([`gallery::GalleryState`], [`listing::ListingState`],
//! [`navigation::Direction`]): the generator uses them to compute each
//! page's initial markup, and their tests pin the behaviour the scripts
//! follow.

pub mod config;
pub mod content;
pub mod gallery;
pub mod generate;
pub mod listing;
pub mod logging;
pub mod markdown;
pub mod naming;
pub mod navigation;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
