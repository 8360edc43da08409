//! HTML site generation.
//!
//! Stage 2 of the casefolio build pipeline. Takes the scan manifest and
//! generates the final static HTML site.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): hero, about section, case-study accordion
//! - **Case studies** (`/case-study/{slug}/index.html`): article, lightbox,
//!   previous/next links, back to home
//! - **Use-case listing** (`/use-cases/index.html`): use-case accordion
//! - **Use cases** (`/use-cases/{slug}/index.html`): article with an
//!   `author • date` byline, back to the listing
//! - **Not found** (`/404.html`)
//!
//! Both detail page kinds go through [`render_detail`]; the collection decides
//! the back link, the byline and how relative image sources resolve.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── case-study/
//! │   └── acme-checkout/index.html
//! ├── use-cases/
//! │   ├── index.html
//! │   └── invoice-automation/index.html
//! └── images/...                 # Copied from content/public/
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors and breakpoint rules injected from config)
//! - `static/transition.js`: Directional page-enter animation
//! - `static/listing.js`: Card accordion (hover on desktop, tap on mobile)
//! - `static/lightbox.js`: Full-screen gallery with swipe and keyboard
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, SiteConfig};
use crate::gallery::{self, GalleryState};
use crate::listing::{self, ListingState};
use crate::markdown::{self, Document};
use crate::navigation::{self, Direction};
use crate::scan::Manifest;
use crate::types::{CollectionKind, ContentItem};
use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error walking {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const TRANSITION_JS: &str = include_str!("../static/transition.js");
const LISTING_JS: &str = include_str!("../static/listing.js");
const LIGHTBOX_JS: &str = include_str!("../static/lightbox.js");

/// What a page is, for the CLI report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Listing(CollectionKind),
    Detail(CollectionKind),
    NotFound,
}

/// One rendered page, relative to the output directory.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub path: PathBuf,
    pub kind: PageKind,
    pub html: String,
}

/// Summary of a generate run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Output-relative paths of written pages, with their kind.
    pub pages: Vec<(PathBuf, PageKind)>,
    /// Number of files copied from `public/`.
    pub assets: usize,
}

/// Values every page needs.
pub struct SiteContext<'a> {
    pub config: &'a SiteConfig,
    pub css: String,
    pub year: i32,
}

impl<'a> SiteContext<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        let css = format!(
            "{}\n\n{}\n\n{}",
            config::generate_color_css(&config.colors),
            CSS_STATIC,
            config::generate_gallery_css(&config.gallery)
        );
        let year = config
            .site
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year());
        Self { config, css, year }
    }
}

/// Read the scan manifest and write the site to `output_dir`.
///
/// `source_dir` is only consulted for `public/`.
pub fn generate(
    manifest_path: &Path,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    fs::create_dir_all(output_dir)?;
    let assets = copy_public(&source_dir.join("public"), output_dir)?;

    let ctx = SiteContext::new(&manifest.config);
    let pages = render_site(&manifest, &ctx);

    let mut report = GenerateReport {
        pages: Vec::with_capacity(pages.len()),
        assets,
    };
    for page in pages {
        let dest = output_dir.join(&page.path);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, &page.html)?;
        tracing::debug!(path = %page.path.display(), "wrote page");
        report.pages.push((page.path, page.kind));
    }

    tracing::info!(
        pages = report.pages.len(),
        assets = report.assets,
        output = %output_dir.display(),
        "site generated"
    );
    Ok(report)
}

/// Render every page of the site in memory.
///
/// Detail pages of each collection are rendered in parallel.
pub fn render_site(manifest: &Manifest, ctx: &SiteContext) -> Vec<RenderedPage> {
    let mut pages = vec![
        RenderedPage {
            path: PathBuf::from("index.html"),
            kind: PageKind::Home,
            html: render_home(manifest, ctx).into_string(),
        },
        RenderedPage {
            path: PathBuf::from("use-cases/index.html"),
            kind: PageKind::Listing(CollectionKind::UseCases),
            html: render_listing_page(
                CollectionKind::UseCases,
                manifest.items(CollectionKind::UseCases),
                ctx,
            )
            .into_string(),
        },
        RenderedPage {
            path: PathBuf::from("404.html"),
            kind: PageKind::NotFound,
            html: render_not_found(ctx).into_string(),
        },
    ];

    for kind in CollectionKind::ALL {
        let items = manifest.items(kind);
        let details: Vec<RenderedPage> = items
            .par_iter()
            .filter_map(|item| {
                let markup = render_detail(kind, items, &item.slug, ctx)?;
                Some(RenderedPage {
                    path: PathBuf::from(kind.route())
                        .join(&item.slug)
                        .join("index.html"),
                    kind: PageKind::Detail(kind),
                    html: markup.into_string(),
                })
            })
            .collect();
        pages.extend(details);
    }

    pages
}

/// Copy `public/` into the output root. A missing directory copies nothing.
fn copy_public(public_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !public_dir.is_dir() {
        tracing::debug!(dir = %public_dir.display(), "no public directory");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(public_dir).min_depth(1) {
        let entry = entry.map_err(|source| GenerateError::Walk {
            path: public_dir.to_path_buf(),
            source,
        })?;
        let Ok(rel) = entry.path().strip_prefix(public_dir) else {
            continue;
        };
        let dest = output_dir.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(ctx: &SiteContext, title: &str, body_class: &str, content: Markup) -> Markup {
    let site = &ctx.config.site;
    let full_title = if title == site.title {
        site.title.clone()
    } else {
        format!("{} | {}", title, site.title)
    };
    html! {
        (DOCTYPE)
        html lang=(site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                @if !site.description.is_empty() {
                    meta name="description" content=(site.description);
                }
                style { (PreEscaped(&ctx.css)) }
            }
            body class=(body_class)
                data-enter-backward=[Direction::Backward.enter_class()]
                data-enter-forward=[Direction::Forward.enter_class()] {
                div.page {
                    (content)
                }
                (site_footer(ctx))
                script { (PreEscaped(TRANSITION_JS)) }
            }
        }
    }
}

/// `© <year> By <owner>`
fn site_footer(ctx: &SiteContext) -> Markup {
    html! {
        footer.site-footer {
            p { "© " (ctx.year) " By " (ctx.config.site.owner) }
        }
    }
}

/// Markdown body plus the lightbox for its images.
fn render_body(markdown_src: &str, image_base: Option<&str>, ctx: &SiteContext) -> Markup {
    let mut doc = Document::parse(markdown_src);
    if let Some(base) = image_base {
        doc.rebase_images(base);
    }
    let gallery = GalleryState::with_threshold(doc.images(), ctx.config.gallery.swipe_threshold);
    html! {
        (markdown::render(&doc, &gallery))
        @if !gallery.is_empty() {
            (gallery::render_lightbox(&gallery))
            script { (PreEscaped(LIGHTBOX_JS)) }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page: hero, about, case-study accordion
fn render_home(manifest: &Manifest, ctx: &SiteContext) -> Markup {
    let site = &ctx.config.site;
    let breakpoint = ctx.config.gallery.mobile_breakpoint;
    let use_cases = manifest.items(CollectionKind::UseCases);

    let content = html! {
        header.hero {
            div.hero-inner {
                h1.hero-title { (site.title) }
                p.hero-tagline { (site.tagline) }
            }
        }
        main.home {
            section.about {
                h2.about-heading { (site.about_heading) }
                div.about-body { (render_body(&site.about, None, ctx)) }
            }
            (listing::render_listing(
                CollectionKind::CaseStudies,
                manifest.items(CollectionKind::CaseStudies),
                &ListingState::default(),
                breakpoint,
            ))
            @if !use_cases.is_empty() {
                p.more-link {
                    a href="/use-cases/" { "Browse " (use_cases.len()) " use cases →" }
                }
            }
        }
        script { (PreEscaped(LISTING_JS)) }
    };

    base_document(ctx, &site.title, "home-page", content)
}

/// Renders a collection's accordion on a page of its own
fn render_listing_page(kind: CollectionKind, items: &[ContentItem], ctx: &SiteContext) -> Markup {
    let content = html! {
        main.listing-page {
            a.back-link href="/" { "← Back to Home" }
            (listing::render_listing(
                kind,
                items,
                &ListingState::default(),
                ctx.config.gallery.mobile_breakpoint,
            ))
        }
        script { (PreEscaped(LISTING_JS)) }
    };
    base_document(ctx, kind.heading(), "listing-page", content)
}

/// Renders the detail page for `slug` within `items`.
///
/// Returns `None` when the slug isn't part of the collection: that request is
/// served by `404.html` instead.
pub fn render_detail(
    kind: CollectionKind,
    items: &[ContentItem],
    slug: &str,
    ctx: &SiteContext,
) -> Option<Markup> {
    let neighbors = navigation::neighbors(items, slug)?;
    let item = items.iter().find(|i| i.slug == slug)?;
    let (back_href, back_label) = kind.back_link();
    let byline = match kind {
        CollectionKind::UseCases => byline(item),
        CollectionKind::CaseStudies => None,
    };

    let content = html! {
        main.detail-page {
            a.back-link href=(back_href) { "← " (back_label) }
            article.detail {
                header.detail-header {
                    h1.detail-title { (item.title) }
                    @if let Some(byline) = byline {
                        p.byline { (byline) }
                    }
                }
                div.detail-body {
                    (render_body(&item.body, kind.image_base(), ctx))
                }
                (navigation::render_pager(kind, &neighbors))
            }
        }
    };
    Some(base_document(ctx, &item.title, "detail-page", content))
}

/// `author • date`, with whichever parts exist.
fn byline(item: &ContentItem) -> Option<String> {
    let parts: Vec<&str> = [item.author.as_deref(), item.date.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join(" • "))
}

fn render_not_found(ctx: &SiteContext) -> Markup {
    let content = html! {
        main.not-found {
            h1 { "Page not found" }
            p { "The page you're looking for doesn't exist or has moved." }
            a.back-link href="/" { "← Back to Home" }
        }
    };
    base_document(ctx, "Not Found", "not-found-page", content)
}

// ============================================================================
// Tests
// ============================================================================
