//! Markdown → document tree → styled HTML.
//!
//! pulldown-cmark's flat event stream is folded into a small tree of
//! [`Block`] and [`Inline`] nodes, one variant per node kind, each carrying
//! only the fields that kind needs. Working on a tree instead of pushing
//! events straight into `html::push_html` lets the generator:
//!
//! - discover a document's images ([`Document::images`]) before anything is
//!   rendered, so each inline image knows its lightbox index;
//! - rebase relative image sources per collection ([`Document::rebase_images`]);
//! - attach its own class names to every element.
//!
//! A paragraph holding nothing but one image is promoted to [`Block::Image`]
//! and rendered as a zoomable figure.

use crate::gallery::{self, GalleryImage, GalleryState};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Code(String),
    Html(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        href: String,
        title: Option<String>,
        content: Vec<Inline>,
    },
    Image(ImageRef),
    /// Content of a construct without dedicated styling.
    Span(Vec<Inline>),
    SoftBreak,
    HardBreak,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    Image(ImageRef),
    Code { lang: Option<String>, code: String },
    Quote(Vec<Block>),
    List { start: Option<u64>, items: Vec<Vec<Block>> },
    Table {
        head: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    Rule,
    Html(String),
}

/// A parsed markdown body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn parse(markdown: &str) -> Self {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let mut builder = TreeBuilder {
            events: Parser::new_ext(markdown, options),
        };
        Document {
            blocks: builder.blocks(),
        }
    }

    /// All images in document order, normalized. Empty sources are skipped.
    pub fn images(&self) -> Vec<GalleryImage> {
        let mut found = Vec::new();
        visit_blocks(&self.blocks, &mut |image| {
            if let Some(entry) = GalleryImage::new(&image.src, &image.alt) {
                found.push(entry);
            }
        });
        found
    }

    /// Prefix relative image sources with `base`.
    ///
    /// Absolute paths, full URLs and data URIs are left alone.
    pub fn rebase_images(&mut self, base: &str) {
        visit_blocks_mut(&mut self.blocks, &mut |image| {
            if is_relative(&image.src) {
                image.src = format!("{}{}", base, image.src);
            }
        });
    }
}

fn is_relative(src: &str) -> bool {
    !src.is_empty()
        && !src.starts_with('/')
        && !src.starts_with("http://")
        && !src.starts_with("https://")
        && !src.starts_with("data:")
}

// ============================================================================
// Event stream → tree
// ============================================================================

struct TreeBuilder<I> {
    events: I,
}

impl<'a, I: Iterator<Item = Event<'a>>> TreeBuilder<I> {
    /// Blocks up to the end of the enclosing container (or the input).
    fn blocks(&mut self) -> Vec<Block> {
        let mut blocks = Vec::new();
        // Inline content directly inside a container, e.g. tight list items.
        let mut loose = Vec::new();

        while let Some(event) = self.events.next() {
            match event {
                Event::End(_) => break,
                Event::Start(Tag::Paragraph) => {
                    flush_loose(&mut blocks, &mut loose);
                    let content = self.inlines();
                    blocks.push(paragraph_block(content));
                }
                Event::Start(Tag::Heading { level, .. }) => {
                    flush_loose(&mut blocks, &mut loose);
                    blocks.push(Block::Heading {
                        level: heading_level(level),
                        content: self.inlines(),
                    });
                }
                Event::Start(Tag::BlockQuote(_)) => {
                    flush_loose(&mut blocks, &mut loose);
                    blocks.push(Block::Quote(self.blocks()));
                }
                Event::Start(Tag::CodeBlock(kind)) => {
                    flush_loose(&mut blocks, &mut loose);
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().map(str::to_string)
                        }
                        CodeBlockKind::Indented => None,
                    };
                    blocks.push(Block::Code {
                        lang,
                        code: self.raw_text(),
                    });
                }
                Event::Start(Tag::HtmlBlock) => {
                    flush_loose(&mut blocks, &mut loose);
                    blocks.push(Block::Html(self.raw_text()));
                }
                Event::Start(Tag::List(start)) => {
                    flush_loose(&mut blocks, &mut loose);
                    blocks.push(Block::List {
                        start,
                        items: self.list_items(),
                    });
                }
                Event::Start(Tag::Table(_)) => {
                    flush_loose(&mut blocks, &mut loose);
                    blocks.push(self.table());
                }
                Event::Rule => {
                    flush_loose(&mut blocks, &mut loose);
                    blocks.push(Block::Rule);
                }
                Event::Start(tag) if is_inline_tag(&tag) => {
                    if let Some(inline) = self.inline(Event::Start(tag)) {
                        push_inline(&mut loose, inline);
                    }
                }
                // Footnote definitions and the like: keep their content.
                Event::Start(_) => {
                    flush_loose(&mut blocks, &mut loose);
                    blocks.extend(self.blocks());
                }
                event => {
                    if let Some(inline) = self.inline(event) {
                        push_inline(&mut loose, inline);
                    }
                }
            }
        }
        flush_loose(&mut blocks, &mut loose);
        blocks
    }

    /// Inlines up to the end of the enclosing element.
    fn inlines(&mut self) -> Vec<Inline> {
        let mut out = Vec::new();
        while let Some(event) = self.events.next() {
            if let Event::End(_) = event {
                break;
            }
            if let Some(inline) = self.inline(event) {
                push_inline(&mut out, inline);
            }
        }
        out
    }

    fn inline(&mut self, event: Event<'a>) -> Option<Inline> {
        let inline = match event {
            Event::Text(text) => Inline::Text(text.to_string()),
            Event::Code(code) => Inline::Code(code.to_string()),
            Event::InlineHtml(raw) | Event::Html(raw) => Inline::Html(raw.to_string()),
            Event::SoftBreak => Inline::SoftBreak,
            Event::HardBreak => Inline::HardBreak,
            Event::Start(Tag::Emphasis) => Inline::Emphasis(self.inlines()),
            Event::Start(Tag::Strong) => Inline::Strong(self.inlines()),
            Event::Start(Tag::Strikethrough) => Inline::Strikethrough(self.inlines()),
            Event::Start(Tag::Link {
                dest_url, title, ..
            }) => Inline::Link {
                href: dest_url.to_string(),
                title: non_empty(&title),
                content: self.inlines(),
            },
            Event::Start(Tag::Image {
                dest_url, title, ..
            }) => {
                let alt = plain_text(&self.inlines());
                Inline::Image(ImageRef {
                    src: dest_url.to_string(),
                    alt,
                    title: non_empty(&title),
                })
            }
            Event::Start(_) => Inline::Span(self.inlines()),
            _ => return None,
        };
        Some(inline)
    }

    /// Literal text up to the end of a code or HTML block.
    fn raw_text(&mut self) -> String {
        let mut out = String::new();
        for event in self.events.by_ref() {
            match event {
                Event::End(_) => break,
                Event::Text(text) | Event::Html(text) | Event::Code(text) => out.push_str(&text),
                _ => {}
            }
        }
        out
    }

    fn list_items(&mut self) -> Vec<Vec<Block>> {
        let mut items = Vec::new();
        while let Some(event) = self.events.next() {
            match event {
                Event::Start(Tag::Item) => items.push(self.blocks()),
                Event::End(_) => break,
                _ => {}
            }
        }
        items
    }

    fn table(&mut self) -> Block {
        let mut head = Vec::new();
        let mut rows = Vec::new();
        while let Some(event) = self.events.next() {
            match event {
                Event::Start(Tag::TableHead) => head = self.table_cells(),
                Event::Start(Tag::TableRow) => rows.push(self.table_cells()),
                Event::End(_) => break,
                _ => {}
            }
        }
        Block::Table { head, rows }
    }

    fn table_cells(&mut self) -> Vec<Vec<Inline>> {
        let mut cells = Vec::new();
        while let Some(event) = self.events.next() {
            match event {
                Event::Start(Tag::TableCell) => cells.push(self.inlines()),
                Event::Start(Tag::TableRow) => cells.extend(self.table_cells()),
                Event::End(_) => break,
                _ => {}
            }
        }
        cells
    }
}

fn is_inline_tag(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Append an inline, merging adjacent text runs.
fn push_inline(out: &mut Vec<Inline>, inline: Inline) {
    if let Inline::Text(next) = &inline
        && let Some(Inline::Text(prev)) = out.last_mut()
    {
        prev.push_str(next);
        return;
    }
    out.push(inline);
}

fn flush_loose(blocks: &mut Vec<Block>, loose: &mut Vec<Inline>) {
    if !loose.is_empty() {
        blocks.push(paragraph_block(std::mem::take(loose)));
    }
}

fn is_blank(inline: &Inline) -> bool {
    match inline {
        Inline::Text(t) => t.trim().is_empty(),
        Inline::SoftBreak | Inline::HardBreak => true,
        _ => false,
    }
}

fn paragraph_block(content: Vec<Inline>) -> Block {
    let mut meaningful = content.iter().filter(|i| !is_blank(i));
    if let (Some(Inline::Image(image)), None) = (meaningful.next(), meaningful.next()) {
        return Block::Image(image.clone());
    }
    Block::Paragraph(content)
}

/// Flatten inlines to their text, as used for image alt text.
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) | Inline::Code(t) => out.push_str(t),
            Inline::Emphasis(c)
            | Inline::Strong(c)
            | Inline::Strikethrough(c)
            | Inline::Span(c)
            | Inline::Link { content: c, .. } => out.push_str(&plain_text(c)),
            Inline::Image(image) => out.push_str(&image.alt),
            Inline::SoftBreak | Inline::HardBreak => out.push(' '),
            Inline::Html(_) => {}
        }
    }
    out
}

fn contains_image(inlines: &[Inline]) -> bool {
    inlines.iter().any(|inline| match inline {
        Inline::Image(_) => true,
        Inline::Emphasis(c)
        | Inline::Strong(c)
        | Inline::Strikethrough(c)
        | Inline::Span(c)
        | Inline::Link { content: c, .. } => contains_image(c),
        _ => false,
    })
}

// ============================================================================
// Image visitors
// ============================================================================

fn visit_blocks(blocks: &[Block], f: &mut impl FnMut(&ImageRef)) {
    for block in blocks {
        match block {
            Block::Heading { content, .. } | Block::Paragraph(content) => visit_inlines(content, f),
            Block::Image(image) => f(image),
            Block::Quote(inner) => visit_blocks(inner, f),
            Block::List { items, .. } => items.iter().for_each(|item| visit_blocks(item, f)),
            Block::Table { head, rows } => {
                head.iter().for_each(|cell| visit_inlines(cell, f));
                rows.iter().flatten().for_each(|cell| visit_inlines(cell, f));
            }
            Block::Code { .. } | Block::Rule | Block::Html(_) => {}
        }
    }
}

fn visit_inlines(inlines: &[Inline], f: &mut impl FnMut(&ImageRef)) {
    for inline in inlines {
        match inline {
            Inline::Image(image) => f(image),
            Inline::Emphasis(c)
            | Inline::Strong(c)
            | Inline::Strikethrough(c)
            | Inline::Span(c)
            | Inline::Link { content: c, .. } => visit_inlines(c, f),
            _ => {}
        }
    }
}

fn visit_blocks_mut(blocks: &mut [Block], f: &mut impl FnMut(&mut ImageRef)) {
    for block in blocks {
        match block {
            Block::Heading { content, .. } | Block::Paragraph(content) => {
                visit_inlines_mut(content, f)
            }
            Block::Image(image) => f(image),
            Block::Quote(inner) => visit_blocks_mut(inner, f),
            Block::List { items, .. } => items.iter_mut().for_each(|item| visit_blocks_mut(item, f)),
            Block::Table { head, rows } => {
                head.iter_mut().for_each(|cell| visit_inlines_mut(cell, f));
                rows.iter_mut()
                    .flatten()
                    .for_each(|cell| visit_inlines_mut(cell, f));
            }
            Block::Code { .. } | Block::Rule | Block::Html(_) => {}
        }
    }
}

fn visit_inlines_mut(inlines: &mut [Inline], f: &mut impl FnMut(&mut ImageRef)) {
    for inline in inlines {
        match inline {
            Inline::Image(image) => f(image),
            Inline::Emphasis(c)
            | Inline::Strong(c)
            | Inline::Strikethrough(c)
            | Inline::Span(c)
            | Inline::Link { content: c, .. } => visit_inlines_mut(c, f),
            _ => {}
        }
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a document; images resolve their lightbox index through `gallery`.
pub fn render(doc: &Document, gallery: &GalleryState) -> Markup {
    render_blocks(&doc.blocks, gallery)
}

fn render_blocks(blocks: &[Block], gallery: &GalleryState) -> Markup {
    html! {
        @for block in blocks {
            (render_block(block, gallery))
        }
    }
}

fn render_block(block: &Block, gallery: &GalleryState) -> Markup {
    match block {
        Block::Heading { level, content } => {
            let inner = render_inlines(content, gallery);
            match level {
                1 => html! { h1.md-h1 { (inner) } },
                2 => html! { h2.md-h2 { (inner) } },
                3 => html! { h3.md-h3 { (inner) } },
                4 => html! { h4.md-h4 { (inner) } },
                5 => html! { h5.md-h5 { (inner) } },
                _ => html! { h6.md-h6 { (inner) } },
            }
        }
        // A <figure> can't live inside <p>.
        Block::Paragraph(content) if contains_image(content) => html! {
            div.md-p { (render_inlines(content, gallery)) }
        },
        Block::Paragraph(content) => html! {
            p.md-p { (render_inlines(content, gallery)) }
        },
        Block::Image(image) => gallery::render_inline_image(gallery, &image.src, &image.alt),
        Block::Code { lang, code } => {
            let class = lang.as_ref().map(|l| format!("language-{l}"));
            html! {
                pre.md-code { code class=[class] { (code) } }
            }
        }
        Block::Quote(inner) => html! {
            blockquote.md-quote { (render_blocks(inner, gallery)) }
        },
        Block::List { start: None, items } => html! {
            ul.md-ul {
                @for item in items { li { (render_blocks(item, gallery)) } }
            }
        },
        Block::List {
            start: Some(start),
            items,
        } => {
            let start = (*start != 1).then_some(*start);
            html! {
                ol.md-ol start=[start] {
                    @for item in items { li { (render_blocks(item, gallery)) } }
                }
            }
        }
        Block::Table { head, rows } => html! {
            div.md-table-wrap {
                table.md-table {
                    @if !head.is_empty() {
                        thead { tr {
                            @for cell in head { th { (render_inlines(cell, gallery)) } }
                        } }
                    }
                    tbody {
                        @for row in rows {
                            tr { @for cell in row { td { (render_inlines(cell, gallery)) } } }
                        }
                    }
                }
            }
        },
        Block::Rule => html! { hr; },
        Block::Html(raw) => html! { (PreEscaped(raw)) },
    }
}

fn render_inlines(inlines: &[Inline], gallery: &GalleryState) -> Markup {
    html! {
        @for inline in inlines {
            (render_inline(inline, gallery))
        }
    }
}

fn render_inline(inline: &Inline, gallery: &GalleryState) -> Markup {
    match inline {
        Inline::Text(text) => html! { (text) },
        Inline::Code(code) => html! { code.md-inline-code { (code) } },
        Inline::Html(raw) => html! { (PreEscaped(raw)) },
        Inline::Emphasis(c) => html! { em { (render_inlines(c, gallery)) } },
        Inline::Strong(c) => html! { strong { (render_inlines(c, gallery)) } },
        Inline::Strikethrough(c) => html! { del { (render_inlines(c, gallery)) } },
        Inline::Span(c) => render_inlines(c, gallery),
        Inline::Link {
            href,
            title,
            content,
        } => html! {
            a.md-link href=(href) title=[title] { (render_inlines(content, gallery)) }
        },
        Inline::Image(image) => gallery::render_inline_image(gallery, &image.src, &image.alt),
        Inline::SoftBreak => html! { "\n" },
        Inline::HardBreak => html! { br; },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_str(markdown: &str) -> String {
        let doc = Document::parse(markdown);
        let gallery = GalleryState::new(doc.images());
        render(&doc, &gallery).into_string()
    }

    // =========================================================================
    // Tree building
    // =========================================================================

    #[test]
    fn heading_levels() {
        let doc = Document::parse("# One\n\n### Three\n");
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading {
                    level: 1,
                    content: vec![Inline::Text("One".into())]
                },
                Block::Heading {
                    level: 3,
                    content: vec![Inline::Text("Three".into())]
                },
            ]
        );
    }

    #[test]
    fn paragraph_with_emphasis() {
        let doc = Document::parse("Some **bold** and *soft* text.");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(vec![
                Inline::Text("Some ".into()),
                Inline::Strong(vec![Inline::Text("bold".into())]),
                Inline::Text(" and ".into()),
                Inline::Emphasis(vec![Inline::Text("soft".into())]),
                Inline::Text(" text.".into()),
            ])]
        );
    }

    #[test]
    fn lone_image_is_promoted() {
        let doc = Document::parse("![A chart](/img/chart.png)\n");
        assert_eq!(
            doc.blocks,
            vec![Block::Image(ImageRef {
                src: "/img/chart.png".into(),
                alt: "A chart".into(),
                title: None,
            })]
        );
    }

    #[test]
    fn image_in_text_stays_inline() {
        let doc = Document::parse("See ![x](/x.png) here.");
        assert!(matches!(&doc.blocks[0], Block::Paragraph(c) if c.len() == 3));
    }

    #[test]
    fn fenced_code_keeps_language() {
        let doc = Document::parse("```rust title\nfn main() {}\n```\n");
        assert_eq!(
            doc.blocks,
            vec![Block::Code {
                lang: Some("rust".into()),
                code: "fn main() {}\n".into()
            }]
        );
    }

    #[test]
    fn tight_list_items_become_paragraphs() {
        let doc = Document::parse("- one\n- *two*\n");
        let Block::List { start, items } = &doc.blocks[0] else {
            panic!("expected list, got {:?}", doc.blocks);
        };
        assert_eq!(*start, None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], vec![Block::Paragraph(vec![Inline::Text("one".into())])]);
    }

    #[test]
    fn ordered_list_start() {
        let doc = Document::parse("3. three\n4. four\n");
        assert!(matches!(
            &doc.blocks[0],
            Block::List { start: Some(3), items } if items.len() == 2
        ));
    }

    #[test]
    fn nested_quote() {
        let doc = Document::parse("> quoted *words*\n");
        let Block::Quote(inner) = &doc.blocks[0] else {
            panic!("expected quote");
        };
        assert!(matches!(&inner[0], Block::Paragraph(_)));
    }

    #[test]
    fn table_head_and_rows() {
        let doc = Document::parse("| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n");
        let Block::Table { head, rows } = &doc.blocks[0] else {
            panic!("expected table, got {:?}", doc.blocks);
        };
        assert_eq!(head.len(), 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], vec![Inline::Text("3".into())]);
    }

    #[test]
    fn rule_and_html_block() {
        let doc = Document::parse("---\n\n<div class=\"x\">hi</div>\n");
        assert_eq!(doc.blocks[0], Block::Rule);
        assert!(matches!(&doc.blocks[1], Block::Html(raw) if raw.contains("class=\"x\"")));
    }

    // =========================================================================
    // Image discovery
    // =========================================================================

    #[test]
    fn images_in_document_order() {
        let doc = Document::parse(
            "![first](/a.png)\n\nText ![second](/b.png)\n\n> ![third](/c.png)\n\n- [![fourth](/d.png)](/link)\n",
        );
        let urls: Vec<String> = doc.images().into_iter().map(|i| i.url).collect();
        assert_eq!(urls, vec!["/a.png", "/b.png", "/c.png", "/d.png"]);
    }

    #[test]
    fn discovery_normalizes_and_skips_empty() {
        let doc = Document::parse("![a](/_next/image?url=%2Fp%2Fa.png)\n\n![empty]()\n");
        let images = doc.images();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "/p/a.png");
        assert_eq!(images[0].alt, "a");
    }

    #[test]
    fn rebase_only_relative_sources() {
        let mut doc = Document::parse(
            "![a](shot.png)\n\n![b](/abs.png)\n\n![c](https://cdn.example.com/c.png)\n",
        );
        doc.rebase_images("/images/use-cases/");
        let urls: Vec<String> = doc.images().into_iter().map(|i| i.url).collect();
        assert_eq!(
            urls,
            vec![
                "/images/use-cases/shot.png",
                "/abs.png",
                "https://cdn.example.com/c.png"
            ]
        );
    }

    #[test]
    fn alt_text_flattens_markup() {
        let doc = Document::parse("![a *b* `c`](/x.png)");
        assert_eq!(doc.images()[0].alt, "a b c");
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn renders_styled_elements() {
        let html = render_str("## Title\n\nText with [link](https://x.dev \"tip\") and `code`.\n");
        assert!(html.contains(r#"<h2 class="md-h2">Title</h2>"#));
        assert!(html.contains(r#"href="https://x.dev""#));
        assert!(html.contains(r#"title="tip""#));
        assert!(html.contains("md-link"));
        assert!(html.contains(r#"<code class="md-inline-code">code</code>"#));
        assert!(html.contains(r#"<p class="md-p">"#));
    }

    #[test]
    fn renders_images_with_indices() {
        let html = render_str("![a](/a.png)\n\n![b](/b.png)\n");
        assert!(html.contains(r#"data-gallery-index="0""#));
        assert!(html.contains(r#"data-gallery-index="1""#));
        assert!(html.contains("<figure"));
    }

    #[test]
    fn double_encoded_source_keeps_its_index() {
        let html = render_str("![b](/p/b.png)\n\n![a](/p/a%2520b.png)\n");
        assert!(html.contains(r#"data-gallery-index="0""#));
        assert!(html.contains(r#"data-gallery-index="1""#));
        assert!(html.contains(r#"src="/p/a%20b.png""#));
    }

    #[test]
    fn paragraph_with_image_renders_as_div() {
        let html = render_str("Look: ![a](/a.png)");
        assert!(html.contains(r#"<div class="md-p">"#));
        assert!(!html.contains("<p"));
    }

    #[test]
    fn code_block_is_escaped() {
        let html = render_str("```html\n<b>x</b>\n```\n");
        assert!(html.contains(r#"<code class="language-html">&lt;b&gt;x&lt;/b&gt;"#));
    }

    #[test]
    fn ordered_list_start_attribute() {
        assert!(render_str("1. a\n2. b\n").contains(r#"<ol class="md-ol">"#));
        assert!(render_str("5. a\n6. b\n").contains(r#"start="5""#));
    }

    #[test]
    fn table_markup() {
        let html = render_str("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("md-table-wrap"));
        assert!(html.contains("<th>a</th>"));
        assert!(html.contains("<td>2</td>"));
    }

    #[test]
    fn text_is_escaped() {
        let html = render_str("5 < 6 & 7 > 3");
        assert!(html.contains("5 &lt; 6 &amp; 7 &gt; 3"));
    }
}
