//! Image gallery and lightbox state.
//!
//! Every rendered document owns one [`GalleryState`] built from the images of
//! its parsed markdown tree, in document order. Inline images are rendered
//! with the index [`GalleryState::index_of`] assigns them; tapping one on a
//! narrow viewport opens a full-screen lightbox that can be swiped, stepped
//! with buttons, and dismissed with Escape.
//!
//! The browser half lives in `static/lightbox.js` and mirrors this module
//! operation for operation:
//!
//! | Rust | JavaScript |
//! |------|------------|
//! | [`GalleryState::open`] | `open(index)` on tap of `.zoomable` |
//! | [`GalleryState::close`] | close button, backdrop tap, Escape |
//! | [`GalleryState::next`] / [`GalleryState::previous`] | buttons, swipe |
//! | [`SwipeTracker`] | `touchstart` / `touchmove` / `touchend` |
//!
//! ## URL Normalization
//!
//! Sources copied out of a deployed site often carry an image-proxy wrapping
//! (`/_next/image?url=%2Fphotos%2Fa.png&w=1080&q=75`). [`normalize_image_url`]
//! unwraps and percent-decodes them so the same picture compares equal however
//! it was referenced. Malformed encodings fall back to the raw string.

use maud::{Markup, PreEscaped, html};
use serde::Serialize;

/// Minimum horizontal travel, in CSS pixels, for a touch gesture to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

const PROXY_PREFIX: &str = "/_next/image?url=";

/// Undo image-proxy wrapping and percent-encoding.
///
/// Returns `None` for empty sources: such images are not rendered at all.
pub fn normalize_image_url(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }

    let unwrapped = match url.find(PROXY_PREFIX) {
        // The wrapped URL is itself encoded, so the first raw `&` starts the
        // proxy's own parameters.
        Some(pos) => {
            let inner = &url[pos + PROXY_PREFIX.len()..];
            inner.split('&').next().unwrap_or(inner)
        }
        None => url,
    };

    let decoded = if has_malformed_escape(unwrapped) {
        tracing::debug!(url = unwrapped, "keeping image url with malformed escape");
        unwrapped.to_string()
    } else {
        match urlencoding::decode(unwrapped) {
            Ok(decoded) => decoded.into_owned(),
            Err(err) => {
                tracing::debug!(url = unwrapped, %err, "keeping undecodable image url");
                unwrapped.to_string()
            }
        }
    };
    (!decoded.is_empty()).then_some(decoded)
}

/// A `%` not followed by two hex digits. `urlencoding` passes these through
/// literally; a browser's `decodeURIComponent` rejects the whole string.
fn has_malformed_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(h), Some(l)) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit()
            )
    })
}

/// One entry of a document's image sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
}

impl GalleryImage {
    /// Build an entry from a raw source; `None` when the source is empty.
    pub fn new(src: &str, alt: &str) -> Option<Self> {
        Some(Self {
            url: normalize_image_url(src)?,
            alt: alt.to_string(),
        })
    }
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Lightbox state for one rendered document.
///
/// Invariants:
/// - `current < images.len()` whenever `images` is non-empty
/// - `zoomed` implies `images` is non-empty
#[derive(Debug, Clone)]
pub struct GalleryState {
    images: Vec<GalleryImage>,
    current: usize,
    zoomed: bool,
    swipe_threshold: f64,
}

impl GalleryState {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self::with_threshold(images, DEFAULT_SWIPE_THRESHOLD)
    }

    pub fn with_threshold(images: Vec<GalleryImage>, swipe_threshold: f64) -> Self {
        Self {
            images,
            current: 0,
            zoomed: false,
            swipe_threshold,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.images.get(self.current)
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// The Escape listener exists exactly while the lightbox is open.
    pub fn escape_listener_attached(&self) -> bool {
        self.zoomed
    }

    /// Whether navigation controls (buttons, counter) are shown.
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    /// Position of a source in the image sequence, after normalization.
    ///
    /// Duplicated sources resolve to their first occurrence.
    pub fn index_of(&self, src: &str) -> Option<usize> {
        let wanted = normalize_image_url(src)?;
        self.images.iter().position(|img| img.url == wanted)
    }

    /// Open the lightbox on `src`, or on the first image if it isn't part of
    /// this document. Does nothing for a document without images.
    pub fn open(&mut self, src: &str) {
        if self.images.is_empty() {
            return;
        }
        self.current = self.index_of(src).unwrap_or(0);
        self.zoomed = true;
    }

    pub fn close(&mut self) {
        self.zoomed = false;
    }

    pub fn next(&mut self) {
        let len = self.images.len();
        if len > 1 {
            self.current = (self.current + 1) % len;
        }
    }

    pub fn previous(&mut self) {
        let len = self.images.len();
        if len > 1 {
            self.current = (self.current + len - 1) % len;
        }
    }

    /// Apply a horizontal gesture of `delta_x` pixels (end − start).
    ///
    /// Leftward travel advances, rightward travel goes back. Returns whether
    /// the gesture counted as a swipe.
    pub fn on_swipe(&mut self, delta_x: f64) -> bool {
        if delta_x <= -self.swipe_threshold {
            self.next();
            true
        } else if delta_x >= self.swipe_threshold {
            self.previous();
            true
        } else {
            false
        }
    }

    /// Handle a key press. Only Escape is bound, and only while open.
    pub fn on_key(&mut self, key: Key) -> bool {
        if self.escape_listener_attached() && key == Key::Escape {
            self.close();
            return true;
        }
        false
    }

    /// 1-based `n / total` label shown under the lightbox image.
    pub fn counter_label(&self) -> Option<String> {
        self.has_navigation()
            .then(|| format!("{} / {}", self.current + 1, self.images.len()))
    }
}

/// Touch bookkeeping for one gesture.
///
/// A tap (start without move) produces no swipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwipeTracker {
    start: Option<f64>,
    end: Option<f64>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: f64) {
        self.start = Some(x);
        self.end = None;
    }

    pub fn touch_move(&mut self, x: f64) {
        self.end = Some(x);
    }

    /// Finish the gesture, returning `end − start` if both were recorded.
    pub fn touch_end(&mut self) -> Option<f64> {
        let delta = match (self.start, self.end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        };
        *self = Self::default();
        delta
    }
}

// ============================================================================
// Markup
// ============================================================================

/// Inline, zoomable image. Renders nothing for an empty source.
pub fn render_inline_image(gallery: &GalleryState, src: &str, alt: &str) -> Markup {
    let Some(url) = normalize_image_url(src) else {
        return html! {};
    };
    let index = gallery.index_of(src).unwrap_or(0);
    let alt = if alt.is_empty() { "Case study image" } else { alt };
    html! {
        figure.zoomable data-gallery-index=(index) {
            img src=(url) alt=(alt) loading="lazy";
        }
    }
}

/// The lightbox overlay for a document. Hidden until opened by script.
///
/// The image list is embedded as JSON so the script never has to scan the DOM.
pub fn render_lightbox(gallery: &GalleryState) -> Markup {
    if gallery.is_empty() {
        return html! {};
    }
    let images_json = serde_json::to_string(gallery.images()).unwrap_or_else(|_| "[]".into());
    let first = &gallery.images()[0];
    html! {
        div.lightbox hidden
            data-swipe-threshold=(gallery.swipe_threshold)
            role="dialog" aria-modal="true" aria-label="Image viewer" {
            script.lightbox-images type="application/json" { (PreEscaped(escape_script_json(&images_json))) }
            div.lightbox-frame {
                img.lightbox-image src=(first.url) alt=(first.alt);
            }
            @if gallery.has_navigation() {
                button.lightbox-prev type="button" aria-label="Previous image" { "←" }
                button.lightbox-next type="button" aria-label="Next image" { "→" }
                div.lightbox-counter { (gallery.counter_label().unwrap_or_default()) }
            }
            button.lightbox-close type="button" aria-label="Close" { "×" }
        }
    }
}

/// Keep embedded JSON from closing its `<script>` element early.
fn escape_script_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
