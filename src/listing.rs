//! Expandable summary cards with single-open accordion state.
//!
//! A listing shows one card per content item: the title links to the detail
//! page, the description stays folded until the card is expanded. At most one
//! card is expanded at a time.
//!
//! How a card is expanded depends on the viewport: at or above the mobile
//! breakpoint, hovering in and out toggles it; below, only a tap does.
//! `static/listing.js` applies the same rules in the browser.

use crate::types::{CollectionKind, ContentItem};
use maud::{Markup, html};

/// Pointer interactions a card reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    HoverEnter,
    HoverExit,
    Tap,
}

/// Viewport width in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    pub fn is_desktop(self, breakpoint: u32) -> bool {
        self.width >= breakpoint
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingState {
    expanded: Option<usize>,
}

impl ListingState {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Toggle `index`; expanding one card folds whichever was open.
    pub fn expand(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Route a pointer event on card `index` according to viewport width.
    ///
    /// Returns whether the event toggled the card.
    pub fn on_pointer(
        &mut self,
        event: PointerEvent,
        index: usize,
        viewport: Viewport,
        breakpoint: u32,
    ) -> bool {
        let desktop = viewport.is_desktop(breakpoint);
        let toggles = match event {
            PointerEvent::HoverEnter | PointerEvent::HoverExit => desktop,
            PointerEvent::Tap => !desktop,
        };
        if toggles {
            self.expand(index);
        }
        toggles
    }
}

/// Render the accordion for a collection, in the given state.
pub fn render_listing(
    kind: CollectionKind,
    items: &[ContentItem],
    state: &ListingState,
    breakpoint: u32,
) -> Markup {
    html! {
        section.listing data-breakpoint=(breakpoint) {
            h2.listing-heading { (kind.heading()) }
            @if items.is_empty() {
                p.listing-empty { "Nothing here yet." }
            }
            div.listing-cards {
                @for (index, item) in items.iter().enumerate() {
                    (render_card(kind, item, index, state.is_expanded(index)))
                }
            }
        }
    }
}

fn render_card(kind: CollectionKind, item: &ContentItem, index: usize, expanded: bool) -> Markup {
    let class = if expanded { "card expanded" } else { "card" };
    let delay = format!("--card-delay: {:.1}s;", index as f64 * 0.1);
    html! {
        article class=(class) data-index=(index) aria-expanded=(expanded) style=(delay) {
            p.card-title {
                a href=(kind.detail_url(&item.slug)) { (item.title) }
                span.card-arrow aria-hidden="true" { "↗" }
            }
            @if !item.description.is_empty() {
                div.card-description hidden[!expanded] {
                    p { (item.description) }
                }
            }
        }
    }
}
