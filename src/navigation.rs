//! Previous/next links between detail pages, and the transition direction
//! they carry.
//!
//! Detail pages link to their neighbours by position in the collection. The
//! link adds `?direction=-1` (previous) or `?direction=1` (next), which
//! `static/transition.js` reads on arrival to slide the new page in from the
//! matching side. The query value has no other effect.

use crate::types::{CollectionKind, ContentItem};
use maud::{Markup, html};

/// Neighbours of an item in an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a ContentItem>,
    pub next: Option<&'a ContentItem>,
}

/// Locate `slug` in `items` and return its neighbours.
///
/// `None` means the slug doesn't exist: the page is not found.
pub fn neighbors<'a>(items: &'a [ContentItem], slug: &str) -> Option<Neighbors<'a>> {
    let index = items.iter().position(|item| item.slug == slug)?;
    Some(Neighbors {
        previous: index.checked_sub(1).and_then(|i| items.get(i)),
        next: items.get(index + 1),
    })
}

/// Page-transition variant selected by the `direction` query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    None,
    Forward,
}

impl Direction {
    /// Parse a `direction` query value the way the page script does with
    /// `parseInt`: leading whitespace, an optional sign, then digits, with
    /// anything after the digits ignored. Only the sign matters; no digits
    /// or zero means no direction.
    pub fn from_query(value: &str) -> Self {
        let rest = value.trim_start();
        let (negative, digits) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };
        let digits: &str = &digits[..digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len())];
        if digits.is_empty() || digits.bytes().all(|b| b == b'0') {
            Direction::None
        } else if negative {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    pub fn query_value(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::None => 0,
            Direction::Forward => 1,
        }
    }

    /// CSS class applied to the page wrapper on arrival.
    pub fn enter_class(self) -> Option<&'static str> {
        match self {
            Direction::Backward => Some("enter-from-left"),
            Direction::None => None,
            Direction::Forward => Some("enter-from-right"),
        }
    }

    /// URL of a neighbouring detail page carrying this direction.
    pub fn link(self, kind: CollectionKind, slug: &str) -> String {
        format!("{}?direction={}", kind.detail_url(slug), self.query_value())
    }
}

/// The previous/next footer of a detail page. Missing neighbours leave an
/// empty slot so the remaining link keeps its side.
pub fn render_pager(kind: CollectionKind, neighbors: &Neighbors) -> Markup {
    html! {
        nav.pager aria-label="Pagination" {
            div.pager-slot {
                @if let Some(prev) = neighbors.previous {
                    a.pager-link.pager-prev href=(Direction::Backward.link(kind, &prev.slug)) rel="prev" {
                        span.pager-arrow aria-hidden="true" { "←" }
                        span.pager-text {
                            span.pager-label { "Previous" }
                            span.pager-title { (prev.title) }
                        }
                    }
                }
            }
            div.pager-slot {
                @if let Some(next) = neighbors.next {
                    a.pager-link.pager-next href=(Direction::Forward.link(kind, &next.slug)) rel="next" {
                        span.pager-text {
                            span.pager-label { "Next" }
                            span.pager-title { (next.title) }
                        }
                        span.pager-arrow aria-hidden="true" { "→" }
                    }
                }
            }
        }
    }
}
