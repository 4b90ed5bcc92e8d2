use serde::Serialize;

use super::{Paginator, UrlWindow};

/// One entry of the rendered page-link strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Page { number: u64, url: String },
    Ellipsis,
}

impl Element {
    pub const fn page_number(&self) -> Option<u64> {
        match self {
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }

    pub const fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

impl<T> Paginator<T> {
    /// Page links in render order. Computed fresh on every call.
    pub fn elements(&self) -> Vec<Element> {
        merge(&UrlWindow::from_paginator(self), |page| self.url(page))
    }
}

/// Joins the window zones left to right. A gap of a single page is filled
/// with that page, a wider gap becomes one ellipsis.
pub fn merge(window: &UrlWindow, url: impl Fn(u64) -> String) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut last_emitted = 0;

    for zone in [&window.first, &window.slider, &window.last] {
        // zones may overlap for tiny radii, never emit a page twice
        let floor = last_emitted;
        let mut pages = zone.iter().copied().filter(move |page| *page > floor).peekable();
        let Some(&next) = pages.peek() else {
            continue;
        };

        if last_emitted > 0 {
            match next - last_emitted - 1 {
                0 => {}
                1 => elements.push(page(last_emitted + 1, &url)),
                _ => elements.push(Element::Ellipsis),
            }
        }

        for number in pages {
            elements.push(page(number, &url));
            last_emitted = number;
        }
    }
    elements
}

fn page(number: u64, url: &impl Fn(u64) -> String) -> Element {
    Element::Page {
        number,
        url: url(number),
    }
}
