use super::Paginator;

/// Page numbers shown as direct links, split into the leading block,
/// the block around the current page and the trailing block.
///
/// Zones are ordered left to right; an empty zone is simply not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlWindow {
    pub first: Vec<u64>,
    pub slider: Vec<u64>,
    pub last: Vec<u64>,
}

impl UrlWindow {
    pub fn from_paginator<T>(paginator: &Paginator<T>) -> Self {
        Self::compute(
            paginator.current_page(),
            paginator.last_page(),
            paginator.on_each_side(),
        )
    }

    pub fn compute(current_page: u64, last_page: u64, on_each_side: u64) -> Self {
        let window = on_each_side.saturating_mul(2);

        // small enough to show every page
        if last_page < window.saturating_add(on_each_side).saturating_add(2) {
            return Self::small_slider(last_page);
        }

        if current_page <= window {
            Self::too_close_to_beginning(window, on_each_side, last_page)
        } else if current_page > last_page - window {
            Self::too_close_to_ending(window, on_each_side, last_page)
        } else {
            Self::full_slider(current_page, on_each_side, last_page)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.slider.is_empty() && self.last.is_empty()
    }

    fn small_slider(last_page: u64) -> Self {
        Self {
            slider: range(1, last_page),
            ..Self::default()
        }
    }

    // the slider absorbs the leading block so links never repeat
    fn too_close_to_beginning(window: u64, on_each_side: u64, last_page: u64) -> Self {
        Self {
            first: Vec::new(),
            slider: range(1, window + on_each_side),
            last: finish(last_page),
        }
    }

    // a zero radius would otherwise start the slider past the last page
    fn too_close_to_ending(window: u64, on_each_side: u64, last_page: u64) -> Self {
        let from = (last_page - window - on_each_side + 1).min(last_page);
        Self {
            first: start(),
            slider: range(from, last_page),
            last: Vec::new(),
        }
    }

    fn full_slider(current_page: u64, on_each_side: u64, last_page: u64) -> Self {
        let from = current_page.saturating_sub(on_each_side).max(1);
        let to = current_page.saturating_add(on_each_side).min(last_page);
        Self {
            first: start(),
            slider: range(from, to),
            last: finish(last_page),
        }
    }
}

fn start() -> Vec<u64> {
    vec![1, 2]
}

fn finish(last_page: u64) -> Vec<u64> {
    vec![last_page - 1, last_page]
}

fn range(from: u64, to: u64) -> Vec<u64> {
    (from..=to).collect()
}
