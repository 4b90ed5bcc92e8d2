use serde::{Serialize, Serializer};

use super::url::UrlBuilder;

pub const DEFAULT_ON_EACH_SIDE: u64 = 3;

/// A page of results that knows the total row count, so it can compute
/// the last page and the links between pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator<T> {
    items: Vec<T>,
    total: u64,
    per_page: u64,
    current_page: u64,
    last_page: u64,
    on_each_side: u64,
    fragment: Option<String>,
    url: UrlBuilder,
}

impl<T> Paginator<T> {
    /// # Panics
    /// when `per_page` or `current_page` is zero
    pub fn new(items: Vec<T>, total: u64, per_page: u64, current_page: u64) -> Self {
        let mut paginator = Self {
            items: Vec::new(),
            total: 0,
            per_page: 1,
            current_page: 1,
            last_page: 1,
            on_each_side: DEFAULT_ON_EACH_SIDE,
            fragment: None,
            url: UrlBuilder::default(),
        };
        paginator.reconstruct(items, total, per_page, current_page);
        paginator
    }

    /// Replaces the page contents and recomputes the last page.
    /// The window radius and the fragment go back to their defaults,
    /// the url settings are kept.
    ///
    /// # Panics
    /// when `per_page` or `current_page` is zero
    pub fn reconstruct(
        &mut self,
        items: Vec<T>,
        total: u64,
        per_page: u64,
        current_page: u64,
    ) -> &mut Self {
        assert!(per_page > 0, "per_page must be greater than zero");
        assert!(current_page > 0, "current_page is 1-indexed and must be greater than zero");

        self.items = items;
        self.total = total;
        self.per_page = per_page;
        self.current_page = current_page;
        // an empty result set still has one (empty) page
        self.last_page = total.div_ceil(per_page).max(1);
        self.on_each_side = DEFAULT_ON_EACH_SIDE;
        self.fragment = None;
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.url.set_path(path);
        self
    }

    #[must_use]
    pub fn with_page_name(mut self, page_name: impl Into<String>) -> Self {
        self.url.set_page_name(page_name);
        self
    }

    #[must_use]
    pub fn append_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.url.append(key, value);
        self
    }

    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    #[must_use]
    pub fn with_on_each_side(mut self, on_each_side: u64) -> Self {
        self.on_each_side = on_each_side;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub const fn total(&self) -> u64 {
        self.total
    }

    pub const fn per_page(&self) -> u64 {
        self.per_page
    }

    pub const fn current_page(&self) -> u64 {
        self.current_page
    }

    pub const fn last_page(&self) -> u64 {
        self.last_page
    }

    pub const fn on_each_side(&self) -> u64 {
        self.on_each_side
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn first_item(&self) -> Option<u64> {
        if self.total == 0 {
            return None;
        }
        Some(
            (self.current_page - 1)
                .saturating_mul(self.per_page)
                .saturating_add(1),
        )
    }

    pub fn last_item(&self) -> u64 {
        self.current_page.saturating_mul(self.per_page).min(self.total)
    }

    pub const fn has_pages(&self) -> bool {
        self.last_page > 1
    }

    pub const fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page
    }

    pub const fn on_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn url(&self, page: u64) -> String {
        self.url.build(page, self.fragment.as_deref())
    }

    pub fn next_page_url(&self) -> Option<String> {
        self.has_more_pages()
            .then(|| self.url(self.current_page + 1))
    }

    pub fn previous_page_url(&self) -> Option<String> {
        (self.current_page > 1).then(|| self.url(self.current_page - 1))
    }

    /// The JSON API form of this page.
    pub fn to_array(&self) -> PageArray<'_, T> {
        PageArray {
            current_page: self.current_page,
            data: &self.items,
            first_page_url: self.url(1),
            from: self.first_item(),
            last_page: self.last_page,
            last_page_url: self.url(self.last_page),
            next_page_url: self.next_page_url(),
            per_page: self.per_page,
            prev_page_url: self.previous_page_url(),
            to: self.last_item(),
            total: self.total,
        }
    }
}

// field names are consumed by existing API clients, keep them as they are
#[derive(Debug, Serialize)]
pub struct PageArray<'a, T> {
    pub current_page: u64,
    pub data: &'a [T],
    pub first_page_url: String,
    pub from: Option<u64>,
    pub last_page: u64,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub per_page: u64,
    pub prev_page_url: Option<String>,
    pub to: u64,
    pub total: u64,
}

impl<T: Serialize> Serialize for Paginator<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}
