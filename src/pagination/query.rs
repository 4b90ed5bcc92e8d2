use serde::Deserialize;

use super::Paginator;
use crate::configuration::PaginationSettings;

const fn default_page() -> u64 {
    1
}

// how a hosting http layer reads `?page=..&per_page=..`
// missing or zero values fall back to sane bounds instead of failing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default)]
    pub per_page: Option<u64>,
}

impl PaginationQuery {
    pub const fn new(page: u64, per_page: Option<u64>) -> Self {
        Self { page, per_page }
    }

    pub fn page(&self) -> u64 {
        self.page.max(1)
    }

    pub fn per_page(&self, settings: &PaginationSettings) -> u64 {
        let max = settings.max_per_page.max(1);
        self.per_page
            .unwrap_or(settings.default_per_page)
            .clamp(1, max)
    }

    pub fn limit(&self, settings: &PaginationSettings) -> u64 {
        self.per_page(settings)
    }

    pub fn offset(&self, settings: &PaginationSettings) -> u64 {
        (self.page() - 1).saturating_mul(self.per_page(settings))
    }

    /// Builds the paginator for rows fetched with `limit`/`offset`,
    /// pointing its links at the configured base url.
    pub fn paginate<T>(
        &self,
        items: Vec<T>,
        total: u64,
        settings: &PaginationSettings,
    ) -> Paginator<T> {
        let mut paginator = Paginator::new(items, total, self.per_page(settings), self.page())
            .with_path(settings.base_url.clone())
            .with_page_name(settings.page_name.clone())
            .with_on_each_side(settings.on_each_side);
        // links carry the clamped size the page was actually built with
        if self.per_page.is_some() {
            paginator = paginator.append_query("per_page", self.per_page(settings).to_string());
        }
        paginator
    }
}
