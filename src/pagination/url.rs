use urlencoding::encode;

pub const DEFAULT_PAGE_NAME: &str = "page";

/// Builds page links: `path?preserved=query&page=N#fragment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    path: String,
    page_name: String,
    query: Vec<(String, String)>,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new("/")
    }
}

impl UrlBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            page_name: DEFAULT_PAGE_NAME.to_string(),
            query: Vec::new(),
        }
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
    }

    pub fn set_page_name(&mut self, page_name: impl Into<String>) {
        self.page_name = page_name.into();
    }

    // a later value for the same key replaces the earlier one,
    // and the page parameter itself is never preserved
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.query.push((key, value)),
        }
    }

    pub fn build(&self, page: u64, fragment: Option<&str>) -> String {
        let page = page.max(1);

        let mut params: Vec<String> = self
            .query
            .iter()
            .filter(|(k, _)| *k != self.page_name)
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect();
        params.push(format!("{}={page}", encode(&self.page_name)));

        // the base path may already carry a query string
        let separator = if self.path.contains('?') { '&' } else { '?' };
        let mut url = format!("{}{separator}{}", self.path, params.join("&"));

        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}
