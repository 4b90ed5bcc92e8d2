use std::collections::BTreeMap;

use super::{Predicate, SearchPattern, SelectQuery, SortDirection};

/// The search box under a column header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    pub visible: bool,
    pub placeholder: Option<String>,
    pub value: String,
    pub can_search: bool,
    pub search_columns: Vec<String>,
    pub search_pattern: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub input: Input,
}

/// A searchable, sortable listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<Header>,
    pub params: BTreeMap<String, String>,
    pub order_by_col: Option<String>,
    pub order_by_sort: SortDirection,
}

impl Table {
    pub fn new(headers: Vec<Header>) -> Self {
        Self {
            headers,
            ..Self::default()
        }
    }

    /// Copies request parameters into the search inputs, keyed by header name.
    pub fn apply_params(&mut self) {
        for header in &mut self.headers {
            if let Some(value) = self.params.get(&header.name) {
                header.input.value.clone_from(value);
            }
        }
    }

    pub fn query_count(&self, table: &str) -> SelectQuery {
        SelectQuery::new("count(*)", table)
    }

    #[tracing::instrument(name = "Build search query", skip(self))]
    pub fn query_select(&self, table: &str, per_page: u64, current_page: u64) -> SelectQuery {
        let mut query = SelectQuery::new("*", table)
            .limit(per_page)
            .offset(current_page.saturating_sub(1).saturating_mul(per_page));

        if let Some(column) = &self.order_by_col {
            query = query.order_by(column.clone(), self.order_by_sort);
        }

        for predicate in self.predicates() {
            query = query.filter(predicate);
        }
        query
    }

    /// One OR group per searched header.
    pub fn predicates(&self) -> Vec<Predicate> {
        self.headers
            .iter()
            .filter(|h| h.input.can_search && !h.input.value.is_empty())
            .filter_map(|h| {
                let Some(pattern) = SearchPattern::from_token(&h.input.search_pattern) else {
                    tracing::warn!(
                        header = %h.name,
                        pattern = %h.input.search_pattern,
                        "Unknown search pattern, column is not filtered"
                    );
                    return None;
                };
                let group = Predicate::Or(
                    h.input
                        .search_columns
                        .iter()
                        .map(|column| pattern.predicate(column, &h.input.value))
                        .collect(),
                );
                (!group.is_empty()).then_some(group)
            })
            .collect()
    }
}
