use std::cell::RefCell;
use std::sync::LazyLock;

use paginate::{
    configuration::PaginationSettings,
    pagination::{Element, Paginator, RenderParams, Renderer},
    telemetry::{get_subscriber, init_subscriber},
};

// ensure the `tracing` subscriber is only initialized once using `LazyLock`
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

impl User {
    pub fn page(ids: std::ops::RangeInclusive<u64>) -> Vec<Self> {
        ids.map(|id| Self {
            id,
            name: format!("user-{id}"),
        })
        .collect()
    }
}

pub fn spawn_paginator(total: u64, per_page: u64, current_page: u64) -> Paginator<User> {
    LazyLock::force(&TRACING);

    let first = (current_page - 1) * per_page + 1;
    let last = (current_page * per_page).min(total);
    Paginator::new(User::page(first..=last), total, per_page, current_page).with_path("/users")
}

pub fn test_settings() -> PaginationSettings {
    PaginationSettings {
        base_url: "/users".into(),
        default_view: "pagination/tailwind.html".into(),
        ..PaginationSettings::default()
    }
}

/// Page numbers with `None` standing in for an ellipsis.
pub fn numbers(elements: &[Element]) -> Vec<Option<u64>> {
    elements.iter().map(Element::page_number).collect()
}

// keeps whatever it was asked to render so tests can inspect it
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: RefCell<Vec<(String, RenderParams)>>,
}

impl Renderer for RecordingRenderer {
    fn render(&self, view: &str, params: &RenderParams) -> Result<String, anyhow::Error> {
        self.calls
            .borrow_mut()
            .push((view.to_string(), params.clone()));
        Ok(serde_json::to_string(params)?)
    }
}

pub struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, view: &str, _params: &RenderParams) -> Result<String, anyhow::Error> {
        anyhow::bail!("template {view} not found")
    }
}
