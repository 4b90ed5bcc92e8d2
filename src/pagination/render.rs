use serde::Serialize;

use super::{Element, Paginator};
use crate::configuration::PaginationSettings;
use crate::errors::RenderError;

/// Everything a page-link template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderParams {
    pub current_page: u64,
    pub total: u64,
    pub first_item: Option<u64>,
    pub last_item: u64,
    pub has_more_pages: bool,
    pub has_pages: bool,
    pub next_page_url: Option<String>,
    pub on_first_page: bool,
    pub previous_page_url: Option<String>,
    pub elements: Vec<Element>,
}

/// The template engine seam. Implementations turn a view name and the
/// pagination parameters into markup.
pub trait Renderer {
    fn render(&self, view: &str, params: &RenderParams) -> Result<String, anyhow::Error>;
}

impl<F> Renderer for F
where
    F: Fn(&str, &RenderParams) -> Result<String, anyhow::Error>,
{
    fn render(&self, view: &str, params: &RenderParams) -> Result<String, anyhow::Error> {
        self(view, params)
    }
}

impl<T> Paginator<T> {
    pub fn render_params(&self) -> RenderParams {
        RenderParams {
            current_page: self.current_page(),
            total: self.total(),
            first_item: self.first_item(),
            last_item: self.last_item(),
            has_more_pages: self.has_more_pages(),
            has_pages: self.has_pages(),
            next_page_url: self.next_page_url(),
            on_first_page: self.on_first_page(),
            previous_page_url: self.previous_page_url(),
            elements: self.elements(),
        }
    }

    /// Renders the page links with `view`, or with `default_view` when no
    /// view is given.
    #[tracing::instrument(
        name = "Render pagination links",
        skip(self, renderer),
        fields(current_page = %self.current_page(), last_page = %self.last_page())
    )]
    pub fn render<R: Renderer + ?Sized>(
        &self,
        renderer: &R,
        view: Option<&str>,
        default_view: &str,
    ) -> Result<String, RenderError> {
        let view = view.unwrap_or(default_view);
        if view.trim().is_empty() {
            return Err(RenderError::MissingView);
        }

        renderer
            .render(view, &self.render_params())
            .map_err(|e| {
                tracing::error!("Failed to render pagination view {view}: {e:?}");
                RenderError::ViewFailed {
                    view: view.to_string(),
                    source: e,
                }
            })
    }

    /// Renders with the configured default view.
    pub fn links<R: Renderer + ?Sized>(
        &self,
        renderer: &R,
        settings: &PaginationSettings,
    ) -> Result<String, RenderError> {
        self.render(renderer, None, &settings.default_view)
    }
}
