//! HTML rendering of page descriptors
//!
//! Markup lives in the askama templates under `templates/`; this module only
//! binds descriptors and settings to them.

use crate::core::error::Result;
use crate::core::site::theme::{Theme, VisualizationSettings};
use crate::core::site::visualization::VisualizationPayload;
use crate::core::site::PageDescriptor;
use askama::Template;

/// Default visualization page title
pub const VISUALIZATION_TITLE: &str = "Graph Visualization";

#[derive(Template)]
#[template(path = "node.html")]
struct NodePageTemplate<'a> {
    title: &'a str,
    page: &'a PageDescriptor,
    pill_links: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexPageTemplate<'a> {
    title: &'a str,
    page: &'a PageDescriptor,
}

#[derive(Template)]
#[template(path = "viz.html")]
struct VisualizationTemplate<'a> {
    title: &'a str,
    graph_json: &'a str,
    settings: &'a VisualizationSettings,
}

/// Renders descriptors into complete HTML documents
#[derive(Debug, Clone, Default)]
pub struct SiteRenderer {
    theme: Theme,
    settings: VisualizationSettings,
}

impl SiteRenderer {
    /// Create a renderer for the given theme and visualization layout
    #[must_use]
    pub const fn new(theme: Theme, settings: VisualizationSettings) -> Self {
        Self { theme, settings }
    }

    /// Render a node page
    ///
    /// # Errors
    /// Returns an error if the template fails to render
    pub fn render_node_page(&self, page: &PageDescriptor) -> Result<String> {
        let template = NodePageTemplate {
            title: &page.title,
            page,
            pill_links: self.theme.pill_links(),
        };
        Ok(template.render()?)
    }

    /// Render the landing page
    ///
    /// # Errors
    /// Returns an error if the template fails to render
    pub fn render_index_page(&self, page: &PageDescriptor) -> Result<String> {
        let template = IndexPageTemplate {
            title: &page.title,
            page,
        };
        Ok(template.render()?)
    }

    /// Render the visualization page with the payload embedded inline
    ///
    /// # Errors
    /// Returns an error if the payload cannot be serialized or the template fails
    pub fn render_visualization(&self, payload: &VisualizationPayload) -> Result<String> {
        let graph_json = payload.to_script_json()?;
        let template = VisualizationTemplate {
            title: VISUALIZATION_TITLE,
            graph_json: &graph_json,
            settings: &self.settings,
        };
        Ok(template.render()?)
    }
}
