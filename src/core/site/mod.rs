//! Static site generation for directed graphs
//!
//! Pure builders turn a [`GraphModel`](crate::core::models::GraphModel) into page
//! descriptors and a visualization payload; the [`SiteAssembler`] renders them
//! through the page templates and hands the documents to a [`SiteOutput`].

pub mod assembler;
pub mod index_page;
pub mod node_page;
pub mod output;
pub mod render;
pub mod theme;
pub mod visualization;

use crate::core::models::NodeKey;

pub use assembler::{GenerationReport, SiteAssembler, SiteOptions};
pub use index_page::IndexPageBuilder;
pub use node_page::NodePageBuilder;
pub use output::{DirectoryOutput, MemoryOutput, SiteOutput};
pub use render::SiteRenderer;
pub use theme::{Stylesheet, Theme, VisualizationSettings};
pub use visualization::{VisualizationDataBuilder, VisualizationPayload};

/// File name of the shared stylesheet
pub const STYLESHEET_FILE: &str = "styles.css";
/// File name of the landing page
pub const INDEX_FILE: &str = "index.html";
/// File name of the visualization page
pub const VISUALIZATION_FILE: &str = "viz.html";

/// File name of the page for the node with the given canonical id
#[must_use]
pub fn node_page_file(canonical_id: &str) -> String {
    format!("node_{canonical_id}.html")
}

/// One link on a page: the node it points at and the text shown for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Canonical id of the target node
    pub target: String,
    /// Link label
    pub text: String,
}

impl PageLink {
    /// Link to a node, labelled with its canonical id
    #[must_use]
    pub fn to_node<N: NodeKey>(node: &N) -> Self {
        let canonical = node.canonical();
        Self {
            text: canonical.clone(),
            target: canonical,
        }
    }

    /// Relative href of the target node's page
    #[must_use]
    pub fn href(&self) -> String {
        node_page_file(&self.target)
    }
}

/// Everything needed to render one page, independent of markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDescriptor {
    /// Document title
    pub title: String,
    /// Main heading value
    pub heading: String,
    /// Links in display order
    pub links: Vec<PageLink>,
}

impl PageDescriptor {
    /// Link targets in display order
    #[must_use]
    pub fn targets(&self) -> Vec<&str> {
        self.links.iter().map(|link| link.target.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_page_file() {
        assert_eq!(node_page_file("34"), "node_34.html");
        assert_eq!(node_page_file("alpha"), "node_alpha.html");
    }

    #[test]
    fn test_link_to_node_uses_canonical_form() {
        let link = PageLink::to_node(&7_u32);
        assert_eq!(link.target, "7");
        assert_eq!(link.text, "7");
        assert_eq!(link.href(), "node_7.html");
    }
}
