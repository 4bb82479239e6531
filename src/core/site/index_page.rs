//! Landing page descriptor

use crate::core::models::NodeKey;
use crate::core::site::{PageDescriptor, PageLink};

/// Default landing page title
pub const DEFAULT_TITLE: &str = "Graph Explorer";

/// Builds the landing page listing the starting nodes
///
/// Works from the starting-node list alone: ids are linked whether or not the
/// graph has a page for them.
#[derive(Debug, Clone)]
pub struct IndexPageBuilder {
    title: String,
}

impl IndexPageBuilder {
    /// Create a builder using `title` for the page title and heading
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Build the descriptor, one link per starting node in input order
    #[must_use]
    pub fn build<N: NodeKey>(&self, starting_nodes: &[N]) -> PageDescriptor {
        PageDescriptor {
            title: self.title.clone(),
            heading: self.title.clone(),
            links: starting_nodes.iter().map(PageLink::to_node).collect(),
        }
    }
}

impl Default for IndexPageBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
