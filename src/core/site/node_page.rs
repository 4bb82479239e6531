//! Per-node page descriptors

use crate::core::models::NodeKey;
use crate::core::site::{PageDescriptor, PageLink};

/// Builds the page for a single node
///
/// The page shows the node's id and one link per out-neighbor, in neighbor
/// order. Self-references, repeats and ids that are not graph keys are
/// rendered like any other link.
pub struct NodePageBuilder;

impl NodePageBuilder {
    /// Build the descriptor for `node` with the given out-neighbors
    #[must_use]
    pub fn build<N: NodeKey>(node: &N, neighbors: &[N]) -> PageDescriptor {
        let heading = node.canonical();
        PageDescriptor {
            title: format!("Node {heading}"),
            heading,
            links: neighbors.iter().map(PageLink::to_node).collect(),
        }
    }
}
