//! Node/link payload for the force-directed visualization
//!
//! The payload is the JSON consumed by the D3 force layout on the
//! visualization page: `{"nodes": [{"id"}], "links": [{"source", "target"}]}`.
//! Link endpoints are resolved against node ids by the renderer, so a link to
//! an id without a node record is passed through untouched.

use crate::core::error::Result;
use crate::core::models::{GraphModel, NodeKey};
use serde::{Deserialize, Serialize};

/// A node record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizNode {
    /// Canonical id of the graph key
    pub id: String,
}

/// A directed link record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VizLink {
    /// Canonical id of the node the edge leaves
    pub source: String,
    /// Canonical id of the neighbor
    pub target: String,
}

impl VizLink {
    /// Returns `true` when the link starts and ends at the same node
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Flat node and link lists for the visualization page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizationPayload {
    /// One record per graph key, in graph order
    pub nodes: Vec<VizNode>,
    /// One record per `(key, neighbor)` pair, in graph then neighbor order
    pub links: Vec<VizLink>,
}

impl VisualizationPayload {
    /// Compact JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON for humans
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Compact JSON safe to embed in an inline `<script>` element
    ///
    /// `<`, `>` and `&` become `\u003c`, `\u003e` and `\u0026`, so the output
    /// never contains `</`, `<!--` or `<script` however the ids are spelled.
    /// The characters only occur inside JSON strings, where the escapes
    /// decode back to the same text.
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_script_json(&self) -> Result<String> {
        let json = self.to_json()?;
        let mut escaped = String::with_capacity(json.len());
        for c in json.chars() {
            match c {
                '<' => escaped.push_str("\\u003c"),
                '>' => escaped.push_str("\\u003e"),
                '&' => escaped.push_str("\\u0026"),
                _ => escaped.push(c),
            }
        }
        Ok(escaped)
    }
}

/// Builds the visualization payload from a graph
pub struct VisualizationDataBuilder;

impl VisualizationDataBuilder {
    /// Build the payload for the whole graph
    ///
    /// Self-loops and duplicate neighbors each produce their own link record.
    #[must_use]
    pub fn build<N: NodeKey>(graph: &GraphModel<N>) -> VisualizationPayload {
        let nodes = graph
            .nodes()
            .map(|node| VizNode {
                id: node.canonical(),
            })
            .collect();

        let mut links = Vec::with_capacity(graph.edge_count());
        for (node, neighbors) in graph.iter() {
            let source = node.canonical();
            for neighbor in neighbors {
                links.push(VizLink {
                    source: source.clone(),
                    target: neighbor.canonical(),
                });
            }
        }

        VisualizationPayload { nodes, links }
    }
}
