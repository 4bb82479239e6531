//! Graph input files
//!
//! A graph file lists nodes in order, each with its out-neighbors, plus the
//! starting nodes for the landing page:
//!
//! ```toml
//! starting_nodes = [3, 67, 7]
//!
//! [[nodes]]
//! id = 3
//! neighbors = [7, 34]
//! ```
//!
//! Ids may be integers or strings; both are read as their canonical string, so
//! `3` and `"3"` name the same node.

use crate::core::error::{Result, SiteError};
use crate::core::models::GraphModel;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Compiled-in sample graph
const SAMPLE_GRAPH: &str = include_str!("../../assets/sample_graph.toml");

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: RawId,
    #[serde(default)]
    neighbors: Vec<RawId>,
}

#[derive(Debug, Deserialize)]
struct RawGraphFile {
    #[serde(default)]
    starting_nodes: Vec<RawId>,
    #[serde(default)]
    nodes: Vec<RawNode>,
}

/// A graph together with the nodes listed on the landing page
#[derive(Debug, Clone)]
pub struct SiteInput {
    /// The graph to publish
    pub graph: GraphModel<String>,
    /// Landing page entries, in display order
    pub starting_nodes: Vec<String>,
}

impl SiteInput {
    /// Create an input from an existing graph
    #[must_use]
    pub const fn new(graph: GraphModel<String>, starting_nodes: Vec<String>) -> Self {
        Self {
            graph,
            starting_nodes,
        }
    }

    /// Parse a graph file
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or an id is neither an integer nor a string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let raw: RawGraphFile = toml::from_str(toml_str)?;

        let graph: GraphModel<String> = raw
            .nodes
            .into_iter()
            .map(|node| {
                let neighbors: Vec<String> = node.neighbors.into_iter().map(String::from).collect();
                (String::from(node.id), neighbors)
            })
            .collect();
        let starting_nodes = raw.starting_nodes.into_iter().map(String::from).collect();

        Ok(Self::new(graph, starting_nodes))
    }

    /// Read and parse a graph file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        Self::from_toml(&content)
    }

    /// The built-in ten-node sample graph
    ///
    /// # Panics
    /// Panics if the compiled-in sample is invalid, which would be a build defect.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_toml(SAMPLE_GRAPH).expect("Failed to parse compiled-in sample graph")
    }

    /// Starting nodes that have no node page
    #[must_use]
    pub fn missing_starting_nodes(&self) -> Vec<&String> {
        self.starting_nodes
            .iter()
            .filter(|node| !self.graph.contains_node(node))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_ids() {
        let input = SiteInput::from_toml(
            r#"
starting_nodes = [1, "b"]

[[nodes]]
id = 1
neighbors = ["b", 1]

[[nodes]]
id = "b"
"#,
        )
        .unwrap();

        let order: Vec<&String> = input.graph.nodes().collect();
        assert_eq!(order, vec!["1", "b"]);
        assert_eq!(
            input.graph.neighbors(&"1".to_string()),
            Some(&["b".to_string(), "1".to_string()][..])
        );
        assert_eq!(input.graph.neighbors(&"b".to_string()), Some(&[][..]));
        assert_eq!(input.starting_nodes, vec!["1", "b"]);
    }

    #[test]
    fn test_integer_and_string_ids_are_the_same_node() {
        let input = SiteInput::from_toml(
            r#"
[[nodes]]
id = 3
neighbors = ["3"]
"#,
        )
        .unwrap();
        assert_eq!(input.graph.self_loops().len(), 1);
        assert!(input.graph.dangling_references().is_empty());
    }

    #[test]
    fn test_empty_file() {
        let input = SiteInput::from_toml("").unwrap();
        assert!(input.graph.is_empty());
        assert!(input.starting_nodes.is_empty());
    }

    #[test]
    fn test_invalid_id_type() {
        let result = SiteInput::from_toml("[[nodes]]\nid = 1.5\n");
        assert!(matches!(result, Err(SiteError::GraphFile(_))));
    }

    #[test]
    fn test_sample_graph() {
        let input = SiteInput::sample();

        assert_eq!(input.graph.node_count(), 10);
        assert_eq!(input.graph.edge_count(), 18);
        assert_eq!(input.starting_nodes, vec!["3", "67", "7"]);
        assert_eq!(input.graph.self_loops(), vec!["34"]);
        assert!(input.graph.dangling_references().is_empty());
        assert!(input.missing_starting_nodes().is_empty());
    }

    #[test]
    fn test_missing_starting_nodes() {
        let input = SiteInput::from_toml("starting_nodes = [99]\n[[nodes]]\nid = 5\n").unwrap();
        assert_eq!(input.missing_starting_nodes(), vec!["99"]);
    }
}
