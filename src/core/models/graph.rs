//! Directed graph over arbitrary node identifiers

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// A node identifier usable as a graph key, page name and visualization id.
///
/// The canonical string form is the `Display` output. It is used for file
/// names, link targets and payload ids, so two distinct keys of one graph must
/// never display the same way.
pub trait NodeKey: Clone + Eq + Hash + fmt::Display {
    /// Canonical string form of this identifier
    fn canonical(&self) -> String {
        self.to_string()
    }
}

impl<T: Clone + Eq + Hash + fmt::Display> NodeKey for T {}

/// Represents a directed graph as an ordered adjacency mapping
///
/// The graph keeps two structures:
/// - `nodes`: every key in insertion order (this is the iteration order)
/// - `adjacency`: maps each key to its ordered out-neighbors
///
/// Cycles, self-loops, duplicate neighbors and neighbors that are not keys are
/// all ordinary data; nothing is rejected or de-duplicated.
#[derive(Debug, Clone)]
pub struct GraphModel<N> {
    nodes: Vec<N>,
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: NodeKey> GraphModel<N> {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Add a node with its out-neighbors
    ///
    /// Re-adding an existing key replaces its neighbor list but keeps the
    /// key's original position.
    ///
    /// # Arguments
    /// * `node` - The node key
    /// * `neighbors` - Ordered out-neighbors (duplicates and self-references allowed)
    pub fn add_node(&mut self, node: N, neighbors: Vec<N>) {
        if !self.adjacency.contains_key(&node) {
            self.nodes.push(node.clone());
        }
        self.adjacency.insert(node, neighbors);
    }

    /// Node keys in graph order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    /// `(node, neighbors)` pairs in graph order
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.nodes.iter().map(|node| (node, self.neighbors_or_empty(node)))
    }

    /// Get the out-neighbors of a node
    ///
    /// # Returns
    /// The ordered neighbor list, or None if the node is not a key
    #[must_use]
    pub fn neighbors(&self, node: &N) -> Option<&[N]> {
        self.adjacency.get(node).map(Vec::as_slice)
    }

    fn neighbors_or_empty(&self, node: &N) -> &[N] {
        self.neighbors(node).unwrap_or_default()
    }

    /// Check if a node is a key of the graph
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of keys
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of `(node, neighbor)` pairs, counting duplicates and self-loops
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns `true` if the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes that list themselves as a neighbor, in graph order
    #[must_use]
    pub fn self_loops(&self) -> Vec<&N> {
        self.iter()
            .filter(|(node, neighbors)| neighbors.contains(node))
            .map(|(node, _)| node)
            .collect()
    }

    /// Neighbor identifiers that are not keys of the graph
    ///
    /// Reported once each, in the order they are first referenced.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<&N> {
        let mut seen = HashSet::new();
        self.iter()
            .flat_map(|(_, neighbors)| neighbors)
            .filter(|neighbor| !self.contains_node(neighbor) && seen.insert(*neighbor))
            .collect()
    }

    /// First pair of distinct keys sharing a canonical string, if any
    #[must_use]
    pub fn canonical_collision(&self) -> Option<String> {
        let mut seen = HashSet::new();
        self.nodes
            .iter()
            .map(NodeKey::canonical)
            .find(|canonical| !seen.insert(canonical.clone()))
    }
}

impl<N: NodeKey> Default for GraphModel<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> FromIterator<(N, Vec<N>)> for GraphModel<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (node, neighbors) in iter {
            graph.add_node(node, neighbors);
        }
        graph
    }
}

impl<N: NodeKey> fmt::Display for GraphModel<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Directed graph ({} nodes, {} edges):",
            self.node_count(),
            self.edge_count()
        )?;
        writeln!(f)?;

        for (node, neighbors) in self.iter() {
            if neighbors.is_empty() {
                writeln!(f, "  {node} → (no neighbors)")?;
            } else {
                let listed: Vec<String> = neighbors.iter().map(NodeKey::canonical).collect();
                writeln!(f, "  {node} → {}", listed.join(", "))?;
            }
        }

        Ok(())
    }
}
