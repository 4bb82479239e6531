//! Data models for `graph-site`

pub mod graph;

pub use graph::{GraphModel, NodeKey};
