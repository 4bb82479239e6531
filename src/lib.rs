//! Shared library for `graph-site`
//! Turns a directed graph into a static, cross-linked website: one page per
//! node, a landing page of starting nodes, and a force-directed visualization.

pub mod config;
pub mod core;
pub mod logger;

pub use core::get_version;
