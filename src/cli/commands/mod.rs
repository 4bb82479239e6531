//! CLI command handlers for `graphsite`.
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod config;
pub mod generate;
pub mod payload;

use graph_site::config::Config;
use graph_site::core::SiteInput;

/// Load the configured graph, exiting with a message if it cannot be read
pub(crate) fn load_input(config: &Config) -> SiteInput {
    match config.site_input() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("✗ Failed to load graph: {e}");
            std::process::exit(1);
        }
    }
}
