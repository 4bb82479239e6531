//! Core graph-to-site transformation

pub mod error;
pub mod input;
pub mod models;
pub mod site;

pub use error::{Result, SiteError};
pub use input::SiteInput;

/// Returns the current version of the `graph-site` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
