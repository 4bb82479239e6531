//! Presentation settings: page theme, stylesheet and visualization layout

use crate::core::error::{Result, SiteError};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const PILL_CSS: &str = include_str!("../../../assets/styles/pill.css");
const PLAIN_CSS: &str = include_str!("../../../assets/styles/plain.css");

/// Page presentation variants
///
/// Both themes render the same descriptors; they differ only in how neighbor
/// links are laid out and in the built-in stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Neighbors as rounded buttons on a cream background
    #[default]
    Pill,
    /// Neighbors as a bulleted list
    Plain,
}

impl Theme {
    /// Built-in stylesheet for this theme
    #[must_use]
    pub const fn stylesheet(self) -> &'static str {
        match self {
            Self::Pill => PILL_CSS,
            Self::Plain => PLAIN_CSS,
        }
    }

    /// Whether neighbor links render as pill buttons
    #[must_use]
    pub const fn pill_links(self) -> bool {
        matches!(self, Self::Pill)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "pill" | "pills" => Ok(Self::Pill),
            "plain" | "list" => Ok(Self::Plain),
            _ => Err(format!("Unknown theme: {s}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pill => write!(f, "pill"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// Source of the `styles.css` asset
///
/// The contents are copied to the output unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
    /// The stylesheet shipped with a theme
    Builtin(Theme),
    /// A user-supplied stylesheet
    Custom(String),
}

impl Stylesheet {
    /// Read a custom stylesheet from disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    pub fn from_file(path: &Path) -> Result<Self> {
        fs::read_to_string(path)
            .map(Self::Custom)
            .map_err(|e| SiteError::io(path, e))
    }

    /// Stylesheet contents
    #[must_use]
    pub fn contents(&self) -> &str {
        match self {
            Self::Builtin(theme) => theme.stylesheet(),
            Self::Custom(css) => css,
        }
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::Builtin(Theme::default())
    }
}

/// Layout parameters handed to the D3 force simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizationSettings {
    /// SVG width in pixels
    pub width: u32,
    /// SVG height in pixels
    pub height: u32,
    /// Target link length
    pub link_distance: f64,
    /// Many-body force strength (negative repels)
    pub charge_strength: f64,
    /// Node circle radius
    pub node_radius: u32,
}

impl Default for VisualizationSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            link_distance: 120.0,
            charge_strength: -300.0,
            node_radius: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!("pill".parse::<Theme>(), Ok(Theme::Pill));
        assert_eq!("PLAIN".parse::<Theme>(), Ok(Theme::Plain));
        assert_eq!("list".parse::<Theme>(), Ok(Theme::Plain));
        assert!("fancy".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_display_round_trips() {
        for theme in [Theme::Pill, Theme::Plain] {
            assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
        }
    }

    #[test]
    fn test_builtin_stylesheets_differ() {
        assert!(Theme::Pill.stylesheet().contains(".neighbor-link"));
        assert_ne!(Theme::Pill.stylesheet(), Theme::Plain.stylesheet());
    }

    #[test]
    fn test_custom_stylesheet_is_verbatim() {
        let sheet = Stylesheet::Custom("body { color: red; }".to_string());
        assert_eq!(sheet.contents(), "body { color: red; }");
    }
}
