//! Configuration module for `graph-site`

use crate::core::error::{Result, SiteError};
use crate::core::input::SiteInput;
use crate::core::site::{SiteOptions, Stylesheet, Theme, VisualizationSettings};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the config directory in path-like values
const DIR_VARIABLE: &str = "$GRAPH_SITE";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory the site is generated into (replaced on every run)
    #[serde(default)]
    pub output_dir: String,
    /// Graph file to publish; empty means the built-in sample graph
    #[serde(default)]
    pub graph_file: String,
}

/// Site presentation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Landing page title
    #[serde(default)]
    pub title: String,
    /// Page theme (pill, plain)
    #[serde(default)]
    pub theme: String,
    /// Custom stylesheet path; empty means the theme's built-in stylesheet
    #[serde(default)]
    pub stylesheet: String,
}

/// Force layout configuration for the visualization page
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
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

impl Default for VisualizationConfig {
    fn default() -> Self {
        VisualizationSettings::default().into()
    }
}

impl From<VisualizationSettings> for VisualizationConfig {
    fn from(settings: VisualizationSettings) -> Self {
        Self {
            width: settings.width,
            height: settings.height,
            link_distance: settings.link_distance,
            charge_strength: settings.charge_strength,
            node_radius: settings.node_radius,
        }
    }
}

impl From<VisualizationConfig> for VisualizationSettings {
    fn from(config: VisualizationConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            link_distance: config.link_distance,
            charge_strength: config.charge_strength,
            node_radius: config.node_radius,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Site settings
    #[serde(default)]
    pub site: SiteConfig,
    /// Visualization settings
    #[serde(default)]
    pub visualization: VisualizationConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override site output directory
    pub output_dir: Option<String>,
    /// Override graph file
    pub graph_file: Option<String>,
    /// Override page theme
    pub theme: Option<String>,
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> std::result::Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("Invalid numeric value for '{key}': '{value}'"))
}

/// Layout forces are written into the page script, so `inf` and `NaN` are refused
fn check_finite(key: &str, value: f64) -> std::result::Result<f64, String> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("Value for '{key}' must be a finite number, got '{value}'"))
    }
}

impl Config {
    /// Get the `$GRAPH_SITE` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/graphsite`
    /// - macOS: `~/Library/Application Support/graphsite`
    /// - Windows: `%APPDATA%\graphsite`
    #[must_use]
    pub fn get_graphsite_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("graphsite")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading so that fields added in newer versions get their
    /// default values. Only string fields that are empty here and non-empty in
    /// `defaults` are filled; visualization numbers already default through serde.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let fields = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.output_dir, &defaults.paths.output_dir),
            (&mut self.paths.graph_file, &defaults.paths.graph_file),
            (&mut self.site.title, &defaults.site.title),
            (&mut self.site.theme, &defaults.site.theme),
            (&mut self.site.stylesheet, &defaults.site.stylesheet),
        ];

        let mut changed = false;
        for (value, default) in fields {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Command-line arguments win over the configuration file for this run
    /// only; the file is not modified. `None` values leave the config alone.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(output_dir) = &overrides.output_dir {
            self.paths.output_dir.clone_from(output_dir);
        }
        if let Some(graph_file) = &overrides.graph_file {
            self.paths.graph_file.clone_from(graph_file);
        }
        if let Some(theme) = &overrides.theme {
            self.site.theme.clone_from(theme);
        }
    }

    /// Get the user config file path
    ///
    /// Returns `config.toml` for release builds and `dconfig.toml` for debug
    /// builds, inside [`get_graphsite_dir`](Self::get_graphsite_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_graphsite_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GRAPH_SITE` to the config directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_graphsite_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Path-like values have `$GRAPH_SITE` expanded. Missing fields use their
    /// serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.output_dir = Self::expand_variables(&config.paths.output_dir);
        config.paths.graph_file = Self::expand_variables(&config.paths.graph_file);
        config.site.stylesheet = Self::expand_variables(&config.site.stylesheet);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary, so this indicates a build defect.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - Config file exists: load it, merge missing fields from defaults, save if anything was added
    /// - First run: create the config directory and save the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file cannot be written
    pub fn save(&self) -> std::result::Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to an explicit path
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save_to(&self, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `output_dir`, `graph_file`,
    /// `title`, `theme`, `stylesheet`, `width`, `height`, `link_distance`,
    /// `charge_strength`, `node_radius`. Dashed spellings are accepted too.
    ///
    /// # Returns
    /// The value as a string, or `None` if the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let viz = &self.visualization;
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "output_dir" | "output-dir" | "out_dir" | "out-dir" => {
                Some(self.paths.output_dir.clone())
            }
            "graph_file" | "graph-file" => Some(self.paths.graph_file.clone()),
            "title" => Some(self.site.title.clone()),
            "theme" => Some(self.site.theme.clone()),
            "stylesheet" => Some(self.site.stylesheet.clone()),
            "width" => Some(viz.width.to_string()),
            "height" => Some(viz.height.to_string()),
            "link_distance" | "link-distance" => Some(viz.link_distance.to_string()),
            "charge_strength" | "charge-strength" => Some(viz.charge_strength.to_string()),
            "node_radius" | "node-radius" => Some(viz.node_radius.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Values are validated and converted: `verbose` takes `true`/`false`,
    /// `theme` a known theme name, visualization keys numbers. Call
    /// [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let viz = &mut self.visualization;
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "output_dir" | "output-dir" | "out_dir" | "out-dir" => {
                self.paths.output_dir = value.to_string();
            }
            "graph_file" | "graph-file" => self.paths.graph_file = value.to_string(),
            "title" => self.site.title = value.to_string(),
            "theme" => {
                let theme: Theme = value.parse()?;
                self.site.theme = theme.to_string();
            }
            "stylesheet" => self.site.stylesheet = value.to_string(),
            "width" => viz.width = parse_number(key, value)?,
            "height" => viz.height = parse_number(key, value)?,
            "link_distance" | "link-distance" => {
                viz.link_distance = check_finite(key, parse_number(key, value)?)?;
            }
            "charge_strength" | "charge-strength" => {
                viz.charge_strength = check_finite(key, parse_number(key, value)?)?;
            }
            "node_radius" | "node-radius" => viz.node_radius = parse_number(key, value)?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> std::result::Result<(), String> {
        let default_value = defaults
            .get(key)
            .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
        self.set(key, &default_value)
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> std::result::Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Output directory for generated sites
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.paths.output_dir)
    }

    /// Presentation options for the site assembler
    ///
    /// # Errors
    /// Returns an error if the theme is unknown, a layout force is not a finite
    /// number, or the custom stylesheet cannot be read
    pub fn site_options(&self) -> Result<SiteOptions> {
        let viz = &self.visualization;
        check_finite("link_distance", viz.link_distance).map_err(SiteError::Config)?;
        check_finite("charge_strength", viz.charge_strength).map_err(SiteError::Config)?;

        let theme: Theme = self.site.theme.parse().map_err(SiteError::Config)?;
        let stylesheet = if self.site.stylesheet.is_empty() {
            Stylesheet::Builtin(theme)
        } else {
            Stylesheet::from_file(Path::new(&self.site.stylesheet))?
        };
        let mut options = SiteOptions::with_theme(theme);
        if !self.site.title.is_empty() {
            options.title.clone_from(&self.site.title);
        }
        options.stylesheet = stylesheet;
        options.visualization = self.visualization.into();
        Ok(options)
    }

    /// The configured graph, or the built-in sample when no graph file is set
    ///
    /// # Errors
    /// Returns an error if the graph file cannot be read or parsed
    pub fn site_input(&self) -> Result<SiteInput> {
        if self.paths.graph_file.is_empty() {
            Ok(SiteInput::sample())
        } else {
            SiteInput::from_file(Path::new(&self.paths.graph_file))
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  output_dir = \"{}\"", self.paths.output_dir)?;
        writeln!(f, "  graph_file = \"{}\"", self.paths.graph_file)?;

        writeln!(f, "\n[site]")?;
        writeln!(f, "  title = \"{}\"", self.site.title)?;
        writeln!(f, "  theme = \"{}\"", self.site.theme)?;
        writeln!(f, "  stylesheet = \"{}\"", self.site.stylesheet)?;

        let viz = &self.visualization;
        writeln!(f, "\n[visualization]")?;
        writeln!(f, "  width = {}", viz.width)?;
        writeln!(f, "  height = {}", viz.height)?;
        writeln!(f, "  link_distance = {}", viz.link_distance)?;
        writeln!(f, "  charge_strength = {}", viz.charge_strength)?;
        writeln!(f, "  node_radius = {}", viz.node_radius)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visualization_defaults_fill_missing_fields() {
        let config = Config::from_toml("[logging]\n[visualization]\nwidth = 1200\n").unwrap();
        assert_eq!(config.visualization.width, 1200);
        assert_eq!(config.visualization.height, 600);
        assert!((config.visualization.charge_strength + 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_site_options_from_config() {
        let mut config = Config::from_defaults();
        config.site.theme = "plain".to_string();
        config.site.title = "Routes".to_string();
        config.visualization.node_radius = 12;

        let options = config.site_options().unwrap();
        assert_eq!(options.theme, Theme::Plain);
        assert_eq!(options.stylesheet, Stylesheet::Builtin(Theme::Plain));
        assert_eq!(options.title, "Routes");
        assert_eq!(options.visualization.node_radius, 12);
    }

    #[test]
    fn test_site_options_rejects_unknown_theme() {
        let mut config = Config::from_defaults();
        config.site.theme = "neon".to_string();
        assert!(matches!(config.site_options(), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_non_finite_forces_rejected() {
        let mut config = Config::from_defaults();
        assert!(config.set("link_distance", "inf").is_err());
        assert!(config.set("charge_strength", "NaN").is_err());
        assert!((config.visualization.link_distance - 120.0).abs() < f64::EPSILON);

        let config = Config::from_toml("[logging]\n[visualization]\nlink_distance = inf\n").unwrap();
        assert!(matches!(config.site_options(), Err(SiteError::Config(_))));

        let mut config = Config::from_defaults();
        config.visualization.charge_strength = f64::NAN;
        assert!(matches!(config.site_options(), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_site_input_defaults_to_sample() {
        let config = Config::from_defaults();
        let input = config.site_input().unwrap();
        assert_eq!(input.graph.node_count(), 10);
    }
}
