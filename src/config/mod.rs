//! Configuration file support for surface-brush.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/surface-brush/config.toml`. Settings include brush defaults,
//! document feature flags, and the initial viewport.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{BrushConfig, FeatureConfig, ViewportConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [brush]
/// default_color = "black"
/// line_width = 4.0
///
/// [features]
/// enable_surface = true
///
/// [viewport]
/// zoom = 1.0
/// origin_x = 0.0
/// origin_y = 0.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Brush defaults (color, line width)
    #[serde(default)]
    pub brush: BrushConfig,

    /// Document feature flags
    #[serde(default)]
    pub features: FeatureConfig,

    /// Initial pan/zoom
    #[serde(default)]
    pub viewport: ViewportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `brush.line_width`: 1.0 - 64.0
    /// - `viewport.zoom`: 0.1 - 10.0
    /// - viewport offsets must be finite (reset to 0.0 otherwise)
    pub fn validate_and_clamp(&mut self) {
        // Line width: 1.0 - 64.0
        if !(1.0..=64.0).contains(&self.brush.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 1.0-64.0 range",
                self.brush.line_width
            );
            self.brush.line_width = if self.brush.line_width.is_nan() {
                crate::input::DEFAULT_LINE_WIDTH
            } else {
                self.brush.line_width.clamp(1.0, 64.0)
            };
        }

        // Zoom: 0.1 - 10.0
        if !(0.1..=10.0).contains(&self.viewport.zoom) {
            log::warn!(
                "Invalid zoom {:.2}, clamping to 0.1-10.0 range",
                self.viewport.zoom
            );
            self.viewport.zoom = if self.viewport.zoom.is_nan() {
                1.0
            } else {
                self.viewport.zoom.clamp(0.1, 10.0)
            };
        }

        let offsets = [
            ("origin_x", &mut self.viewport.origin_x),
            ("origin_y", &mut self.viewport.origin_y),
            ("scroll_x", &mut self.viewport.scroll_x),
            ("scroll_y", &mut self.viewport.scroll_y),
        ];
        for (name, value) in offsets {
            if !value.is_finite() {
                log::warn!("Invalid viewport {name} {value}, resetting to 0.0");
                *value = 0.0;
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/surface-brush/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("surface-brush");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML syntax.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, created or written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Serializes the config to TOML and writes it to `config_path`, creating
    /// parent directories as needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.brush.line_width, 4.0);
        assert_eq!(config.brush.default_color, ColorSpec::Name("black".into()));
        assert!(config.features.enable_surface);
        assert_eq!(config.viewport.zoom, 1.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [brush]
            default_color = [255, 0, 0]

            [viewport]
            origin_x = 40.0
            "#,
        )
        .unwrap();
        assert_eq!(config.brush.default_color, ColorSpec::Rgb([255, 0, 0]));
        assert_eq!(config.brush.line_width, 4.0);
        assert_eq!(config.viewport.origin_x, 40.0);
        assert_eq!(config.viewport.zoom, 1.0);
    }

    #[test]
    fn validate_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.brush.line_width = 200.0;
        config.viewport.zoom = 0.0;
        config.viewport.scroll_y = f64::INFINITY;

        config.validate_and_clamp();

        assert_eq!(config.brush.line_width, 64.0);
        assert_eq!(config.viewport.zoom, 0.1);
        assert_eq!(config.viewport.scroll_y, 0.0);
    }

    #[test]
    fn validate_replaces_nan_with_defaults() {
        let mut config = Config::default();
        config.brush.line_width = f64::NAN;
        config.viewport.zoom = f64::NAN;

        config.validate_and_clamp();

        assert_eq!(config.brush.line_width, 4.0);
        assert_eq!(config.viewport.zoom, 1.0);
    }

    #[test]
    fn save_then_load_from_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.brush.line_width = 12.0;
        config.features.enable_surface = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.brush.line_width, 12.0);
        assert!(!loaded.features.enable_surface);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[brush\nline_width = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("brush").is_some());
        assert!(properties.get("features").is_some());
        assert!(properties.get("viewport").is_some());
    }
}
