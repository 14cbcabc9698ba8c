//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::DEFAULT_LINE_WIDTH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Brush defaults applied when the editor starts.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BrushConfig {
    /// Default brush color - either a named color (black, red, green, blue, yellow,
    /// orange, pink, white) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Stroke thickness in logical units (valid range: 1.0 - 64.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            line_width: default_line_width(),
        }
    }
}

/// Document feature flags.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FeatureConfig {
    /// Allow editing the canvas surface. When off, brush drags are ignored.
    #[serde(default = "default_enable_surface")]
    pub enable_surface: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            enable_surface: default_enable_surface(),
        }
    }
}

/// Initial pan/zoom of the canvas.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ViewportConfig {
    /// Zoom factor (valid range: 0.1 - 10.0)
    #[serde(default = "default_zoom")]
    pub zoom: f64,

    /// Screen X of the canvas container's top-left corner
    #[serde(default)]
    pub origin_x: f64,

    /// Screen Y of the canvas container's top-left corner
    #[serde(default)]
    pub origin_y: f64,

    /// Logical X shown at the container's top-left corner
    #[serde(default)]
    pub scroll_x: f64,

    /// Logical Y shown at the container's top-left corner
    #[serde(default)]
    pub scroll_y: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
            origin_x: 0.0,
            origin_y: 0.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

fn default_enable_surface() -> bool {
    true
}

fn default_zoom() -> f64 {
    1.0
}
