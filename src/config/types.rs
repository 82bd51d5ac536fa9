//! Configuration type definitions.

use crate::draw::{color, Color, FontDescriptor};
use serde::{Deserialize, Serialize};

/// Surface geometry settings.
///
/// The logical size is what the hosting form works in; the surface itself is
/// allocated at `pixel_scale` times that size and displayed scaled down for
/// sharpness on high-DPI screens.
#[derive(Debug, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Logical width in surface units (valid range: 16 - 4096)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Logical height in surface units (valid range: 16 - 4096)
    #[serde(default = "default_height")]
    pub height: u32,

    /// Device pixel multiplier (valid range: 1 - 4; 2 = render at 2x density)
    #[serde(default = "default_pixel_scale")]
    pub pixel_scale: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            pixel_scale: default_pixel_scale(),
        }
    }
}

/// Stroke style defaults applied when the engine is created.
///
/// The hosting form can change both at runtime through the style picker.
#[derive(Debug, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Default stroke color as an RGB hex string (e.g., "#e63946")
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Default line width in surface units (valid range: 1 - 20)
    #[serde(default = "default_line_width")]
    pub default_line_width: u32,
}

impl StyleConfig {
    /// Parses the configured default color, falling back to clinical red
    /// with a logged warning if the hex string is malformed.
    pub fn color(&self) -> Color {
        Color::from_hex(&self.default_color).unwrap_or_else(|err| {
            log::warn!("{err}, falling back to {}", color::RED.to_hex());
            color::RED
        })
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_line_width: default_line_width(),
        }
    }
}

/// Arrow head appearance settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArrowConfig {
    /// Head wing length in surface units (valid range: 2.0 - 50.0)
    #[serde(default = "default_head_length")]
    pub head_length: f64,

    /// Angle between each wing and the shaft in degrees (valid range: 10.0 - 60.0)
    /// Smaller angles create narrower arrowheads, larger angles create wider ones
    #[serde(default = "default_head_angle")]
    pub head_angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            head_length: default_head_length(),
            head_angle_degrees: default_head_angle(),
        }
    }
}

/// Text tool settings.
///
/// The text tool uses one fixed font and size for the whole session.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextConfig {
    /// Font family name (e.g., "Sans", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", or numeric 100-900)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Font size in points (valid range: 8.0 - 72.0)
    #[serde(default = "default_font_size")]
    pub font_size: f64,
}

impl TextConfig {
    /// Builds the font descriptor handed to the renderer.
    pub fn font_descriptor(&self) -> FontDescriptor {
        FontDescriptor::new(
            self.font_family.clone(),
            self.font_weight.clone(),
            self.font_style.clone(),
        )
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            font_size: default_font_size(),
        }
    }
}

/// Undo/redo history settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum retained snapshots; the oldest folds into the undo floor when
    /// exceeded (0 = unbounded)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

fn default_pixel_scale() -> u32 {
    2
}

fn default_color() -> String {
    color::RED.to_hex()
}

fn default_line_width() -> u32 {
    3
}

fn default_head_length() -> f64 {
    10.0
}

fn default_head_angle() -> f64 {
    30.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_font_size() -> f64 {
    16.0
}

fn default_max_depth() -> usize {
    50
}
