//! Configuration file support for eyemark.
//!
//! This module handles loading and validating settings from the configuration
//! file located at `~/.config/eyemark/config.toml`. Settings cover surface
//! geometry, stroke style defaults, arrow head appearance, the text tool's
//! font, and the history depth cap.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

pub use types::{ArrowConfig, HistoryConfig, StyleConfig, SurfaceConfig, TextConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::Color;

/// Main configuration structure containing all engine settings.
///
/// This is the root type deserialized from the TOML file. Every field has a
/// sensible default, so a partial (or absent) config file is fine.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 640
/// height = 480
/// pixel_scale = 2
///
/// [style]
/// default_color = "#e63946"
/// default_line_width = 3
///
/// [arrow]
/// head_length = 10.0
/// head_angle_degrees = 30.0
///
/// [text]
/// font_family = "Sans"
/// font_size = 16.0
///
/// [history]
/// max_depth = 50
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Surface geometry (logical size and pixel density)
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Stroke style defaults (color, line width)
    #[serde(default)]
    pub style: StyleConfig,

    /// Arrow head appearance
    #[serde(default)]
    pub arrow: ArrowConfig,

    /// Text tool font settings
    #[serde(default)]
    pub text: TextConfig,

    /// Undo/redo history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// User-provided values that would cause rendering issues are clamped to
    /// the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `surface.width` / `surface.height`: 16 - 4096
    /// - `surface.pixel_scale`: 1 - 4
    /// - `style.default_line_width`: 1 - 20
    /// - `arrow.head_length`: 2.0 - 50.0
    /// - `arrow.head_angle_degrees`: 10.0 - 60.0
    /// - `text.font_size`: 8.0 - 72.0
    fn validate_and_clamp(&mut self) {
        if !(16..=4096).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 16-4096 range",
                self.surface.width
            );
            self.surface.width = self.surface.width.clamp(16, 4096);
        }

        if !(16..=4096).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 16-4096 range",
                self.surface.height
            );
            self.surface.height = self.surface.height.clamp(16, 4096);
        }

        if !(1..=4).contains(&self.surface.pixel_scale) {
            log::warn!(
                "Invalid pixel_scale {}, clamping to 1-4 range",
                self.surface.pixel_scale
            );
            self.surface.pixel_scale = self.surface.pixel_scale.clamp(1, 4);
        }

        if !(1..=20).contains(&self.style.default_line_width) {
            log::warn!(
                "Invalid default_line_width {}, clamping to 1-20 range",
                self.style.default_line_width
            );
            self.style.default_line_width = self.style.default_line_width.clamp(1, 20);
        }

        if Color::from_hex(&self.style.default_color).is_err() {
            log::warn!(
                "Invalid default_color '{}', falling back to '{}'",
                self.style.default_color,
                crate::draw::color::RED.to_hex()
            );
            self.style.default_color = crate::draw::color::RED.to_hex();
        }

        if !(2.0..=50.0).contains(&self.arrow.head_length) {
            log::warn!(
                "Invalid arrow head_length {:.1}, clamping to 2.0-50.0 range",
                self.arrow.head_length
            );
            self.arrow.head_length = self.arrow.head_length.clamp(2.0, 50.0);
        }

        if !(10.0..=60.0).contains(&self.arrow.head_angle_degrees) {
            log::warn!(
                "Invalid arrow head angle {:.1}°, clamping to 10.0-60.0° range",
                self.arrow.head_angle_degrees
            );
            self.arrow.head_angle_degrees = self.arrow.head_angle_degrees.clamp(10.0, 60.0);
        }

        if !(8.0..=72.0).contains(&self.text.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 8.0-72.0 range",
                self.text.font_size
            );
            self.text.font_size = self.text.font_size.clamp(8.0, 72.0);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }

        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/eyemark/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("eyemark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// no file exists there.
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

    /// Loads configuration from an explicit path (CLI `--config`).
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}
