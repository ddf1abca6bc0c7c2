//! Configuration file support for inkframe.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/inkframe/config.toml`. Settings include the freehand surface
//! size, ink appearance, and annotation styling.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, PenConfig, ShapesConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 900
/// height = 900
///
/// [pen]
/// color = "black"
/// thickness = 1.0
///
/// [shapes]
/// fill_color = "red"
/// fill_opacity = 0.5
/// outline_color = "red"
/// outline_width = 2.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Freehand drawing surface size
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Ink appearance
    #[serde(default)]
    pub pen: PenConfig,

    /// Annotation box appearance
    #[serde(default)]
    pub shapes: ShapesConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    /// Non-finite floats are reset to their defaults first.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `pen.thickness`: 0.5 - 50.0
    /// - `shapes.fill_opacity`: 0.0 - 1.0
    /// - `shapes.outline_width`: 0.5 - 20.0
    fn validate_and_clamp(&mut self) {
        replace_non_finite(
            "pen thickness",
            &mut self.pen.thickness,
            PenConfig::default().thickness,
        );
        let shape_defaults = ShapesConfig::default();
        replace_non_finite(
            "fill_opacity",
            &mut self.shapes.fill_opacity,
            shape_defaults.fill_opacity,
        );
        replace_non_finite(
            "outline_width",
            &mut self.shapes.outline_width,
            shape_defaults.outline_width,
        );

        if !(1..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, 8192);
        }

        if !(1..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, 8192);
        }

        if !(0.5..=50.0).contains(&self.pen.thickness) {
            log::warn!(
                "Invalid pen thickness {:.1}, clamping to 0.5-50.0 range",
                self.pen.thickness
            );
            self.pen.thickness = self.pen.thickness.clamp(0.5, 50.0);
        }

        if !(0.0..=1.0).contains(&self.shapes.fill_opacity) {
            log::warn!(
                "Invalid fill_opacity {:.2}, clamping to 0.0-1.0 range",
                self.shapes.fill_opacity
            );
            self.shapes.fill_opacity = self.shapes.fill_opacity.clamp(0.0, 1.0);
        }

        if !(0.5..=20.0).contains(&self.shapes.outline_width) {
            log::warn!(
                "Invalid outline_width {:.1}, clamping to 0.5-20.0 range",
                self.shapes.outline_width
            );
            self.shapes.outline_width = self.shapes.outline_width.clamp(0.5, 20.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkframe/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkframe");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory path cannot be determined, or if the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it doesn't exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path, or if the
    /// directory or file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

/// NaN and infinities survive `f64::clamp`, so they fall back to the default.
fn replace_non_finite(name: &str, value: &mut f64, default: f64) {
    if !value.is_finite() {
        log::warn!("Invalid {name} {value}, using default {default}");
        *value = default;
    }
}
