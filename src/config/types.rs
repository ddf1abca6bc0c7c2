//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::compositor::PenStyle;
use crate::shapes::ShapeStyle;
use serde::{Deserialize, Serialize};

/// Freehand drawing surface settings.
///
/// The surface size is fixed for the whole session once the editor starts.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_size")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_size")]
    pub height: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
        }
    }
}

/// Ink appearance for freehand strokes.
#[derive(Debug, Serialize, Deserialize)]
pub struct PenConfig {
    /// Ink color - a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_pen_color")]
    pub color: ColorSpec,

    /// Line thickness in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_pen_thickness")]
    pub thickness: f64,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            color: default_pen_color(),
            thickness: default_pen_thickness(),
        }
    }
}

impl PenConfig {
    pub fn style(&self) -> PenStyle {
        PenStyle {
            color: self.color.to_color(),
            thickness: self.thickness,
        }
    }
}

/// Appearance of shape annotations.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShapesConfig {
    /// Fill color of every annotation box
    #[serde(default = "default_shape_color")]
    pub fill_color: ColorSpec,

    /// Fill opacity (valid range: 0.0 - 1.0)
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,

    /// Outline color of the selected annotation
    #[serde(default = "default_shape_color")]
    pub outline_color: ColorSpec,

    /// Outline width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_outline_width")]
    pub outline_width: f64,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self {
            fill_color: default_shape_color(),
            fill_opacity: default_fill_opacity(),
            outline_color: default_shape_color(),
            outline_width: default_outline_width(),
        }
    }
}

impl ShapesConfig {
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle {
            fill: self.fill_color.to_color().with_alpha(self.fill_opacity),
            outline: self.outline_color.to_color(),
            outline_width: self.outline_width,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_size() -> i32 {
    900
}

fn default_pen_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_pen_thickness() -> f64 {
    1.0
}

fn default_shape_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_fill_opacity() -> f64 {
    0.5
}

fn default_outline_width() -> f64 {
    2.0
}
