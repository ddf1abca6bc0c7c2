//! Annotation shape definitions.

use crate::draw::{Color, RED};
use crate::util::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of annotation box an editor can add.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// 100 x 100 box
    Square,
    /// 150 x 100 box
    Rectangle,
}

impl ShapeKind {
    /// Fixed `(width, height)` of every shape of this kind.
    pub fn size(self) -> (f64, f64) {
        match self {
            ShapeKind::Square => (100.0, 100.0),
            ShapeKind::Rectangle => (150.0, 100.0),
        }
    }

    /// Lowercase name, also used as the id prefix.
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(ShapeKind::Square),
            "rectangle" => Ok(ShapeKind::Rectangle),
            other => Err(format!("unknown shape kind '{other}'")),
        }
    }
}

/// A rectangular annotation positioned over the base image.
///
/// Only the top-left corner ever changes after creation; the size is fixed by
/// the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: String,
    kind: ShapeKind,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Shape {
    pub(super) fn new(id: String, kind: ShapeKind, x: f64, y: f64) -> Self {
        let (width, height) = kind.size();
        Self {
            id,
            kind,
            x,
            y,
            width,
            height,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Top-left X in surface coordinates
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Top-left Y in surface coordinates
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Bounding box used for hit-testing and rendering.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// The same shape shifted by `(dx, dy)`.
    pub(super) fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }
}

/// How annotation boxes are painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Fill of every box (translucent so the image shows through)
    pub fill: Color,
    /// Outline of the selected box
    pub outline: Color,
    /// Outline width in pixels
    pub outline_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: RED.with_alpha(0.5),
            outline: RED,
            outline_width: 2.0,
        }
    }
}
