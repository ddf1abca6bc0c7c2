//! Rendering primitives (Cairo-based).
//!
//! This module defines the raster types shared by both editors:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Surface`]: fixed-size pixel grid that ink and annotations land on
//! - Rendering functions for ink segments, annotation boxes, and base images

pub mod color;
pub mod render;
pub mod surface;

pub use color::Color;
pub use render::{render_annotation, render_base_image, render_ink_segment};
pub use surface::{Surface, SurfaceError, read_pixel};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE, YELLOW};
