//! Freehand drawing and shape annotation over raster images.
//!
//! Two editors share one image source:
//! - [`compositor::RasterCompositor`] lays freehand ink over a base image and
//!   reports a PNG snapshot after each stroke
//! - [`shapes::ShapeEditor`] keeps movable square/rectangle annotations over
//!   an image, with click selection and keyboard nudging
//!
//! [`host::HostController`] wires an uploaded image into both.

pub mod compositor;
pub mod config;
pub mod draw;
pub mod host;
pub mod input;
pub mod script;
pub mod shapes;
pub mod source;
pub mod util;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use host::HostController;
