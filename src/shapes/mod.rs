//! Shape annotation engine.
//!
//! Square and rectangle boxes are placed over a base image, selected by
//! clicking, nudged with the arrow keys, and removed. See [`ShapeEditor`].

mod editor;
mod placement;
mod shape;
#[cfg(test)]
mod tests;

pub use editor::{MOVE_STEP, ShapeEditor};
pub use placement::Placement;
pub use shape::{Shape, ShapeKind, ShapeStyle};
