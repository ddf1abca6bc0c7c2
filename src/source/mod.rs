//! Image input and output for the editors.
//!
//! This module covers everything between a file on disk and pixels on a
//! surface:
//! - Reading a file into a self-contained [`DataUri`]
//! - Decoding a data URI into a [`BaseImage`]
//! - Tracking which in-flight load is allowed to repaint ([`LoadTracker`])
//! - Writing snapshots back to disk

pub mod data_uri;
pub mod file;
pub mod image;
pub mod load;
pub mod types;

pub use data_uri::{DataUri, PNG_MIME};
pub use file::{read_file_as_data_uri, save_png};
pub use image::BaseImage;
pub use load::{LoadTicket, LoadTracker};
pub use types::ImageError;
