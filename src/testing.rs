//! Fixtures shared by unit tests.

use crate::draw::{Color, Surface, render};
use crate::source::DataUri;

/// A PNG data URI of a `width` x `height` image filled with `color`.
pub fn solid_png_uri(width: i32, height: i32, color: Color) -> DataUri {
    let surface = Surface::new(width, height).unwrap();
    {
        let ctx = surface.context().unwrap();
        render::fill(&ctx, color);
    }
    DataUri::png(surface.encode_png().unwrap())
}

/// A data URI of a `width` x `height` image of one RGB color, encoded with
/// the `image` crate as `format`.
pub fn solid_encoded_uri(width: u32, height: u32, rgb: [u8; 3], format: image::ImageFormat) -> DataUri {
    let pixels = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    let mut bytes = std::io::Cursor::new(Vec::new());
    pixels.write_to(&mut bytes, format).unwrap();
    DataUri::new(format.to_mime_type(), bytes.into_inner())
}
