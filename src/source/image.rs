//! Decoded base images.

use super::data_uri::{DataUri, PNG_MIME};
use super::types::ImageError;
use crate::draw::read_pixel;

/// An image decoded into Cairo pixels, ready to be painted onto a surface.
#[derive(Debug)]
pub struct BaseImage {
    surface: cairo::ImageSurface,
}

impl BaseImage {
    /// Decodes a data URI holding any raster `image/*` payload.
    ///
    /// PNG goes through Cairo's own reader; JPEG, GIF, WebP, BMP and the other
    /// formats the `image` crate knows are converted to premultiplied ARGB32.
    pub fn decode(uri: &DataUri) -> Result<Self, ImageError> {
        let mime = uri.mime();
        if mime == PNG_MIME {
            return Self::decode_png(uri.bytes());
        }
        if !mime.starts_with("image/") {
            return Err(ImageError::UnsupportedFormat(mime.to_string()));
        }

        let decoded = ::image::load_from_memory(uri.bytes()).map_err(|err| match err {
            ::image::ImageError::Unsupported(_) => ImageError::UnsupportedFormat(mime.to_string()),
            other => ImageError::Decode(other.to_string()),
        })?;
        Self::from_rgba(&decoded.to_rgba8())
    }

    /// Decodes raw PNG bytes.
    pub fn decode_png(bytes: &[u8]) -> Result<Self, ImageError> {
        let mut reader = bytes;
        let surface = cairo::ImageSurface::create_from_png(&mut reader)
            .map_err(|err| ImageError::Decode(err.to_string()))?;

        if surface.width() <= 0 || surface.height() <= 0 {
            return Err(ImageError::Decode("image has no pixels".to_string()));
        }

        Ok(Self { surface })
    }

    /// Wraps straight-alpha RGBA pixels in a Cairo surface.
    fn from_rgba(pixels: &::image::RgbaImage) -> Result<Self, ImageError> {
        let (width, height) = pixels.dimensions();
        let (Ok(width), Ok(height)) = (i32::try_from(width), i32::try_from(height)) else {
            return Err(ImageError::Decode(format!("image too large: {width}x{height}")));
        };
        if width == 0 || height == 0 {
            return Err(ImageError::Decode("image has no pixels".to_string()));
        }

        let format = cairo::Format::ARgb32;
        let stride = format
            .stride_for_width(width as u32)
            .map_err(|err| ImageError::Decode(err.to_string()))?;
        let mut data = vec![0u8; stride as usize * height as usize];

        for (row, line) in pixels.rows().zip(data.chunks_exact_mut(stride as usize)) {
            for (pixel, out) in row.zip(line.chunks_exact_mut(4)) {
                let [r, g, b, a] = pixel.0;
                let argb = (a as u32) << 24
                    | (premultiply(r, a) as u32) << 16
                    | (premultiply(g, a) as u32) << 8
                    | premultiply(b, a) as u32;
                out.copy_from_slice(&argb.to_ne_bytes());
            }
        }

        let surface = cairo::ImageSurface::create_for_data(data, format, width, height, stride)
            .map_err(|err| ImageError::Decode(err.to_string()))?;
        Ok(Self { surface })
    }

    /// Image width in pixels.
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Reads back one premultiplied RGBA pixel.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        read_pixel(&mut self.surface, x, y)
    }
}

fn premultiply(channel: u8, alpha: u8) -> u8 {
    ((channel as u32 * alpha as u32 + 127) / 255) as u8
}
