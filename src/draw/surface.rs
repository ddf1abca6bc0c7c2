//! Fixed-size raster surface backed by a Cairo image surface.

use super::render;
use thiserror::Error;

/// Errors raised while creating or encoding a [`Surface`].
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode surface as PNG: {0}")]
    Encode(String),
}

/// A 2D ARGB pixel grid whose dimensions are fixed at creation.
///
/// Drawing contexts are opened per operation and dropped immediately, so the
/// surface is never borrowed across calls and pixel readback stays possible.
#[derive(Debug)]
pub struct Surface {
    inner: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Surface {
    /// Allocates a transparent surface of the given size.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let inner = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            inner,
            width,
            height,
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Opens a drawing context, or `None` if Cairo refuses one.
    pub fn context(&self) -> Option<cairo::Context> {
        match cairo::Context::new(&self.inner) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                log::debug!("Drawing context unavailable: {err}");
                None
            }
        }
    }

    /// Resets every pixel to fully transparent.
    pub fn clear(&self) {
        if let Some(ctx) = self.context() {
            render::clear(&ctx);
        }
    }

    /// Draws `image` stretched to cover the whole surface.
    pub fn paint_image(&self, image: &cairo::ImageSurface) {
        if let Some(ctx) = self.context() {
            render::render_base_image(&ctx, image, self.width as f64, self.height as f64);
        }
    }

    /// Encodes the current surface content as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.inner.flush();
        let mut bytes = Vec::new();
        self.inner
            .write_to_png(&mut bytes)
            .map_err(|err| SurfaceError::Encode(err.to_string()))?;
        Ok(bytes)
    }

    /// Reads back one pixel as premultiplied `(r, g, b, a)` bytes.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        read_pixel(&mut self.inner, x, y)
    }
}

/// Reads a single premultiplied RGBA pixel from an image surface.
///
/// Returns `None` when the coordinates fall outside the surface or the
/// surface data is shared with a live drawing context.
pub fn read_pixel(surface: &mut cairo::ImageSurface, x: i32, y: i32) -> Option<[u8; 4]> {
    if x < 0 || y < 0 || x >= surface.width() || y >= surface.height() {
        return None;
    }

    surface.flush();
    let opaque = surface.format() == cairo::Format::Rgb24;
    let stride = surface.stride() as usize;
    let data = surface.data().ok()?;
    let offset = y as usize * stride + x as usize * 4;
    let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
    let argb = u32::from_ne_bytes(bytes);

    let alpha = if opaque { 0xff } else { (argb >> 24) as u8 };
    Some([(argb >> 16) as u8, (argb >> 8) as u8, argb as u8, alpha])
}
