//! Host controller wiring the image source into both editors.
//!
//! Holds the uploaded image and the latest composited output. Each snapshot
//! the compositor emits becomes its next base image, so ink survives the
//! clear-and-repaint that every re-base performs.

use crate::compositor::{PenStyle, RasterCompositor, Snapshot};
use crate::config::Config;
use crate::input::{MouseButton, Viewport};
use crate::shapes::{ShapeEditor, ShapeStyle};
use crate::source::{BaseImage, DataUri, ImageError};

/// Owns one editing session over an uploaded image.
#[derive(Debug)]
pub struct HostController {
    uploaded: Option<DataUri>,
    canvas_image: Option<DataUri>,
    compositor: RasterCompositor,
    shapes: Option<ShapeEditor>,
    shape_style: ShapeStyle,
}

impl HostController {
    /// Creates a host with a `width` x `height` freehand surface.
    pub fn new(width: i32, height: i32, pen: PenStyle, shape_style: ShapeStyle) -> Self {
        Self {
            uploaded: None,
            canvas_image: None,
            compositor: RasterCompositor::new(width, height, pen),
            shapes: None,
            shape_style,
        }
    }

    /// Creates a host using the canvas, pen, and shape settings from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.canvas.width,
            config.canvas.height,
            config.pen.style(),
            config.shapes.style(),
        )
    }

    /// Accepts a newly selected image.
    ///
    /// The image becomes the compositor's base and the shape editor is
    /// recreated at the image's own dimensions. An undecodable image is
    /// rejected and the current session is left as it was.
    pub fn upload(&mut self, image: DataUri) -> Result<(), ImageError> {
        let decoded = BaseImage::decode(&image)?;
        log::info!(
            "Uploaded {}x{} {} image",
            decoded.width(),
            decoded.height(),
            image.mime()
        );

        let mut editor =
            ShapeEditor::new(decoded.width(), decoded.height()).with_style(self.shape_style);
        let ticket = editor.begin_load();
        editor.finish_load(ticket, decoded);
        self.shapes = Some(editor);

        self.compositor.load(&image)?;
        self.canvas_image = Some(image.clone());
        self.uploaded = Some(image);
        Ok(())
    }

    /// The image as originally uploaded.
    pub fn uploaded(&self) -> Option<&DataUri> {
        self.uploaded.as_ref()
    }

    /// The latest composited image (the upload until the first stroke ends).
    pub fn canvas_image(&self) -> Option<&DataUri> {
        self.canvas_image.as_ref()
    }

    pub fn compositor(&self) -> &RasterCompositor {
        &self.compositor
    }

    pub fn compositor_mut(&mut self) -> &mut RasterCompositor {
        &mut self.compositor
    }

    /// The shape editor, available once an image has been uploaded.
    pub fn shapes(&self) -> Option<&ShapeEditor> {
        self.shapes.as_ref()
    }

    pub fn shapes_mut(&mut self) -> Option<&mut ShapeEditor> {
        self.shapes.as_mut()
    }

    pub fn set_canvas_viewport(&mut self, viewport: Viewport) {
        self.compositor.set_viewport(viewport);
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        if self.canvas_image.is_none() {
            log::debug!("Ignoring pointer down before any upload");
            return;
        }
        self.compositor.on_pointer_down(MouseButton::Left, x, y);
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.compositor.on_pointer_move(x, y);
    }

    /// Ends the current stroke, if any, and records the resulting snapshot.
    pub fn on_pointer_up(&mut self) -> Option<&DataUri> {
        let snapshot = self.compositor.on_pointer_up(MouseButton::Left);
        self.accept_snapshot(snapshot)
    }

    /// Same as [`on_pointer_up`](Self::on_pointer_up), for the pointer leaving the canvas.
    pub fn on_pointer_leave(&mut self) -> Option<&DataUri> {
        let snapshot = self.compositor.on_pointer_leave();
        self.accept_snapshot(snapshot)
    }

    fn accept_snapshot(&mut self, snapshot: Option<Snapshot>) -> Option<&DataUri> {
        let snapshot = snapshot?;
        if let Err(err) = self.compositor.load(&snapshot) {
            log::warn!("Could not re-base on composited snapshot: {err}");
        }
        self.canvas_image = Some(snapshot);
        self.canvas_image.as_ref()
    }
}
