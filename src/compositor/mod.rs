//! Freehand ink composited over a base image.
//!
//! [`RasterCompositor`] owns a fixed-size surface. A base image is painted
//! stretched to fill it, pointer drags lay ink on top as they happen, and
//! every finished stroke yields a PNG [`Snapshot`] of the flattened surface.

mod stroke;

pub use stroke::StrokeState;

use crate::draw::{BLACK, Color, Surface, render};
use crate::input::{MouseButton, Viewport};
use crate::source::{BaseImage, DataUri, ImageError, LoadTicket, LoadTracker};

/// Default freehand surface edge length in pixels.
pub const DEFAULT_SURFACE_SIZE: i32 = 900;

/// Encoded image of a whole surface, in the same data URI form as the input.
pub type Snapshot = DataUri;

/// Ink appearance for freehand strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenStyle {
    pub color: Color,
    /// Line width in pixels
    pub thickness: f64,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            thickness: 1.0,
        }
    }
}

/// Freehand drawing surface with an explicit stroke state machine.
///
/// All operations degrade to no-ops when the surface could not be allocated.
/// Pointer input is ignored while a base image load is outstanding.
#[derive(Debug)]
pub struct RasterCompositor {
    surface: Option<Surface>,
    width: i32,
    height: i32,
    pen: PenStyle,
    viewport: Viewport,
    stroke: StrokeState,
    loads: LoadTracker,
}

impl RasterCompositor {
    /// Creates a compositor with a `width` x `height` transparent surface.
    pub fn new(width: i32, height: i32, pen: PenStyle) -> Self {
        let surface = match Surface::new(width, height) {
            Ok(surface) => Some(surface),
            Err(err) => {
                log::warn!("Drawing surface unavailable: {err}");
                None
            }
        };

        Self {
            surface,
            width,
            height,
            pen,
            viewport: Viewport::identity(width, height),
            stroke: StrokeState::Idle,
            loads: LoadTracker::new(),
        }
    }

    /// Creates a 900x900 compositor with black 1px ink.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_SURFACE_SIZE, DEFAULT_SURFACE_SIZE, PenStyle::default())
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pen(&self) -> PenStyle {
        self.pen
    }

    pub fn stroke_state(&self) -> &StrokeState {
        &self.stroke
    }

    /// True while a pointer drag is laying down ink.
    pub fn is_drawing(&self) -> bool {
        self.stroke.is_drawing()
    }

    /// True when no base image load is outstanding.
    pub fn is_ready(&self) -> bool {
        self.loads.is_ready()
    }

    /// Whether a drawing surface could be allocated.
    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    /// Updates where the surface sits on screen and how large it is shown.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn to_surface(&self, x: f64, y: f64) -> (f64, f64) {
        self.viewport.to_surface(x, y, self.width, self.height)
    }

    /// Processes a pointer press at viewport coordinates `(x, y)`.
    ///
    /// A left press inside the surface while idle begins a stroke there.
    pub fn on_pointer_down(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left || self.surface.is_none() {
            return;
        }
        if !self.loads.is_ready() {
            log::debug!("Ignoring pointer down while base image is loading");
            return;
        }
        if self.stroke.is_drawing() {
            return;
        }

        let point = self.to_surface(x, y);
        if !self.contains(point) {
            log::debug!("Pointer down at {:?} is outside the surface", point);
            return;
        }

        self.stroke = StrokeState::begin(point);
    }

    /// Processes pointer motion at viewport coordinates `(x, y)`.
    ///
    /// While drawing, the new segment is rendered immediately.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let point = self.to_surface(x, y);
        let Some(from) = self.stroke.extend(point) else {
            return;
        };

        if let Some(ctx) = self.surface.as_ref().and_then(Surface::context) {
            render::render_ink_segment(&ctx, from, point, self.pen.color, self.pen.thickness);
        }
    }

    /// Processes a pointer release; a finished stroke yields a snapshot.
    pub fn on_pointer_up(&mut self, button: MouseButton) -> Option<Snapshot> {
        if button != MouseButton::Left {
            return None;
        }
        self.finish_stroke()
    }

    /// Processes the pointer leaving the surface; ends any stroke like a release.
    pub fn on_pointer_leave(&mut self) -> Option<Snapshot> {
        self.finish_stroke()
    }

    fn finish_stroke(&mut self) -> Option<Snapshot> {
        let segments = self.stroke.finish()?;
        log::debug!("Stroke finished after {segments} segment(s)");
        self.snapshot()
    }

    fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= 0.0 && y >= 0.0 && x <= self.width as f64 && y <= self.height as f64
    }

    /// Encodes the full surface as a PNG data URI.
    pub fn snapshot(&self) -> Option<Snapshot> {
        let surface = self.surface.as_ref()?;
        match surface.encode_png() {
            Ok(bytes) => Some(DataUri::png(bytes)),
            Err(err) => {
                log::warn!("Failed to snapshot drawing surface: {err}");
                None
            }
        }
    }

    /// Starts replacing the base image.
    ///
    /// Any stroke in progress is abandoned without a snapshot, and pointer
    /// input is ignored until the returned ticket is finished or failed.
    pub fn begin_load(&mut self) -> LoadTicket {
        if self.stroke.finish().is_some() {
            log::debug!("Abandoning stroke in progress for a new base image");
        }
        self.loads.begin()
    }

    /// Completes a load: clears the surface and paints `image` to fill it.
    ///
    /// Returns false, leaving the surface untouched, if `ticket` has been
    /// superseded by a newer load.
    pub fn finish_load(&mut self, ticket: LoadTicket, image: BaseImage) -> bool {
        if !self.loads.complete(ticket) {
            return false;
        }

        if let Some(surface) = &self.surface {
            surface.clear();
            surface.paint_image(image.surface());
            log::info!(
                "Rebased drawing surface on {}x{} image",
                image.width(),
                image.height()
            );
        }
        true
    }

    /// Abandons a load whose image could not be decoded; prior content stays.
    pub fn fail_load(&mut self, ticket: LoadTicket, err: &ImageError) {
        if self.loads.complete(ticket) {
            log::warn!("Failed to load base image, keeping previous content: {err}");
        }
    }

    /// Decodes `uri` and rebases the surface on it in one step.
    pub fn load(&mut self, uri: &DataUri) -> Result<(), ImageError> {
        let ticket = self.begin_load();
        match BaseImage::decode(uri) {
            Ok(image) => {
                self.finish_load(ticket, image);
                Ok(())
            }
            Err(err) => {
                self.fail_load(ticket, &err);
                Err(err)
            }
        }
    }

    /// Reads back one premultiplied RGBA pixel of the surface.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        self.surface.as_mut()?.pixel(x, y)
    }
}
