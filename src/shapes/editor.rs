//! Shape collection, selection, and rendering over a base image.

use super::placement::Placement;
use super::shape::{Shape, ShapeKind, ShapeStyle};
use crate::draw::{Surface, render};
use crate::input::{Direction, Key, Viewport};
use crate::source::{BaseImage, DataUri, ImageError, LoadTicket, LoadTracker};

/// Distance in pixels a shape travels per movement step.
pub const MOVE_STEP: f64 = 10.0;

/// Maintains annotation boxes over a fixed-size surface.
///
/// The collection is ordered by z: later shapes are drawn on top and win
/// hit-tests. Every change repaints the surface from the untouched base image,
/// so moved or removed shapes leave no trace.
#[derive(Debug)]
pub struct ShapeEditor {
    width: i32,
    height: i32,
    shapes: Vec<Shape>,
    selected: Option<String>,
    next_id: u64,
    placement: Placement,
    style: ShapeStyle,
    viewport: Viewport,
    surface: Option<Surface>,
    base: Option<BaseImage>,
    loads: LoadTracker,
}

impl ShapeEditor {
    /// Creates an empty editor over a `width` x `height` surface.
    pub fn new(width: i32, height: i32) -> Self {
        let surface = match Surface::new(width, height) {
            Ok(surface) => Some(surface),
            Err(err) => {
                log::warn!("Annotation surface unavailable: {err}");
                None
            }
        };

        Self {
            width,
            height,
            shapes: Vec::new(),
            selected: None,
            next_id: 1,
            placement: Placement::from_clock(),
            style: ShapeStyle::default(),
            viewport: Viewport::identity(width, height),
            surface,
            base: None,
            loads: LoadTracker::new(),
        }
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self.render();
        self
    }

    /// Replaces the random source used to place new shapes.
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// All shapes, bottom-most first.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    /// Id of the selected shape, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected().and_then(|id| self.shape(id))
    }

    /// Whether [`remove`](Self::remove) would do anything.
    pub fn can_remove(&self) -> bool {
        self.selected.is_some()
    }

    /// True when no base image load is outstanding.
    pub fn is_ready(&self) -> bool {
        self.loads.is_ready()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn fresh_id(&mut self, kind: ShapeKind) -> String {
        loop {
            let id = format!("{}-{}", kind.label(), self.next_id);
            self.next_id += 1;
            if self.shape(&id).is_none() {
                return id;
            }
        }
    }

    /// Adds a shape of `kind` at a random position that keeps it on the surface.
    ///
    /// The new shape goes on top. Selection is unchanged. Returns the new id.
    pub fn add(&mut self, kind: ShapeKind) -> String {
        let (width, height) = kind.size();
        let x = self.placement.coordinate(self.width as f64 - width);
        let y = self.placement.coordinate(self.height as f64 - height);
        let id = self.fresh_id(kind);

        log::debug!("Adding {id} at ({x}, {y})");
        self.shapes.push(Shape::new(id.clone(), kind, x, y));
        self.render();
        id
    }

    /// Selects the topmost shape under a click at viewport coordinates.
    ///
    /// Box edges count as inside. A click that hits nothing clears the selection.
    pub fn select_at(&mut self, x: f64, y: f64) -> Option<&str> {
        let (sx, sy) = self.viewport.to_surface(x, y, self.width, self.height);
        let hit = self
            .shapes
            .iter()
            .rev()
            .find(|shape| shape.bounds().contains(sx, sy))
            .map(|shape| shape.id().to_string());

        if hit != self.selected {
            log::debug!("Selection changed to {:?}", hit);
            self.selected = hit;
            self.render();
        }
        self.selected()
    }

    /// Clears the selection without touching the collection.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.render();
        }
    }

    /// Deletes the selected shape and clears the selection.
    pub fn remove(&mut self) -> Option<Shape> {
        let Some(id) = self.selected.take() else {
            log::debug!("Remove ignored: nothing selected");
            return None;
        };

        let removed = self
            .shapes
            .iter()
            .position(|shape| shape.id() == id)
            .map(|index| self.shapes.remove(index));
        self.render();
        removed
    }

    /// Shifts the selected shape by one [`MOVE_STEP`] in `direction`.
    ///
    /// No bounds clamping: shapes may leave the surface. Returns false when
    /// nothing is selected.
    pub fn move_selected(&mut self, direction: Direction) -> bool {
        let Some(id) = self.selected.as_deref() else {
            log::debug!("Move ignored: nothing selected");
            return false;
        };
        let Some(index) = self.shapes.iter().position(|shape| shape.id() == id) else {
            return false;
        };

        let (dx, dy) = direction.unit();
        let moved = self.shapes[index].translated(dx * MOVE_STEP, dy * MOVE_STEP);
        self.shapes[index] = moved;
        self.render();
        true
    }

    /// Handles a key press: arrows move the selection, Delete/Backspace remove
    /// it, Escape deselects. Returns whether the key changed anything.
    pub fn on_key(&mut self, key: Key) -> bool {
        if let Some(direction) = key.direction() {
            return self.move_selected(direction);
        }

        match key {
            Key::Delete | Key::Backspace => self.remove().is_some(),
            Key::Escape => {
                let had_selection = self.selected.is_some();
                self.clear_selection();
                had_selection
            }
            _ => {
                log::debug!("Ignoring unmapped key {:?}", key);
                false
            }
        }
    }

    /// Starts replacing the base image; repaints wait until it completes.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.loads.begin()
    }

    /// Installs `image` as the base and repaints, unless `ticket` is stale.
    pub fn finish_load(&mut self, ticket: LoadTicket, image: BaseImage) -> bool {
        if !self.loads.complete(ticket) {
            return false;
        }
        log::info!(
            "Annotating {}x{} image on {}x{} surface",
            image.width(),
            image.height(),
            self.width,
            self.height
        );
        self.base = Some(image);
        self.render();
        true
    }

    /// Abandons a load that could not be decoded; the previous base stays.
    pub fn fail_load(&mut self, ticket: LoadTicket, err: &ImageError) {
        if self.loads.complete(ticket) {
            log::warn!("Failed to load annotation base image: {err}");
            self.render();
        }
    }

    /// Decodes `uri` and installs it as the base image in one step.
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

    /// Full repaint: base image stretched to fill, then every shape in order,
    /// with an outline on the selected one.
    fn render(&self) {
        if !self.loads.is_ready() {
            return;
        }
        let Some(surface) = &self.surface else {
            return;
        };

        surface.clear();
        if let Some(base) = &self.base {
            surface.paint_image(base.surface());
        }

        let Some(ctx) = surface.context() else {
            return;
        };
        for shape in &self.shapes {
            let outline = (self.selected.as_deref() == Some(shape.id()))
                .then_some((self.style.outline, self.style.outline_width));
            render::render_annotation(&ctx, shape.bounds(), self.style.fill, outline);
        }
    }

    /// Encodes the rendered surface as a PNG data URI.
    pub fn snapshot(&self) -> Option<DataUri> {
        let surface = self.surface.as_ref()?;
        match surface.encode_png() {
            Ok(bytes) => Some(DataUri::png(bytes)),
            Err(err) => {
                log::warn!("Failed to snapshot annotation surface: {err}");
                None
            }
        }
    }

    /// Reads back one premultiplied RGBA pixel of the rendered surface.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<[u8; 4]> {
        self.surface.as_mut()?.pixel(x, y)
    }
}
