//! Cairo-based rendering functions for ink and annotation boxes.

use super::color::Color;
use crate::util::Rect;

/// Resets the whole target to transparent.
pub fn clear(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint(); // A failed paint leaves the previous content in place
    let _ = ctx.restore();
}

/// Floods the whole target with a solid color.
pub fn fill(ctx: &cairo::Context, color: Color) {
    color.apply(ctx);
    let _ = ctx.paint();
}

/// Draws an image scaled so it exactly covers a `width` x `height` target.
///
/// Aspect ratio is not preserved; the image is stretched on each axis
/// independently.
pub fn render_base_image(ctx: &cairo::Context, image: &cairo::ImageSurface, width: f64, height: f64) {
    let (image_width, image_height) = (image.width() as f64, image.height() as f64);
    if image_width <= 0.0 || image_height <= 0.0 {
        return;
    }

    let _ = ctx.save();
    ctx.scale(width / image_width, height / image_height);
    if let Err(err) = ctx.set_source_surface(image, 0.0, 0.0) {
        log::debug!("Cannot use base image as source: {err}");
    } else if let Err(err) = ctx.paint() {
        log::debug!("Failed to paint base image: {err}");
    }
    let _ = ctx.restore();
}

/// Strokes one segment of a freehand path.
///
/// Round caps make consecutive segments join seamlessly, so a stroke can be
/// rendered incrementally as the pointer moves.
pub fn render_ink_segment(
    ctx: &cairo::Context,
    from: (f64, f64),
    to: (f64, f64),
    color: Color,
    thick: f64,
) {
    color.apply(ctx);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    let _ = ctx.stroke();
}

/// Renders an annotation box: a translucent fill plus an optional outline.
pub fn render_annotation(ctx: &cairo::Context, rect: Rect, fill: Color, outline: Option<(Color, f64)>) {
    fill.apply(ctx);
    ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
    let _ = ctx.fill();

    if let Some((color, width)) = outline {
        color.apply(ctx);
        ctx.set_line_width(width);
        ctx.set_line_join(cairo::LineJoin::Miter);
        ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
        let _ = ctx.stroke();
    }
}
