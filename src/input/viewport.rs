//! Mapping from viewport (screen) coordinates to surface-local coordinates.

/// Where a surface is shown on screen and how large it is rendered there.
///
/// The surface's logical pixel size may differ from its rendered size (CSS
/// scaling, HiDPI), so pointer positions are scaled by
/// `logical / rendered` after removing the on-screen offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Screen X of the surface's top-left corner
    pub left: f64,
    /// Screen Y of the surface's top-left corner
    pub top: f64,
    /// Rendered width on screen
    pub rendered_width: f64,
    /// Rendered height on screen
    pub rendered_height: f64,
}

impl Viewport {
    /// A viewport at the origin, rendered at exactly the logical size.
    pub fn identity(width: i32, height: i32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            rendered_width: width as f64,
            rendered_height: height as f64,
        }
    }

    /// Converts a viewport point to surface-local coordinates for a surface of
    /// `logical_width` x `logical_height` pixels.
    ///
    /// A degenerate rendered size (zero or negative) falls back to a 1:1 scale
    /// on that axis.
    pub fn to_surface(
        &self,
        x: f64,
        y: f64,
        logical_width: i32,
        logical_height: i32,
    ) -> (f64, f64) {
        let scale_x = axis_scale(logical_width, self.rendered_width);
        let scale_y = axis_scale(logical_height, self.rendered_height);
        ((x - self.left) * scale_x, (y - self.top) * scale_y)
    }
}

fn axis_scale(logical: i32, rendered: f64) -> f64 {
    if rendered > 0.0 && rendered.is_finite() {
        logical as f64 / rendered
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_only_subtracts_offset() {
        let viewport = Viewport {
            left: 30.0,
            top: 12.0,
            ..Viewport::identity(900, 900)
        };
        assert_eq!(viewport.to_surface(40.0, 22.0, 900, 900), (10.0, 10.0));
    }

    #[test]
    fn scales_when_rendered_size_differs() {
        let viewport = Viewport {
            left: 0.0,
            top: 0.0,
            rendered_width: 450.0,
            rendered_height: 300.0,
        };
        assert_eq!(viewport.to_surface(100.0, 150.0, 900, 900), (200.0, 450.0));
    }

    #[test]
    fn degenerate_rendered_size_falls_back_to_unit_scale() {
        let viewport = Viewport {
            left: 5.0,
            top: 5.0,
            rendered_width: 0.0,
            rendered_height: f64::NAN,
        };
        assert_eq!(viewport.to_surface(15.0, 25.0, 900, 900), (10.0, 20.0));
    }
}
