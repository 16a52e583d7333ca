use crate::cluster::{Coordinate, Rect};

/// Uniform scaling from map space onto an image, north up
///
/// The map bounds are scaled by the smaller of the two axis ratios so the
/// whole extent fits and shapes are not distorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapTransform {
    min_x: f64,
    max_y: f64,
    scale: f64,
}

impl MapTransform {
    pub fn fit_to_bounds(bounds: &Rect, image_width: u32, image_height: u32) -> Self {
        let sx = f64::from(image_width) / bounds.width;
        let sy = f64::from(image_height) / bounds.height;
        // A zero extent divides to +inf; fall back to the other axis, or 1:1
        let scale = match (sx.is_finite(), sy.is_finite()) {
            (true, true) => sx.min(sy),
            (true, false) => sx,
            (false, true) => sy,
            (false, false) => 1.0,
        };

        MapTransform {
            min_x: bounds.x,
            max_y: bounds.max_y(),
            scale,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Image position of a map coordinate, y growing downwards
    pub fn to_image(&self, c: &Coordinate) -> (f64, f64) {
        (
            (c.x() - self.min_x) * self.scale,
            (self.max_y - c.y()) * self.scale,
        )
    }

    /// Image rectangle `(left, top, width, height)` of a map rectangle
    pub fn rect_to_image(&self, rect: &Rect) -> (f64, f64, f64, f64) {
        let (left, top) = self.to_image(&Coordinate([rect.x, rect.max_y()]));
        (left, top, rect.width * self.scale, rect.height * self.scale)
    }
}
