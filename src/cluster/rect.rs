//! Axis-aligned rectangles in map space

use super::point::Coordinate;
use crate::error::{PageFitError, Result};

/// Axis-aligned rectangle anchored at its minimum corner
///
/// `(x, y)` is the corner with the smallest coordinates; `width` and
/// `height` extend towards positive x and y. Zero extents are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle of the given size centred on `c`
    pub fn from_centre(c: &Coordinate, width: f64, height: f64) -> Self {
        Rect {
            x: c.x() - width / 2.0,
            y: c.y() - height / 2.0,
            width,
            height,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn centre(&self) -> Coordinate {
        Coordinate([self.x + self.width / 2.0, self.y + self.height / 2.0])
    }

    /// Half-open containment: x in `[x, x + width)`, y in `[y, y + height)`
    ///
    /// A rectangle with a zero extent contains nothing.
    pub fn contains(&self, c: &Coordinate) -> bool {
        c.x() >= self.x && c.x() < self.max_x() && c.y() >= self.y && c.y() < self.max_y()
    }
}

/// Computes the bounding box of a set of points
///
/// # Errors
///
/// Returns [`PageFitError::EmptyInput`] if `points` yields nothing
pub fn bounds<I>(points: I) -> Result<Rect>
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut points = points.into_iter();
    let first = points.next().ok_or(PageFitError::EmptyInput)?;

    let mut min = first;
    let mut max = first;
    for pt in points {
        for j in 0..2 {
            if pt.0[j] < min.0[j] {
                min.0[j] = pt.0[j];
            }
            if pt.0[j] > max.0[j] {
                max.0[j] = pt.0[j];
            }
        }
    }

    Ok(Rect::new(
        min.0[0],
        min.0[1],
        max.0[0] - min.0[0],
        max.0[1] - min.0[1],
    ))
}
