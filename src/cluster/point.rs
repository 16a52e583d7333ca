//! Planar map coordinates

/// Coordinate represents a pre-projected point in map units
///
/// The coordinate is stored as [x, y] where:
/// - `[0]` is easting (x)
/// - `[1]` is northing (y)
///
/// Map units are the same units page dimensions are scaled into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate(pub [f64; 2]);

/// CoordinateList is an ordered route of Coordinates
pub type CoordinateList = Vec<Coordinate>;

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate([x, y])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Returns squared euclidean distance between two coordinates
    ///
    /// Monotone in the real distance, so it is enough for nearest-page
    /// comparisons.
    pub fn sq_dist(&self, b: &Coordinate) -> f64 {
        let dx = self.0[0] - b.0[0];
        let dy = self.0[1] - b.0[1];
        dx * dx + dy * dy
    }

    pub fn is_finite(&self) -> bool {
        self.0[0].is_finite() && self.0[1].is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate([x, y])
    }
}
