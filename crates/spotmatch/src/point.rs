//! 2D coordinates and distance primitives.

/// Coordinate value marking an unset point.
pub const UNSET_COORD: f64 = -1.0e9;

/// A 2D point in image pixels (or any consistent planar unit).
///
/// `Point2D::default()` is the "unset" sentinel `(-1e9, -1e9)`. Equality is
/// exact floating-point equality.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Default for Point2D {
    fn default() -> Self {
        Self {
            x: UNSET_COORD,
            y: UNSET_COORD,
        }
    }
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True if both coordinates still hold the unset sentinel.
    pub fn is_unset(&self) -> bool {
        self.x == UNSET_COORD && self.y == UNSET_COORD
    }

    pub fn set(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Squared Euclidean distance to `(x, y)`.
    #[inline]
    pub fn squared_distance_xy(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn squared_distance(&self, other: &Point2D) -> f64 {
        self.squared_distance_xy(other.x, other.y)
    }

    #[inline]
    pub fn distance_xy(&self, x: f64, y: f64) -> f64 {
        self.squared_distance_xy(x, y).sqrt()
    }

    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        self.squared_distance(other).sqrt()
    }

    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Point2D {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
