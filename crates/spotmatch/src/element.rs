//! Landmark elements: single spots or 4-pole ellipses.

use crate::affine::AffineTransform;
use crate::point::Point2D;

/// Area value after a transform (shape metrics are not tracked for spots).
pub const RESET_AREA: f64 = 0.0;
/// Aspect-ratio / angle value after a transform.
pub const RESET_SHAPE: f64 = -1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ElementError {
    /// An element needs exactly one point (spot) or four points (ellipse).
    InvalidShape { got: usize },
}

impl std::fmt::Display for ElementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidShape { got } => write!(
                f,
                "invalid element shape: expected 1 point (spot) or 4 points (ellipse), got {}",
                got
            ),
        }
    }
}

impl std::error::Error for ElementError {}

/// Element shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Spot,
    Ellipse,
}

/// A single landmark of a fingerprint.
///
/// Ellipses are stored as four poles: east/west first, then north/south. The
/// centroid of an ellipse is the midpoint of the east/west poles.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    points: Vec<Point2D>,
    centroid: Point2D,
    area: f64,
    ratio: f64,
    angle: f64,
}

impl Element {
    /// Build an element from one (spot) or four (ellipse) points.
    pub fn new(points: &[Point2D]) -> Result<Self, ElementError> {
        check_shape(points.len())?;
        Ok(Self {
            points: points.to_vec(),
            centroid: centroid_of(points),
            area: RESET_AREA,
            ratio: RESET_SHAPE,
            angle: RESET_SHAPE,
        })
    }

    pub fn spot(p: Point2D) -> Self {
        Self {
            points: vec![p],
            centroid: p,
            area: RESET_AREA,
            ratio: RESET_SHAPE,
            angle: RESET_SHAPE,
        }
    }

    /// Replace the element's points. On error the element is left untouched.
    pub fn set_points(&mut self, points: &[Point2D]) -> Result<(), ElementError> {
        check_shape(points.len())?;
        self.points.clear();
        self.points.extend_from_slice(points);
        self.centroid = centroid_of(&self.points);
        Ok(())
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn kind(&self) -> ElementKind {
        if self.points.len() == 1 {
            ElementKind::Spot
        } else {
            ElementKind::Ellipse
        }
    }

    pub fn centroid(&self) -> Point2D {
        self.centroid
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Apply `affine` to every point. `None` leaves the element unchanged.
    pub fn transform(&mut self, affine: Option<&AffineTransform>) {
        if let Some(affine) = affine {
            self.transform_by(affine);
        }
    }

    pub fn transform_by(&mut self, affine: &AffineTransform) {
        for p in &mut self.points {
            *p = affine.apply_point(*p);
        }
        self.centroid = centroid_of(&self.points);
        self.reset_shape();
    }

    fn reset_shape(&mut self) {
        self.area = RESET_AREA;
        self.ratio = RESET_SHAPE;
        self.angle = RESET_SHAPE;
    }

    /// Squared centroid-to-centroid distance.
    #[inline]
    pub fn squared_distance(&self, other: &Element) -> f64 {
        self.centroid.squared_distance(&other.centroid)
    }

    #[inline]
    pub fn distance(&self, other: &Element) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Shape similarity in `[0, 1]`; only spots are compared, so always `1.0`.
    pub fn similarity(&self, _other: &Element) -> f64 {
        1.0
    }

    /// Whether `other` may be paired with this element at all.
    pub fn matches(&self, _other: &Element) -> bool {
        true
    }
}

/// True if the smaller of `x1`, `x2` is at least `ratio` times the larger.
pub fn within_ratio(x1: f64, x2: f64, ratio: f64) -> bool {
    if x1 < x2 {
        x1 / x2 >= ratio
    } else {
        x2 / x1 >= ratio
    }
}

fn check_shape(n: usize) -> Result<(), ElementError> {
    match n {
        1 | 4 => Ok(()),
        got => Err(ElementError::InvalidShape { got }),
    }
}

fn centroid_of(points: &[Point2D]) -> Point2D {
    if points.len() == 1 {
        return points[0];
    }
    Point2D::new(
        (points[0].x + points[1].x) / 2.0,
        (points[0].y + points[1].y) / 2.0,
    )
}
