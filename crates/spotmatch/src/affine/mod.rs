//! 2D affine transforms derived from three point correspondences.
//!
//! A transform maps `(x, y)` to `(a·x + b·y + c, d·x + e·y + f)`. It is
//! derived from three source/destination pairs by solving two 3×3 systems that
//! share the coefficient matrix `[[x1, y1, 1], [x2, y2, 1], [x3, y3, 1]]`.
//! Collinear (or otherwise degenerate) source triples have no solution and
//! yield `None`; callers skip such candidates.

mod solve;

use nalgebra::{Matrix3, Vector3};

use crate::point::Point2D;

pub use solve::solve_3x3;

/// Six-parameter 2D affine map `[a, b, c, d, e, f]`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AffineTransform {
    coeffs: [f64; 6],
}

impl AffineTransform {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            coeffs: [a, b, c, d, e, f],
        }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    /// Derive the transform that maps each `src[i]` onto `dst[i]`.
    ///
    /// Returns `None` when the source triple is degenerate.
    pub fn from_correspondences(src: [Point2D; 3], dst: [Point2D; 3]) -> Option<Self> {
        let m = Matrix3::new(
            src[0].x, src[0].y, 1.0,
            src[1].x, src[1].y, 1.0,
            src[2].x, src[2].y, 1.0,
        );
        let row_x = solve_3x3(&m, &Vector3::new(dst[0].x, dst[1].x, dst[2].x))?;
        let row_y = solve_3x3(&m, &Vector3::new(dst[0].y, dst[1].y, dst[2].y))?;
        Some(Self::new(
            row_x[0], row_x[1], row_x[2], row_y[0], row_y[1], row_y[2],
        ))
    }

    /// Coefficients in `[a, b, c, d, e, f]` order.
    pub fn coefficients(&self) -> [f64; 6] {
        self.coeffs
    }

    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let [a, b, c, d, e, f] = self.coeffs;
        (a * x + b * y + c, d * x + e * y + f)
    }

    #[inline]
    pub fn apply_point(&self, p: Point2D) -> Point2D {
        let (x, y) = self.apply(p.x, p.y);
        Point2D::new(x, y)
    }

    /// Homogeneous 3×3 form with last row `[0, 0, 1]`.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        let [a, b, c, d, e, f] = self.coeffs;
        Matrix3::new(a, b, c, d, e, f, 0.0, 0.0, 1.0)
    }

    /// Transform that applies `self` first, then `next`.
    pub fn then(&self, next: &AffineTransform) -> AffineTransform {
        let m = next.to_matrix() * self.to_matrix();
        Self::new(
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)],
        )
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}
