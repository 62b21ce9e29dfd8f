//! Fingerprints: a reference triangle plus feature elements.
//!
//! The three reference points are materialized as elements `0..3`, followed by
//! the features in input order. Every index-based algorithm (scoring, pair
//! bookkeeping, the exhaustive search) therefore treats reference points as
//! ordinary elements with fixed identity.

mod dedup;
mod scoring;

use crate::affine::AffineTransform;
use crate::config::NORM_FACTOR_SCALE;
use crate::element::{Element, ElementError};
use crate::point::Point2D;

pub use dedup::filter_out_duplicate_pairs;
pub use scoring::{low_pair_penalty, DistanceResult, Pair};

/// Number of reference elements at the front of every fingerprint.
pub const REFERENCE_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum FingerprintError {
    /// A feature had an invalid point count.
    Element { feature: usize, source: ElementError },
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for FingerprintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element { feature, source } => write!(f, "feature {}: {}", feature, source),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "element index {} out of range (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for FingerprintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Element { source, .. } => Some(source),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

/// Landmark representation of one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Fingerprint {
    refs: [Point2D; 3],
    elements: Vec<Element>,
    norm_factor: f64,
}

impl Fingerprint {
    /// Build a fingerprint from reference points and feature point lists.
    ///
    /// Each feature is one point (spot) or four points (ellipse poles).
    pub fn new<F>(refs: [[f64; 2]; 3], features: &[F]) -> Result<Self, FingerprintError>
    where
        F: AsRef<[[f64; 2]]>,
    {
        let mut elements = Vec::with_capacity(features.len());
        for (feature, spec) in features.iter().enumerate() {
            let points: Vec<Point2D> = spec.as_ref().iter().copied().map(Point2D::from).collect();
            let element =
                Element::new(&points).map_err(|source| FingerprintError::Element { feature, source })?;
            elements.push(element);
        }
        Ok(Self::assemble(refs.map(Point2D::from), elements))
    }

    /// Build a fingerprint whose features are all single spots.
    pub fn from_spots(refs: [[f64; 2]; 3], spots: &[[f64; 2]]) -> Self {
        let elements = spots
            .iter()
            .map(|&p| Element::spot(Point2D::from(p)))
            .collect();
        Self::assemble(refs.map(Point2D::from), elements)
    }

    fn assemble(refs: [Point2D; 3], features: Vec<Element>) -> Self {
        let norm_factor = norm_factor(&refs);
        let mut elements = Vec::with_capacity(features.len() + REFERENCE_COUNT);
        elements.extend(refs.iter().map(|&r| Element::spot(r)));
        elements.extend(features);
        Self {
            refs,
            elements,
            norm_factor,
        }
    }

    pub fn refs(&self) -> &[Point2D; 3] {
        &self.refs
    }

    /// All elements, reference elements first.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> Result<&Element, FingerprintError> {
        self.elements
            .get(index)
            .ok_or(FingerprintError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            })
    }

    /// Element count including the three reference elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn feature_count(&self) -> usize {
        self.elements.len() - REFERENCE_COUNT
    }

    pub fn norm_factor(&self) -> f64 {
        self.norm_factor
    }

    /// Largest squared distance between reference elements, scaled by
    /// `max_allowed_distance`.
    pub fn max_allowed_squared_distance(&self, max_allowed_distance: f64) -> f64 {
        let e = &self.elements;
        let mut max_dist = e[0].squared_distance(&e[1]);
        let d02 = e[0].squared_distance(&e[2]);
        if d02 > max_dist {
            max_dist = d02;
        }
        let d12 = e[1].squared_distance(&e[2]);
        if d12 > max_dist {
            max_dist = d12;
        }
        max_dist * max_allowed_distance
    }

    /// Apply `affine` to every element, reference elements included.
    ///
    /// `None` leaves the fingerprint unchanged. The normalization factor is
    /// fixed at construction and is not recomputed.
    pub fn transform(&mut self, affine: Option<&AffineTransform>) {
        let Some(affine) = affine else {
            return;
        };
        for element in &mut self.elements {
            element.transform_by(affine);
        }
        for (r, element) in self.refs.iter_mut().zip(&self.elements) {
            *r = element.centroid();
        }
    }

    /// Every element's points flattened as `x, y` pairs in element order.
    pub fn to_flat_coords(&self) -> Vec<f64> {
        self.elements
            .iter()
            .flat_map(|e| e.points().iter().flat_map(|p| [p.x, p.y]))
            .collect()
    }
}

fn norm_factor(refs: &[Point2D; 3]) -> f64 {
    let mut perimeter = refs[0].distance(&refs[1]);
    perimeter += refs[0].distance(&refs[2]);
    perimeter += refs[1].distance(&refs[2]);
    NORM_FACTOR_SCALE / perimeter
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SQUARE_REFS: [[f64; 2]; 3] = [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]];

    fn five_spots() -> Fingerprint {
        Fingerprint::from_spots(
            SQUARE_REFS,
            &[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0], [5.0, 5.0]],
        )
    }

    #[test]
    fn reference_points_are_prepended() {
        let f = five_spots();
        assert_eq!(f.len(), 8);
        assert_eq!(f.feature_count(), 5);
        assert_eq!(f.element(0).unwrap().centroid(), Point2D::new(0.0, 0.0));
        assert_eq!(f.element(2).unwrap().centroid(), Point2D::new(10.0, 10.0));
        assert_eq!(f.element(3).unwrap().centroid(), Point2D::new(1.0, 1.0));
        assert_eq!(f.element(7).unwrap().centroid(), Point2D::new(5.0, 5.0));
    }

    #[test]
    fn element_index_is_bounds_checked() {
        let f = five_spots();
        assert_eq!(
            f.element(8).unwrap_err(),
            FingerprintError::IndexOutOfRange { index: 8, len: 8 }
        );
    }

    #[test]
    fn norm_factor_uses_reference_perimeter() {
        let f = five_spots();
        let perimeter = 10.0 + 200.0f64.sqrt() + 10.0;
        assert_relative_eq!(f.norm_factor(), 10_000.0 / perimeter, max_relative = 1e-12);
    }

    #[test]
    fn invalid_feature_reports_its_index() {
        let features: Vec<Vec<[f64; 2]>> = vec![
            vec![[1.0, 1.0]],
            vec![[0.0, 0.0], [1.0, 0.0], [0.5, -1.0], [0.5, 1.0]],
            vec![[3.0, 3.0], [4.0, 4.0]],
        ];
        let err = Fingerprint::new(SQUARE_REFS, &features).unwrap_err();
        assert_eq!(
            err,
            FingerprintError::Element {
                feature: 2,
                source: ElementError::InvalidShape { got: 2 },
            }
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn mixed_spot_and_ellipse_features() {
        let features: Vec<Vec<[f64; 2]>> = vec![
            vec![[1.0, 1.0]],
            vec![[0.0, 0.0], [4.0, 0.0], [2.0, -1.0], [2.0, 1.0]],
        ];
        let f = Fingerprint::new(SQUARE_REFS, &features).unwrap();
        assert_eq!(f.len(), 5);
        assert_eq!(f.element(4).unwrap().centroid(), Point2D::new(2.0, 0.0));
        assert_eq!(f.to_flat_coords().len(), 2 * (3 + 1 + 4));
    }

    #[test]
    fn max_allowed_squared_distance_uses_longest_reference_edge() {
        let f = five_spots();
        // Longest edge is the diagonal: squared length 200.
        assert_relative_eq!(f.max_allowed_squared_distance(0.01), 2.0);
        assert_relative_eq!(f.max_allowed_squared_distance(1.0), 200.0);
    }

    #[test]
    fn transform_moves_references_but_keeps_norm_factor() {
        let mut f = five_spots();
        let before = f.norm_factor();
        let t = AffineTransform::new(2.0, 0.0, 1.0, 0.0, 2.0, -1.0);
        f.transform(Some(&t));
        assert_eq!(f.norm_factor(), before);
        assert_eq!(f.refs()[1], Point2D::new(21.0, -1.0));
        assert_eq!(f.element(1).unwrap().centroid(), Point2D::new(21.0, -1.0));
        assert_eq!(f.element(3).unwrap().centroid(), Point2D::new(3.0, 1.0));

        let snapshot = f.clone();
        f.transform(None);
        assert_eq!(f, snapshot);
    }

    #[test]
    fn clones_are_independent() {
        let original = five_spots();
        let mut copy = original.clone();
        copy.transform(Some(&AffineTransform::new(1.0, 0.0, 50.0, 0.0, 1.0, 0.0)));
        assert_eq!(original.element(3).unwrap().centroid(), Point2D::new(1.0, 1.0));
        assert_eq!(copy.element(3).unwrap().centroid(), Point2D::new(51.0, 1.0));
    }
}
