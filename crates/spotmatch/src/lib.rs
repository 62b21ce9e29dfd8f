//! spotmatch: affine-aligned matching of spot-pattern fingerprints.
//!
//! A fingerprint is three reference points plus a set of feature spots (or
//! ellipse-shaped features) annotated on a photograph of an animal. Two
//! fingerprints are compared in three stages:
//!
//! 1. **Alignment** – the affine transform that maps one reference triangle
//!    onto the other brings both fingerprints into a common frame.
//! 2. **Scoring** – unambiguous nearest-neighbour pairs within an admission
//!    radius are collected, made target-unique, and summarized as a
//!    normalized, penalized distance score (lower is better).
//! 3. **Refinement** – every triple of initial pairs proposes a new transform;
//!    the best-scoring one wins.
//!
//! # Public API
//! - [`Fingerprint`] and [`Matcher`] as primary entry points
//! - [`MatchConfig`] for tuning admission and ambiguity thresholds
//! - [`MatchResult`] / [`DistanceResult`] with the accepted [`Pair`]s
//! - [`AffineTransform`] and [`solve_3x3`] for the underlying geometry

mod affine;
mod config;
mod element;
mod fingerprint;
mod matcher;
mod point;

#[cfg(test)]
pub(crate) mod test_utils;

pub use affine::{solve_3x3, AffineTransform};
pub use config::{
    MatchConfig, DEGENERATE_SCORE, LOW_PAIR_PENALTY, NORM_FACTOR_SCALE,
    REFERENCE_PAIR_CORRECTION, SEARCH_SENTINEL_SQR_DIST,
};
pub use element::{within_ratio, Element, ElementError, ElementKind, RESET_AREA, RESET_SHAPE};
pub use fingerprint::{
    filter_out_duplicate_pairs, low_pair_penalty, DistanceResult, Fingerprint, FingerprintError,
    Pair, REFERENCE_COUNT,
};
pub use matcher::{MatchResult, Matcher, SearchStats};
pub use point::{Point2D, UNSET_COORD};
