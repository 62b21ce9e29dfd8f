//! Fingerprint comparison: reference alignment followed by exhaustive refinement.
//!
//! ## Algorithm
//!
//! 1. **Reference alignment** – derive the affine transform that maps the
//!    first fingerprint's reference triangle onto the second's and apply it to
//!    a working copy.
//!
//! 2. **Initial correspondence** – score the aligned copy against the target
//!    with the reference pair correction. The accepted pairs seed the search.
//!
//! 3. **Exhaustive search** – every triple of initial pairs (`j < k < l`)
//!    defines a candidate transform from the three source centroids to the
//!    three target centroids. Degenerate triples are skipped; every other
//!    candidate is applied to a fresh copy and rescored. The strictly lowest
//!    score wins, so ties keep the earliest triple.

mod search;


use crate::affine::AffineTransform;
use crate::config::{MatchConfig, REFERENCE_PAIR_CORRECTION};
use crate::fingerprint::{DistanceResult, Fingerprint, FingerprintError, Pair};

pub use search::SearchStats;

/// Final outcome of a fingerprint comparison.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchResult {
    /// Best score found; lower is better.
    pub score: f64,
    /// Score of the correspondence the search started from.
    pub initial_score: f64,
    /// Number of target-unique pairs behind `score`.
    pub pair_count: usize,
    /// Winning correspondence, sorted by target index.
    pub pairs: Vec<Pair>,
    /// Transform from the source fingerprint's frame to the target's that
    /// produced `score`, if any was solvable.
    pub transform: Option<AffineTransform>,
    pub stats: SearchStats,
}

/// Compares fingerprints under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Full comparison of `f1` against `f2`. Neither input is modified.
    pub fn compare_two(&self, f1: &Fingerprint, f2: &Fingerprint) -> MatchResult {
        let reference = AffineTransform::from_correspondences(*f1.refs(), *f2.refs());
        if reference.is_none() {
            tracing::warn!(
                "compare: reference points are collinear, scoring without alignment"
            );
        }

        let mut aligned = f1.clone();
        aligned.transform(reference.as_ref());
        let initial = aligned.distance(f2, REFERENCE_PAIR_CORRECTION, &self.config);
        tracing::debug!(
            initial_score = initial.score,
            n_pairs = initial.pair_count,
            n_source = f1.len(),
            n_target = f2.len(),
            "compare: reference alignment scored"
        );

        let mut result = self.search(&aligned, f2, initial);
        result.transform = match (reference, result.transform) {
            (Some(r), Some(refined)) => Some(r.then(&refined)),
            (r, refined) => refined.or(r),
        };
        result
    }

    /// Shorthand for `compare_two(f1, f2).score`.
    pub fn score(&self, f1: &Fingerprint, f2: &Fingerprint) -> f64 {
        self.compare_two(f1, f2).score
    }

    /// Refine `initial` (a correspondence between `f1` and `f2`, with `f1`
    /// already aligned to `f2`) by trying every triple of its pairs as an
    /// alignment basis.
    ///
    /// The returned transform, if any, maps `f1` as given onto `f2`'s frame.
    /// Fails if a pair references an element outside either fingerprint.
    pub fn exhaustive_search(
        &self,
        f1: &Fingerprint,
        f2: &Fingerprint,
        initial: DistanceResult,
    ) -> Result<MatchResult, FingerprintError> {
        for pair in &initial.pairs {
            f1.element(pair.source)?;
            f2.element(pair.target)?;
        }
        Ok(self.search(f1, f2, initial))
    }

    fn search(&self, f1: &Fingerprint, f2: &Fingerprint, initial: DistanceResult) -> MatchResult {
        search::exhaustive(f1, f2, initial, &self.config)
    }
}
