//! Nearest-neighbour correspondence and match scoring.
//!
//! For every element of one fingerprint the closest element of the other is
//! found. A candidate pair is accepted when it is unambiguous (the runner-up
//! is sufficiently farther away) and within the admission radius derived from
//! the reference triangle. Accepted pairs are made target-unique, and the
//! summed pair distance is turned into a score that is normalized by the
//! reference geometry, penalized for low pair counts, and penalized for
//! unpaired elements.

use crate::config::{
    MatchConfig, DEGENERATE_SCORE, LOW_PAIR_PENALTY, SEARCH_SENTINEL_SQR_DIST,
};

use super::{filter_out_duplicate_pairs, Fingerprint};

/// Tentative correspondence between element `source` of one fingerprint and
/// element `target` of another.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pair {
    pub source: usize,
    pub target: usize,
    /// Centroid distance after alignment.
    pub distance: f64,
}

/// Outcome of [`Fingerprint::distance`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DistanceResult {
    /// Lower is better; [`DEGENERATE_SCORE`] when no usable correspondence exists.
    pub score: f64,
    /// Number of accepted, target-unique pairs.
    pub pair_count: usize,
    /// Accepted pairs sorted by target index.
    pub pairs: Vec<Pair>,
}

impl Fingerprint {
    /// Score the correspondence between `self` (already aligned to `other`'s
    /// frame) and `other`.
    ///
    /// `affine_correction` is added to the pair count before scoring; pass
    /// [`crate::config::REFERENCE_PAIR_CORRECTION`] when the reference points were
    /// used to align the fingerprints and therefore match trivially.
    pub fn distance(
        &self,
        other: &Fingerprint,
        affine_correction: i64,
        config: &MatchConfig,
    ) -> DistanceResult {
        let max_sqr_dist = self.max_allowed_squared_distance(config.max_allowed_distance);
        let mut total_distance = 0.0f64;
        let mut pairs = Vec::new();

        for (i, from) in self.elements.iter().enumerate() {
            let mut min_sqr_dist = SEARCH_SENTINEL_SQR_DIST;
            let mut second_sqr_dist = SEARCH_SENTINEL_SQR_DIST;
            let mut min_j = None;

            for (j, to) in other.elements.iter().enumerate() {
                if !from.matches(to) {
                    continue;
                }
                let sqr_dist = from.squared_distance(to);
                if sqr_dist < min_sqr_dist {
                    second_sqr_dist = min_sqr_dist;
                    min_sqr_dist = sqr_dist;
                    min_j = Some(j);
                } else if sqr_dist < second_sqr_dist {
                    second_sqr_dist = sqr_dist;
                }
            }

            let Some(j) = min_j else {
                continue;
            };
            let unambiguous = min_sqr_dist * config.min_relative_distance <= second_sqr_dist;
            if unambiguous && min_sqr_dist < max_sqr_dist {
                let distance = min_sqr_dist.sqrt();
                total_distance += distance * from.similarity(&other.elements[j]);
                pairs.push(Pair {
                    source: i,
                    target: j,
                    distance,
                });
            }
        }

        filter_out_duplicate_pairs(&mut pairs, &mut total_distance);

        let score = pair_score(
            total_distance,
            pairs.len(),
            affine_correction,
            other.norm_factor,
            self.len() + other.len(),
        );
        DistanceResult {
            score,
            pair_count: pairs.len(),
            pairs,
        }
    }
}

/// Extra multiplier for small effective pair counts (1.0 from four pairs up).
pub fn low_pair_penalty(effective_pairs: i64) -> f64 {
    match effective_pairs {
        1..=3 => LOW_PAIR_PENALTY[(effective_pairs - 1) as usize],
        _ => 1.0,
    }
}

pub(crate) fn pair_score(
    total_distance: f64,
    n_pairs: usize,
    affine_correction: i64,
    norm_factor: f64,
    n_elements: usize,
) -> f64 {
    let effective = n_pairs as i64 + affine_correction;
    // A positive correction with no real pairs would zero the paired ratio.
    if effective <= 0 || n_pairs == 0 {
        return DEGENERATE_SCORE;
    }
    let mut score = (norm_factor * total_distance) / (effective * effective) as f64;
    score *= low_pair_penalty(effective);

    // Unpaired elements: the ratio is below 1, so dividing inflates the score.
    let not_paired_ratio = (2.0 * n_pairs as f64) / n_elements as f64;
    score / (not_paired_ratio * not_paired_ratio)
}
