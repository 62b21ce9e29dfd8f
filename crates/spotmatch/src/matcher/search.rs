use crate::affine::AffineTransform;
use crate::config::{MatchConfig, REFERENCE_PAIR_CORRECTION};
use crate::fingerprint::{DistanceResult, Fingerprint, Pair};

use super::MatchResult;

/// Bookkeeping for one exhaustive search.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchStats {
    /// `C(n, 3)` for `n` seed pairs.
    pub n_triples_total: usize,
    /// Triples whose transform was applied and rescored.
    pub n_triples_evaluated: usize,
    /// Triples skipped because no affine transform exists for them.
    pub n_triples_skipped: usize,
    /// Times a triple beat the best score so far.
    pub n_improvements: usize,
    /// True if `max_triples` stopped the search before all triples were visited.
    pub truncated: bool,
}

fn n_choose_3(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        n * (n - 1) * (n - 2) / 6
    }
}

/// Transform mapping the three source centroids of `triple` onto their targets.
///
/// Pair indices must be valid for `f1` (sources) and `f2` (targets).
fn triple_transform(
    f1: &Fingerprint,
    f2: &Fingerprint,
    triple: [&Pair; 3],
) -> Option<AffineTransform> {
    let from = triple.map(|p| f1.elements()[p.source].centroid());
    let to = triple.map(|p| f2.elements()[p.target].centroid());
    AffineTransform::from_correspondences(from, to)
}

pub(super) fn exhaustive(
    f1: &Fingerprint,
    f2: &Fingerprint,
    initial: DistanceResult,
    config: &MatchConfig,
) -> MatchResult {
    let seeds = &initial.pairs;
    let n = seeds.len();
    let mut stats = SearchStats {
        n_triples_total: n_choose_3(n),
        ..SearchStats::default()
    };
    let mut best: Option<(DistanceResult, AffineTransform)> = None;
    let mut best_score = initial.score;
    let mut visited = 0usize;

    'search: for j in 0..n {
        for k in j + 1..n {
            for l in k + 1..n {
                if config.max_triples.is_some_and(|limit| visited >= limit) {
                    stats.truncated = true;
                    break 'search;
                }
                visited += 1;

                let Some(affine) = triple_transform(f1, f2, [&seeds[j], &seeds[k], &seeds[l]])
                else {
                    stats.n_triples_skipped += 1;
                    continue;
                };

                let mut candidate = f1.clone();
                candidate.transform(Some(&affine));
                let result = candidate.distance(f2, REFERENCE_PAIR_CORRECTION, config);
                stats.n_triples_evaluated += 1;

                if result.score < best_score {
                    tracing::trace!(
                        j,
                        k,
                        l,
                        score = result.score,
                        n_pairs = result.pair_count,
                        "exhaustive_search: improved"
                    );
                    best_score = result.score;
                    best = Some((result, affine));
                    stats.n_improvements += 1;
                }
            }
        }
    }

    tracing::debug!(
        initial_score = initial.score,
        best_score,
        n_seeds = n,
        n_evaluated = stats.n_triples_evaluated,
        n_skipped = stats.n_triples_skipped,
        n_improvements = stats.n_improvements,
        truncated = stats.truncated,
        "exhaustive_search: done"
    );

    let initial_score = initial.score;
    let (winner, transform) = match best {
        Some((result, affine)) => (result, Some(affine)),
        None => (initial, None),
    };
    MatchResult {
        score: winner.score,
        initial_score,
        pair_count: winner.pair_count,
        pairs: winner.pairs,
        transform,
        stats,
    }
}
