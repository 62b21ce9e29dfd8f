//! Matching configuration and algorithm constants.

/// Scale applied in the normalization factor `NORM_FACTOR_SCALE / perimeter`.
///
/// Chosen so that good matches land roughly in the 0–20 score range.
pub const NORM_FACTOR_SCALE: f64 = 10_000.0;

/// Score reported when no usable correspondence exists.
pub const DEGENERATE_SCORE: f64 = 1_000_000.0;

/// Initial nearest / second-nearest squared distance during the neighbour scan.
pub const SEARCH_SENTINEL_SQR_DIST: f64 = 1.0e9;

/// Score multipliers for effective pair counts 1, 2 and 3.
pub const LOW_PAIR_PENALTY: [f64; 3] = [4.0, 3.0, 2.0];

/// Pair-count correction used when scoring aligned fingerprints: the three
/// reference pairs match trivially and must not count as evidence.
pub const REFERENCE_PAIR_CORRECTION: i64 = -3;

/// Tuning for correspondence scoring and the exhaustive search.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Admission radius as a fraction of the largest squared distance between
    /// reference points. Squared, so `0.01` admits pairs within 10% of the
    /// reference triangle's span.
    pub max_allowed_distance: f64,
    /// Ambiguity gate: a nearest neighbour is accepted only if
    /// `nearest² * min_relative_distance <= second_nearest²`.
    pub min_relative_distance: f64,
    /// Optional cap on the number of candidate triples visited by the
    /// exhaustive search (in `j < k < l` order).
    pub max_triples: Option<usize>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_allowed_distance: 0.01,
            min_relative_distance: 0.7,
            max_triples: None,
        }
    }
}
