use super::Pair;

/// Make pair targets unique: when two pairs claim the same target element,
/// keep the one with the smaller distance (ties keep the lower source index)
/// and subtract the dropped pair's distance from `total_distance`.
///
/// Leaves `pairs` sorted by target index. Returns the number of pairs removed.
pub fn filter_out_duplicate_pairs(pairs: &mut Vec<Pair>, total_distance: &mut f64) -> usize {
    let mut removed = 0usize;
    loop {
        pairs.sort_by_key(|p| p.target);
        let Some(k) = pairs.windows(2).position(|w| w[0].target == w[1].target) else {
            break;
        };
        let drop = if pairs[k].distance <= pairs[k + 1].distance {
            k + 1
        } else {
            k
        };
        *total_distance -= pairs.remove(drop).distance;
        removed += 1;
    }
    removed
}
