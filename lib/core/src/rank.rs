//! Ranking engine
//!
//! Turns item identities and a target hash into a ranking: the list of item
//! positions ordered from most to least preferred. All sorts are stable, so
//! items with equal scores keep their input order and the output is fully
//! reproducible.
//!
//! Weighted ranking is generic over [`WeightDomain`]:
//!
//! - `f64`: `score = distance / weight`, lowest first
//! - `u64` (fixed-point): `score = weight * (u64::MAX - distance)` as an exact
//!   128-bit product, highest first
//!
//! In both domains a set of all-equal weights takes the unweighted path, so
//! uniform weights give exactly the same ranking as no weights at all.

use std::cmp::Reverse;

use hrw_normalizer::mul_wide;
use ordered_float::OrderedFloat;
use tracing::trace;

use crate::distance::distance;
use crate::error::{Error, Result};

/// A numeric domain that weights can be expressed in.
pub trait WeightDomain: Copy + PartialEq {
    /// Per-item score; ascending order is descending preference.
    type Score: Ord;

    fn score(self, distance: u64) -> Self::Score;
}

impl WeightDomain for f64 {
    type Score = OrderedFloat<f64>;

    /// Zero, negative and NaN weights rank last instead of dividing by zero.
    #[inline]
    fn score(self, distance: u64) -> Self::Score {
        if self > 0.0 {
            OrderedFloat(distance as f64 / self)
        } else {
            OrderedFloat(f64::INFINITY)
        }
    }
}

impl WeightDomain for u64 {
    type Score = Reverse<(u64, u64)>;

    /// `u64::MAX - distance` turns a short distance into a large value, and
    /// the full `(hi, lo)` product keeps every bit of it.
    #[inline]
    fn score(self, distance: u64) -> Self::Score {
        Reverse(mul_wide(self, u64::MAX - distance))
    }
}

/// Distances from every item hash to `target`.
pub fn distances(hashes: &[u64], target: u64) -> Vec<u64> {
    hashes.iter().map(|&h| distance(h, target)).collect()
}

/// Rank items by ascending distance to `target`.
///
/// `ranking[k]` is the input position of the item placed at rank `k`.
pub fn rank(hashes: &[u64], target: u64) -> Vec<usize> {
    let dist = distances(hashes, target);
    let mut ranking: Vec<usize> = (0..hashes.len()).collect();
    ranking.sort_by_key(|&i| dist[i]);
    ranking
}

/// Rank items by distance scaled with float weights.
///
/// Weights are expected to be normalized already (see
/// [`crate::validate_weights`]).
pub fn rank_weighted(hashes: &[u64], weights: &[f64], target: u64) -> Result<Vec<usize>> {
    rank_by_domain(hashes, weights, target)
}

/// Rank items by distance scaled with fixed-point weights.
///
/// Runs entirely in integer arithmetic, so the result is identical on every
/// platform.
pub fn rank_by_weight_fixed(hashes: &[u64], weights: &[u64], target: u64) -> Result<Vec<usize>> {
    check_shape(hashes.len(), weights.len())?;
    if all_same(hashes) {
        trace!(items = hashes.len(), "identical identities, ranking unweighted");
        return Ok(rank(hashes, target));
    }
    rank_by_domain(hashes, weights, target)
}

/// Weighted ranking shared by every [`WeightDomain`].
pub fn rank_by_domain<W: WeightDomain>(hashes: &[u64], weights: &[W], target: u64) -> Result<Vec<usize>> {
    check_shape(hashes.len(), weights.len())?;
    if all_same(weights) {
        trace!(items = hashes.len(), "uniform weights, ranking unweighted");
        return Ok(rank(hashes, target));
    }

    let scores: Vec<W::Score> = hashes
        .iter()
        .zip(weights)
        .map(|(&h, &w)| w.score(distance(h, target)))
        .collect();

    let mut ranking: Vec<usize> = (0..hashes.len()).collect();
    ranking.sort_by(|&a, &b| scores[a].cmp(&scores[b]));
    Ok(ranking)
}

pub(crate) fn check_shape(items: usize, weights: usize) -> Result<()> {
    if items != weights {
        return Err(Error::ShapeMismatch { items, weights });
    }
    Ok(())
}

fn all_same<T: PartialEq>(values: &[T]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash;
    use hrw_normalizer::from_float;

    fn target() -> u64 {
        hash(b"0xff51afd7ed558ccd")
    }

    #[test]
    fn test_rank_known_order() {
        assert_eq!(rank(&[1, 2, 3, 4, 5], target()), vec![3, 1, 4, 2, 0]);
    }

    #[test]
    fn test_rank_empty_and_single() {
        assert!(rank(&[], target()).is_empty());
        assert_eq!(rank(&[42], target()), vec![0]);
        assert_eq!(rank_weighted(&[], &[], target()).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_equal_distances_keep_input_order() {
        // Identical identities produce identical distances.
        assert_eq!(rank(&[7, 7, 7, 7], target()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_weighted_by_index() {
        let hashes: Vec<u64> = (0..6).collect();
        let weights = [1.0, 1.0, 1.0, 0.2, 0.2, 0.2];
        assert_eq!(rank_weighted(&hashes, &weights, target()).unwrap(), vec![0, 2, 1, 4, 5, 3]);
    }

    #[test]
    fn test_fixed_weighted_by_index() {
        let hashes: Vec<u64> = (0..6).collect();
        let weights: Vec<u64> = [1.0, 1.0, 1.0, 0.2, 0.2, 0.2].into_iter().map(from_float).collect();
        assert_eq!(rank_by_weight_fixed(&hashes, &weights, target()).unwrap(), vec![0, 2, 1, 4, 5, 3]);
    }

    #[test]
    fn test_fixed_weighted_graded() {
        let weights: Vec<u64> = [0.1, 0.2, 0.3, 0.4, 0.5].into_iter().map(from_float).collect();
        assert_eq!(
            rank_by_weight_fixed(&[1, 2, 3, 4, 5], &weights, target()).unwrap(),
            vec![3, 4, 1, 2, 0]
        );
    }

    #[test]
    fn test_uniform_weights_match_unweighted() {
        let hashes: Vec<u64> = (0..50).map(|i| hash(&[i as u8])).collect();
        let plain = rank(&hashes, target());
        for w in [0.0, 0.3, 1.0] {
            assert_eq!(rank_weighted(&hashes, &vec![w; 50], target()).unwrap(), plain);
        }
        for w in [0u64, 1, u64::MAX] {
            assert_eq!(rank_by_weight_fixed(&hashes, &vec![w; 50], target()).unwrap(), plain);
        }
    }

    #[test]
    fn test_identical_identities_fall_back() {
        let weights = [1u64, 2, 3];
        assert_eq!(rank_by_weight_fixed(&[9, 9, 9], &weights, target()).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_and_nan_weights_rank_last() {
        let hashes = [1u64, 2, 3, 4, 5];
        let weights = [0.5, 0.0, 0.5, f64::NAN, 0.5];
        let ranking = rank_weighted(&hashes, &weights, target()).unwrap();
        assert_eq!(&ranking[3..], &[1, 3]);
    }

    #[test]
    fn test_shape_mismatch() {
        assert_eq!(
            rank_weighted(&[1, 2, 3], &[1.0, 1.0], target()),
            Err(Error::ShapeMismatch { items: 3, weights: 2 })
        );
        assert_eq!(
            rank_by_weight_fixed(&[1, 2], &[1, 2, 3], target()),
            Err(Error::ShapeMismatch { items: 2, weights: 3 })
        );
    }

    #[test]
    fn test_higher_weight_never_loses_at_equal_distance() {
        // Same identity, so same distance: the heavier weight must come first.
        let ranking = rank_weighted(&[5, 6, 5], &[0.2, 0.5, 0.9], target()).unwrap();
        let pos = |i| ranking.iter().position(|&r| r == i).unwrap();
        assert!(pos(2) < pos(0));
    }
}
