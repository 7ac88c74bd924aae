//! In-place sorting of caller-owned items
//!
//! Each function ranks the items with the ranking engine and then reorders
//! the slice through the permutation applier. On error the slice is left
//! exactly as given.

use hrw_normalizer::Normalizer;

use crate::error::{Error, Result};
use crate::hash::Hashable;
use crate::permute::apply_inverse_unchecked;
use crate::rank::{rank, rank_by_weight_fixed, rank_weighted};

/// Lower bound of a normalized weight.
pub const NORMALIZED_MIN_WEIGHT: f64 = 0.0;
/// Upper bound of a normalized weight.
pub const NORMALIZED_MAX_WEIGHT: f64 = 1.0;

/// Collect the identity of every item.
pub fn identities<T: Hashable>(items: &[T]) -> Vec<u64> {
    items.iter().map(Hashable::hrw_hash).collect()
}

/// Reorder `items` by ascending distance to `target`.
pub fn sort<T, H>(items: &mut [T], target: &H)
where
    T: Hashable,
    H: Hashable + ?Sized,
{
    sort_by_identity(items, target.hrw_hash(), |_, item| item.hrw_hash());
}

/// Reorder `items` by distance scaled with normalized float weights.
///
/// `weights[i]` belongs to `items[i]`; a length mismatch is an error.
pub fn sort_weighted<T, H>(items: &mut [T], weights: &[f64], target: &H) -> Result<()>
where
    T: Hashable,
    H: Hashable + ?Sized,
{
    sort_weighted_by_identity(items, weights, target.hrw_hash(), |_, item| item.hrw_hash())
}

/// Like [`sort`], with each identity computed by `identity(position, item)`.
///
/// For items that are not [`Hashable`] themselves, or whose identity is
/// their position.
pub fn sort_by_identity<T, F>(items: &mut [T], target: u64, identity: F)
where
    F: FnMut(usize, &T) -> u64,
{
    let ranking = rank(&identities_by(items, identity), target);
    apply_inverse_unchecked(items, &ranking);
}

/// Like [`sort_weighted`], with each identity computed by
/// `identity(position, item)`.
pub fn sort_weighted_by_identity<T, F>(items: &mut [T], weights: &[f64], target: u64, identity: F) -> Result<()>
where
    F: FnMut(usize, &T) -> u64,
{
    let ranking = rank_weighted(&identities_by(items, identity), weights, target)?;
    apply_inverse_unchecked(items, &ranking);
    Ok(())
}

fn identities_by<T, F>(items: &[T], mut identity: F) -> Vec<u64>
where
    F: FnMut(usize, &T) -> u64,
{
    items.iter().enumerate().map(|(i, item)| identity(i, item)).collect()
}

/// Normalize raw float weights with `norm`, then [`sort_weighted`].
pub fn sort_weighted_normalized<N, T, H>(norm: &N, items: &mut [T], raw_weights: &[f64], target: &H) -> Result<()>
where
    N: Normalizer<Value = f64> + ?Sized,
    T: Hashable,
    H: Hashable + ?Sized,
{
    sort_weighted(items, &norm.normalize_all(raw_weights), target)
}

/// Reorder `items` by distance scaled with fixed-point weights.
pub fn sort_by_weight_fixed<T, H>(items: &mut [T], weights: &[u64], target: &H) -> Result<()>
where
    T: Hashable,
    H: Hashable + ?Sized,
{
    let ranking = rank_by_weight_fixed(&identities(items), weights, target.hrw_hash())?;
    apply_inverse_unchecked(items, &ranking);
    Ok(())
}

/// Normalize raw fixed-point weights with `norm`, then [`sort_by_weight_fixed`].
///
/// The caller's weight slice is not modified.
pub fn sort_by_weight_fixed_normalized<N, T, H>(
    norm: &N,
    items: &mut [T],
    raw_weights: &[u64],
    target: &H,
) -> Result<()>
where
    N: Normalizer<Value = u64> + ?Sized,
    T: Hashable,
    H: Hashable + ?Sized,
{
    sort_by_weight_fixed(items, &norm.normalize_all(raw_weights), target)
}

/// Check that every weight is a number in [0.0, 1.0].
///
/// Reports the first offending weight. Ranking functions never clamp, so
/// callers that skip this check get an unspecified order for such weights.
pub fn validate_weights(weights: &[f64]) -> Result<()> {
    for (index, &value) in weights.iter().enumerate() {
        if value.is_nan() || !(NORMALIZED_MIN_WEIGHT..=NORMALIZED_MAX_WEIGHT).contains(&value) {
            return Err(Error::NotNormalized { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::{hash, Keyed};
    use hrw_normalizer::{FixedNorm, FloatNorm};

    fn target() -> u64 {
        hash(b"0xff51afd7ed558ccd")
    }

    fn by_index(values: &[&'static str]) -> Vec<Keyed<&'static str>> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Keyed::new(i as u64, v))
            .collect()
    }

    fn by_value(values: &[&'static str]) -> Vec<Keyed<&'static str>> {
        values.iter().map(|&v| Keyed::from_bytes(v.as_bytes(), v)).collect()
    }

    fn values(items: Vec<Keyed<&'static str>>) -> Vec<&'static str> {
        items.into_iter().map(Keyed::into_value).collect()
    }

    const LETTERS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

    #[test]
    fn test_sort_identities() {
        let mut nodes = vec![1u64, 2, 3, 4, 5];
        sort(&mut nodes, &target());
        assert_eq!(nodes, vec![4, 2, 5, 3, 1]);
    }

    #[test]
    fn test_sort_by_index() {
        let mut items = by_index(&LETTERS);
        sort(&mut items, &target());
        assert_eq!(values(items), vec!["e", "a", "c", "f", "d", "b"]);
    }

    #[test]
    fn test_sort_by_value() {
        let mut items = by_value(&LETTERS);
        sort(&mut items, &target());
        assert_eq!(values(items), vec!["d", "f", "c", "b", "a", "e"]);

        let mut strings: Vec<String> = LETTERS.iter().map(|s| s.to_string()).collect();
        sort(&mut strings, "0xff51afd7ed558ccd".as_bytes());
        assert_eq!(strings, vec!["d", "f", "c", "b", "a", "e"]);
    }

    #[test]
    fn test_sort_weighted_by_index() {
        let mut items = by_index(&LETTERS);
        sort_weighted(&mut items, &[1.0, 1.0, 1.0, 0.2, 0.2, 0.2], &target()).unwrap();
        assert_eq!(values(items), vec!["a", "c", "b", "e", "f", "d"]);
    }

    #[test]
    fn test_sort_weighted_shape_mismatch_leaves_items() {
        let mut items = by_index(&LETTERS);
        let err = sort_weighted(&mut items, &[1.0, 0.5], &target()).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { items: 6, weights: 2 });
        assert_eq!(values(items), LETTERS.to_vec());
    }

    #[test]
    fn test_sort_weighted_normalized() {
        let norm = FloatNorm::max(10.0);
        let mut normalized = by_index(&LETTERS);
        sort_weighted_normalized(&norm, &mut normalized, &[10.0, 10.0, 10.0, 2.0, 2.0, 2.0], &target()).unwrap();
        assert_eq!(values(normalized), vec!["a", "c", "b", "e", "f", "d"]);
    }

    #[test]
    fn test_sort_by_weight_fixed_normalized() {
        let norm = FixedNorm::max(10);
        let raw = vec![10u64, 10, 10, 2, 2, 2];
        let mut nodes: Vec<u64> = (0..6).collect();
        sort_by_weight_fixed_normalized(&norm, &mut nodes, &raw, &target()).unwrap();
        assert_eq!(nodes, vec![0, 2, 1, 4, 5, 3]);
        assert_eq!(raw, vec![10, 10, 10, 2, 2, 2]);
    }

    #[test]
    fn test_sort_by_weight_fixed_shape_mismatch() {
        let mut nodes = vec![1u64, 2, 3];
        assert!(sort_by_weight_fixed(&mut nodes, &[1], &target()).is_err());
        assert_eq!(nodes, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_identity_position() {
        let mut letters = LETTERS.to_vec();
        sort_by_identity(&mut letters, target(), |i, _| i as u64);
        assert_eq!(letters, vec!["e", "a", "c", "f", "d", "b"]);

        let mut weighted = LETTERS.to_vec();
        sort_weighted_by_identity(&mut weighted, &[1.0, 1.0, 1.0, 0.2, 0.2, 0.2], target(), |i, _| i as u64)
            .unwrap();
        assert_eq!(weighted, vec!["a", "c", "b", "e", "f", "d"]);
    }

    #[test]
    fn test_sort_weighted_by_identity_mismatch_leaves_items() {
        let mut letters = LETTERS.to_vec();
        let err = sort_weighted_by_identity(&mut letters, &[1.0], target(), |i, _| i as u64).unwrap_err();
        assert_eq!(err, Error::ShapeMismatch { items: 6, weights: 1 });
        assert_eq!(letters, LETTERS.to_vec());
    }

    #[test]
    fn test_sort_is_deterministic() {
        let original: Vec<String> = (0..100).map(|i| format!("node-{i}")).collect();
        let mut first = original.clone();
        let mut second = original;
        sort(&mut first, "object-key");
        sort(&mut second, "object-key");
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_weights() {
        assert_eq!(
            validate_weights(&[10.0, 10.0, 10.0, 2.0, 2.0, 2.0]),
            Err(Error::NotNormalized { index: 0, value: 10.0 })
        );
        assert!(matches!(
            validate_weights(&[f64::NAN, 1.0, 1.0, 0.2, 0.2, 0.2]),
            Err(Error::NotNormalized { index: 0, .. })
        ));
        assert!(validate_weights(&[1.0, 1.0, 1.0, 0.2, 0.2, 0.2]).is_ok());
        assert!(validate_weights(&[]).is_ok());
        assert!(validate_weights(&[0.5, -0.1]).is_err());
    }
}
