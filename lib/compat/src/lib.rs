//! # HRW Compat
//!
//! Slice adapters for callers that hold plain values instead of
//! [`hrw_core::Hashable`] items.
//!
//! The element identity is derived from the element itself:
//!
//! - **by index**: the position in the slice (`0, 1, 2, ...`)
//! - **by hashed index**: the content hash of the little-endian position
//! - **by value**: a [`ValueKey`] surrogate of the element
//! - **by hasher**: the element's own [`hrw_core::Hashable`] implementation
//!
//! These adapters keep the forgiving contract of earlier releases: a weight
//! slice whose length differs from the item slice leaves the items untouched
//! and only logs a warning. New code should call [`hrw_core`] directly and
//! handle the error.
//!
//! ## Example
//!
//! ```rust
//! use hrw_compat::sort_slice_by_value;
//! use hrw_core::hash;
//!
//! let mut shards = vec![1u64, 2, 3, 4, 5];
//! sort_slice_by_value(&mut shards, hash(b"user:42"));
//! ```

pub mod key;

use hrw_core::{sort_by_identity, sort_weighted_by_identity, Hashable, Result};
use tracing::warn;

pub use key::{hashed_index_key, ValueKey};

/// Reorder `slice` using each element's position as its identity.
pub fn sort_slice_by_index<T>(slice: &mut [T], target: u64) {
    sort_by_identity(slice, target, |i, _| i as u64);
}

/// Reorder `slice` using the hash of each element's position as its identity.
///
/// Spreads small index sets better than [`sort_slice_by_index`], at the cost
/// of one hash per element.
pub fn sort_slice_by_hashed_index<T>(slice: &mut [T], target: u64) {
    sort_by_identity(slice, target, |i, _| hashed_index_key(i));
}

/// Weighted variant of [`sort_slice_by_index`].
pub fn sort_slice_by_weight_index<T>(slice: &mut [T], weights: &[f64], target: u64) {
    warn_unsorted(sort_weighted_by_identity(slice, weights, target, |i, _| i as u64));
}

/// Reorder `slice` using each element's [`ValueKey`] as its identity.
pub fn sort_slice_by_value<T: ValueKey>(slice: &mut [T], target: u64) {
    sort_by_identity(slice, target, |_, item| item.value_key());
}

/// Weighted variant of [`sort_slice_by_value`].
pub fn sort_slice_by_weight_value<T: ValueKey>(slice: &mut [T], weights: &[f64], target: u64) {
    warn_unsorted(sort_weighted_by_identity(slice, weights, target, |_, item| item.value_key()));
}

/// Reorder `slice` using each element's [`Hashable`] identity.
pub fn sort_slice_by_hasher<T: Hashable>(slice: &mut [T], target: u64) {
    hrw_core::sort(slice, &target);
}

/// Weighted variant of [`sort_slice_by_hasher`].
pub fn sort_slice_by_weight_hasher<T: Hashable>(slice: &mut [T], weights: &[f64], target: u64) {
    warn_unsorted(hrw_core::sort_weighted(slice, weights, &target));
}

/// The only failure left after ranking is a weight shape mismatch, and the
/// core leaves the slice untouched in that case.
fn warn_unsorted(result: Result<()>) {
    if let Err(err) = result {
        warn!(error = %err, "slice left unsorted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrw_core::hash;

    const LETTERS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

    fn target() -> u64 {
        hash(b"0xff51afd7ed558ccd")
    }

    fn letters() -> Vec<&'static str> {
        LETTERS.to_vec()
    }

    #[test]
    fn test_by_index() {
        let mut actual = letters();
        sort_slice_by_index(&mut actual, target());
        assert_eq!(actual, vec!["e", "a", "c", "f", "d", "b"]);
    }

    #[test]
    fn test_by_hashed_index() {
        let mut actual = letters();
        sort_slice_by_hashed_index(&mut actual, target());
        assert_eq!(actual, vec!["d", "c", "a", "e", "b", "f"]);
    }

    #[test]
    fn test_by_weight_index() {
        let mut actual = letters();
        sort_slice_by_weight_index(&mut actual, &[1.0, 1.0, 1.0, 0.2, 0.2, 0.2], target());
        assert_eq!(actual, vec!["a", "c", "b", "e", "f", "d"]);
    }

    #[test]
    fn test_by_value_strings() {
        let mut actual = letters();
        sort_slice_by_value(&mut actual, target());
        assert_eq!(actual, vec!["d", "f", "c", "b", "a", "e"]);

        let mut owned: Vec<String> = LETTERS.iter().map(|s| s.to_string()).collect();
        sort_slice_by_value(&mut owned, target());
        assert_eq!(owned, vec!["d", "f", "c", "b", "a", "e"]);
    }

    #[test]
    fn test_by_weight_value() {
        let mut actual = letters();
        sort_slice_by_weight_value(&mut actual, &[1.0, 1.0, 1.0, 0.2, 0.2, 0.2], target());
        assert_eq!(actual, vec!["c", "d", "b", "a", "f", "e"]);
    }

    #[test]
    fn test_by_value_integers() {
        macro_rules! check {
            ($ty:ty, $expected:expr) => {
                let mut actual: Vec<$ty> = (0..6).map(|i| i as $ty).collect();
                sort_slice_by_value(&mut actual, target());
                let expected: Vec<$ty> = $expected.iter().map(|&i: &i32| i as $ty).collect();
                assert_eq!(actual, expected, "{}", stringify!($ty));
            };
        }

        check!(isize, [2, 0, 5, 3, 1, 4]);
        check!(usize, [2, 0, 5, 3, 1, 4]);
        check!(i8, [5, 2, 1, 4, 0, 3]);
        check!(u8, [5, 2, 1, 4, 0, 3]);
        check!(i16, [1, 0, 3, 2, 4, 5]);
        check!(u16, [1, 0, 3, 2, 4, 5]);
        check!(i32, [5, 1, 2, 0, 3, 4]);
        check!(u32, [5, 1, 2, 0, 3, 4]);
        check!(i64, [5, 3, 0, 1, 4, 2]);
        check!(u64, [5, 3, 0, 1, 4, 2]);
    }

    #[test]
    fn test_by_hasher_matches_core() {
        let mut actual = vec![1u64, 2, 3, 4, 5];
        sort_slice_by_hasher(&mut actual, target());
        assert_eq!(actual, vec![4, 2, 5, 3, 1]);

        let mut weighted = vec![1u64, 2, 3, 4, 5];
        let mut expected = weighted.clone();
        let weights = [0.1, 0.2, 0.3, 0.4, 0.5];
        sort_slice_by_weight_hasher(&mut weighted, &weights, target());
        hrw_core::sort_weighted(&mut expected, &weights, &target()).unwrap();
        assert_eq!(weighted, expected);
    }

    #[test]
    fn test_weight_mismatch_is_noop() {
        let mut actual = letters();
        sort_slice_by_weight_index(&mut actual, &[1.0, 0.5], target());
        assert_eq!(actual, letters());

        sort_slice_by_weight_value(&mut actual, &[], target());
        assert_eq!(actual, letters());

        let mut nodes = vec![1u64, 2, 3];
        sort_slice_by_weight_hasher(&mut nodes, &[1.0], target());
        assert_eq!(nodes, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<u32> = Vec::new();
        sort_slice_by_value(&mut empty, target());
        sort_slice_by_index(&mut empty, target());
        assert!(empty.is_empty());

        let mut single = vec!["only"];
        sort_slice_by_hashed_index(&mut single, target());
        assert_eq!(single, vec!["only"]);
    }
}
