//! # HRW Core
//!
//! Core library for weighted rendezvous (highest random weight) hashing.
//!
//! Given a set of candidate items and a target key, every caller computes
//! the same preference order for that key without any coordination. Taking
//! the first `k` entries picks `k` nodes for an object, and membership
//! changes only move the keys that the added or removed node wins or loses.
//!
//! This crate provides:
//!
//! - [`hash`] - MurmurHash3 content hash for byte keys
//! - [`distance`] - avalanche mix of an item hash and a target hash
//! - [`rank`], [`rank_weighted`], [`rank_by_weight_fixed`] - rankings as
//!   lists of positions
//! - [`sort`], [`sort_weighted`], [`sort_by_weight_fixed`] - in-place
//!   reordering of the caller's items
//! - [`apply_ranking_direct`], [`apply_ranking_inverse`] - the swap-only
//!   permutation applier behind the in-place sorts
//!
//! ## Example
//!
//! ```rust
//! use hrw_core::{hash, sort, sort_weighted};
//!
//! let mut servers = vec![
//!     "one.example.com".to_string(),
//!     "two.example.com".to_string(),
//!     "three.example.com".to_string(),
//!     "four.example.com".to_string(),
//!     "five.example.com".to_string(),
//!     "six.example.com".to_string(),
//! ];
//!
//! let key = hash(b"/examples/object-key");
//! sort(&mut servers, &key);
//! assert_eq!(servers[0], "three.example.com");
//! assert_eq!(servers[5], "four.example.com");
//!
//! // Weights are relative preferences in [0.0, 1.0].
//! let mut nodes = vec![10u64, 20, 30];
//! sort_weighted(&mut nodes, &[1.0, 0.5, 0.5], &key).unwrap();
//! ```
//!
//! Everything here is a pure function: no global state, no locking and no
//! allocation retained between calls.

pub mod distance;
pub mod error;
pub mod hash;
pub mod permute;
pub mod rank;
pub mod sort;

pub use distance::{distance, fmix64};
pub use error::{Error, Result};
pub use hash::{hash, Hashable, Keyed};
pub use permute::{apply_ranking_direct, apply_ranking_inverse, validate_rule, SwapSequence, Swapper};
pub use rank::{distances, rank, rank_by_domain, rank_by_weight_fixed, rank_weighted, WeightDomain};
pub use sort::{
    identities, sort, sort_by_identity, sort_by_weight_fixed, sort_by_weight_fixed_normalized,
    sort_weighted, sort_weighted_by_identity, sort_weighted_normalized, validate_weights,
    NORMALIZED_MAX_WEIGHT, NORMALIZED_MIN_WEIGHT,
};
