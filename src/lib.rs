//! # hrw
//!
//! Weighted rendezvous (highest random weight) hashing.
//!
//! Every node is scored against an object key and the object belongs to the
//! best-scoring nodes. Clients agree on placement without talking to each
//! other, and adding or removing a node only moves the keys that node wins
//! or loses.
//!
//! ## Quick Start
//!
//! ```rust
//! use hrw::prelude::*;
//!
//! let mut nodes = vec!["cache-a".to_string(), "cache-b".to_string(), "cache-c".to_string()];
//! let key = hash(b"/users/42/avatar.png");
//!
//! // Unweighted: nodes[0] is now the owner of the key.
//! sort(&mut nodes, &key);
//!
//! // Weighted with raw capacities, normalized on the fly.
//! let capacity = FixedNorm::max(64);
//! let mut shards: Vec<u64> = (0..4).collect();
//! sort_by_weight_fixed_normalized(&capacity, &mut shards, &[64, 32, 32, 8], &key)?;
//! # Ok::<(), hrw::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! hrw is composed of several crates:
//!
//! - [`hrw-core`](https://docs.rs/hrw-core) - Distance, content hash, ranking engine and permutation applier
//! - [`hrw-normalizer`](https://docs.rs/hrw-normalizer) - Float and fixed-point weight normalizers
//! - [`hrw-compat`](https://docs.rs/hrw-compat) - Slice adapters ranking by index or by value
//!
//! ## Features
//!
//! - **Deterministic**: identical inputs give identical order on every platform
//! - **Fixed-point weights**: integer-only weighted ranking
//! - **In-place**: rankings are applied with swaps, no element copies
//! - **Declarative normalizers**: serde-friendly [`NormalizerConfig`]

// Re-export core
pub use hrw_core::{
    apply_ranking_direct, apply_ranking_inverse, distance, fmix64, hash, identities, rank,
    rank_by_domain, rank_by_weight_fixed, rank_weighted, sort, sort_by_identity,
    sort_by_weight_fixed, sort_by_weight_fixed_normalized, sort_weighted,
    sort_weighted_by_identity, sort_weighted_normalized, validate_rule, validate_weights, Error,
    Hashable, Keyed, Result, SwapSequence, Swapper, WeightDomain, NORMALIZED_MAX_WEIGHT,
    NORMALIZED_MIN_WEIGHT,
};

// Re-export normalizers
pub use hrw_normalizer::{
    FixedNorm, FloatNorm, Normalizer, NormalizerConfig, NormalizerError, NormalizerKind,
};

/// Fixed-point arithmetic shared by the normalizers and the ranking engine
pub mod fixed {
    pub use hrw_normalizer::{div, div_wide, from_float, mul_wide, to_float, FIXED_ONE};
}

/// Slice adapters deriving identities from positions or values
pub mod compat {
    pub use hrw_compat::{
        sort_slice_by_hashed_index, sort_slice_by_hasher, sort_slice_by_index,
        sort_slice_by_value, sort_slice_by_weight_hasher, sort_slice_by_weight_index,
        sort_slice_by_weight_value, ValueKey,
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        apply_ranking_inverse, hash, rank, rank_by_weight_fixed, rank_weighted, sort,
        sort_by_weight_fixed, sort_by_weight_fixed_normalized, sort_weighted,
        sort_weighted_normalized, validate_weights, Error, FixedNorm, FloatNorm, Hashable,
        Keyed, Normalizer, NormalizerConfig, NormalizerKind, Result,
    };
}
