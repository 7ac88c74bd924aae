//! # HRW Normalizer
//!
//! Converts raw, unbounded weights into the canonical [0, 1] preference range
//! used by weighted rendezvous hashing.
//!
//! Two families implement the same five curves:
//!
//! - [`FloatNorm`] works on `f64` and returns values in [0.0, 1.0]
//! - [`FixedNorm`] works on `u64` and returns values in [0, `u64::MAX`],
//!   bit-identical across platforms
//!
//! For every input in a curve's domain the two agree within `1e-6` once the
//! fixed-point result is mapped back with [`to_float`].
//!
//! ## Example
//!
//! ```rust
//! use hrw_normalizer::{FixedNorm, FloatNorm, Normalizer, to_float};
//!
//! let float = FloatNorm::sigmoid(10.0).unwrap();
//! let fixed = FixedNorm::sigmoid(10).unwrap();
//!
//! assert_eq!(float.normalize(10.0), 0.5);
//! assert!((to_float(fixed.normalize(10)) - 0.5).abs() < 1e-6);
//! ```
//!
//! ## Curves
//!
//! | Kind         | Formula                     | Degenerate case            |
//! |--------------|-----------------------------|----------------------------|
//! | `Const`      | `v`                         | -                          |
//! | `Max`        | `w / max`                   | `max == 0` returns 0       |
//! | `ReverseMin` | `min / w`                   | `w == 0` returns 0         |
//! | `Sigmoid`    | `w / (w + scale)`           | `scale == 0` is rejected   |
//! | `LogRatio`   | `log2(w) / log2(max)`       | `w == 0`, `max <= 1` give 0|

pub mod config;
pub mod fixed;
pub mod float;
pub mod math;

pub use config::{NormalizerConfig, NormalizerError, NormalizerKind};
pub use fixed::FixedNorm;
pub use float::FloatNorm;
pub use math::{div, div_wide, from_float, mul_wide, to_float, FIXED_ONE};

/// Maps a raw weight to a normalized preference value.
///
/// Implemented by both families so ranking code can stay generic over the
/// numeric domain.
pub trait Normalizer {
    type Value: Copy;

    fn normalize(&self, weight: Self::Value) -> Self::Value;

    /// Normalize every weight, returning a new vector.
    fn normalize_all(&self, weights: &[Self::Value]) -> Vec<Self::Value> {
        weights.iter().map(|&w| self.normalize(w)).collect()
    }
}

impl<N: Normalizer + ?Sized> Normalizer for &N {
    type Value = N::Value;

    fn normalize(&self, weight: Self::Value) -> Self::Value {
        (**self).normalize(weight)
    }
}
