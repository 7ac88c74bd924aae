//! Fixed-point normalizers
//!
//! The integer twin of [`crate::FloatNorm`]. Every curve is computed with
//! integer add, multiply and shift plus the exact wide ratio [`div`], so the
//! result is bit-identical on every platform. `LogRatio` is the one
//! exception: it takes a single float logarithm per call (see [`log2`]).

use crate::config::{NormalizerConfig, NormalizerError, NormalizerKind};
use crate::math::{div, log2};
use crate::Normalizer;

/// A fixed-point normalizer producing values in [0, `u64::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedNorm {
    kind: NormalizerKind,
    /// The configured parameter; for `LogRatio` this holds the scaled `log2(max)`.
    param: u64,
}

impl FixedNorm {
    /// Build a normalizer from a validated configuration.
    pub fn from_config(config: &NormalizerConfig<u64>) -> Result<Self, NormalizerError> {
        config.validate()?;
        Ok(match config.kind {
            NormalizerKind::Const => Self::constant(config.param),
            NormalizerKind::Max => Self::max(config.param),
            NormalizerKind::ReverseMin => Self::reverse_min(config.param),
            NormalizerKind::Sigmoid => Self::sigmoid(config.param)?,
            NormalizerKind::LogRatio => Self::log_ratio(config.param),
        })
    }

    /// Always returns `value`, which is already in the fixed-point domain.
    pub fn constant(value: u64) -> Self {
        Self { kind: NormalizerKind::Const, param: value }
    }

    pub fn max(max: u64) -> Self {
        Self { kind: NormalizerKind::Max, param: max }
    }

    pub fn reverse_min(min: u64) -> Self {
        Self { kind: NormalizerKind::ReverseMin, param: min }
    }

    pub fn sigmoid(scale: u64) -> Result<Self, NormalizerError> {
        if scale == 0 {
            return Err(NormalizerError::ZeroScale);
        }
        Ok(Self { kind: NormalizerKind::Sigmoid, param: scale })
    }

    pub fn log_ratio(max: u64) -> Self {
        let max_log = if max > 1 { log2(max) } else { 0 };
        Self { kind: NormalizerKind::LogRatio, param: max_log }
    }

    pub fn kind(&self) -> NormalizerKind {
        self.kind
    }
}

impl Normalizer for FixedNorm {
    type Value = u64;

    fn normalize(&self, w: u64) -> u64 {
        match self.kind {
            NormalizerKind::Const => self.param,
            NormalizerKind::Max => {
                if self.param == 0 {
                    0
                } else {
                    div(w, self.param)
                }
            }
            NormalizerKind::ReverseMin => {
                if w == 0 {
                    0
                } else {
                    div(self.param, w)
                }
            }
            NormalizerKind::Sigmoid => match w.checked_add(self.param) {
                Some(den) => div(w, den),
                // Halving both terms keeps the ratio and fits the sum in 64 bits.
                None => {
                    let half = w >> 1;
                    div(half, half + (self.param >> 1))
                }
            },
            NormalizerKind::LogRatio => {
                if self.param == 0 || w == 0 {
                    0
                } else {
                    div(log2(w), self.param)
                }
            }
        }
    }
}
