//! Float normalizers
//!
//! Map raw `f64` weights into the canonical [0.0, 1.0] preference range.

use crate::config::{NormalizerConfig, NormalizerError, NormalizerKind};
use crate::Normalizer;

/// A float-domain normalizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatNorm {
    kind: NormalizerKind,
    /// The configured parameter; for `LogRatio` this holds `log2(max)`.
    param: f64,
}

impl FloatNorm {
    /// Build a normalizer from a validated configuration.
    pub fn from_config(config: &NormalizerConfig<f64>) -> Result<Self, NormalizerError> {
        config.validate()?;
        Ok(match config.kind {
            NormalizerKind::Const => Self::constant(config.param),
            NormalizerKind::Max => Self::max(config.param),
            NormalizerKind::ReverseMin => Self::reverse_min(config.param),
            NormalizerKind::Sigmoid => Self::sigmoid(config.param)?,
            NormalizerKind::LogRatio => Self::log_ratio(config.param),
        })
    }

    /// Always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self { kind: NormalizerKind::Const, param: value }
    }

    /// `w / max`; returns 0 for every input when `max` is 0.
    pub fn max(max: f64) -> Self {
        Self { kind: NormalizerKind::Max, param: max }
    }

    /// `min / w`; returns 0 for a zero input.
    pub fn reverse_min(min: f64) -> Self {
        Self { kind: NormalizerKind::ReverseMin, param: min }
    }

    /// `w / (w + scale)`.
    ///
    /// The scale must be positive and finite; anything else is rejected the
    /// same way [`NormalizerConfig::validate`] rejects it.
    pub fn sigmoid(scale: f64) -> Result<Self, NormalizerError> {
        NormalizerConfig::new(NormalizerKind::Sigmoid, scale).validate()?;
        Ok(Self { kind: NormalizerKind::Sigmoid, param: scale })
    }

    /// `log2(w) / log2(max)`; returns 0 for every input when `max <= 1`
    /// and for `w == 0`. Inputs in (0, 1) have a negative logarithm and
    /// yield a negative value.
    pub fn log_ratio(max: f64) -> Self {
        let max_log = if max > 1.0 { max.log2() } else { 0.0 };
        Self { kind: NormalizerKind::LogRatio, param: max_log }
    }

    pub fn kind(&self) -> NormalizerKind {
        self.kind
    }
}

impl Normalizer for FloatNorm {
    type Value = f64;

    fn normalize(&self, w: f64) -> f64 {
        match self.kind {
            NormalizerKind::Const => self.param,
            NormalizerKind::Max => {
                if self.param == 0.0 {
                    0.0
                } else {
                    w / self.param
                }
            }
            NormalizerKind::ReverseMin => {
                if w == 0.0 {
                    0.0
                } else {
                    self.param / w
                }
            }
            NormalizerKind::Sigmoid => {
                // Dividing first keeps w + scale from overflowing near f64::MAX.
                let x = w / self.param;
                if x.is_infinite() {
                    1.0
                } else {
                    x / (1.0 + x)
                }
            }
            NormalizerKind::LogRatio => {
                if self.param == 0.0 || w == 0.0 {
                    0.0
                } else {
                    w.log2() / self.param
                }
            }
        }
    }
}
