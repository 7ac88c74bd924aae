//! Declarative normalizer configuration
//!
//! A normalizer is fully described by its kind and one numeric parameter.
//! The same configuration shape drives both the float and the fixed-point
//! families, so it can be stored once and built in either domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five normalization curves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerKind {
    /// Always returns the parameter, ignoring the input
    Const,
    /// `input / max`
    Max,
    /// `min / input`
    ReverseMin,
    /// `x / (x + scale)`, equal to 0.5 at `input == scale`
    Sigmoid,
    /// `log2(input) / log2(max)`
    LogRatio,
}

impl fmt::Display for NormalizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NormalizerKind::Const => "const",
            NormalizerKind::Max => "max",
            NormalizerKind::ReverseMin => "reverse_min",
            NormalizerKind::Sigmoid => "sigmoid",
            NormalizerKind::LogRatio => "log_ratio",
        };
        f.write_str(name)
    }
}

/// Configuration for a single normalizer
///
/// `T` is `f64` for the float family and `u64` for the fixed-point family.
///
/// ```json
/// { "kind": "sigmoid", "param": 10 }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NormalizerConfig<T> {
    pub kind: NormalizerKind,
    pub param: T,
}

impl<T> NormalizerConfig<T> {
    pub fn new(kind: NormalizerKind, param: T) -> Self {
        Self { kind, param }
    }
}

impl NormalizerConfig<f64> {
    /// Validate the configuration
    /// - Sigmoid scale must be non-zero
    /// - Parameters must be finite
    /// - Only `Const` may carry a negative parameter
    pub fn validate(&self) -> Result<(), NormalizerError> {
        if !self.param.is_finite() {
            return Err(NormalizerError::InvalidParameter {
                kind: self.kind,
                value: self.param,
            });
        }
        if self.kind == NormalizerKind::Sigmoid && self.param == 0.0 {
            return Err(NormalizerError::ZeroScale);
        }
        if self.kind != NormalizerKind::Const && self.param < 0.0 {
            return Err(NormalizerError::InvalidParameter {
                kind: self.kind,
                value: self.param,
            });
        }
        Ok(())
    }
}

impl NormalizerConfig<u64> {
    /// Validate the configuration. Only a zero sigmoid scale is rejected.
    pub fn validate(&self) -> Result<(), NormalizerError> {
        if self.kind == NormalizerKind::Sigmoid && self.param == 0 {
            return Err(NormalizerError::ZeroScale);
        }
        Ok(())
    }
}

/// Errors that can occur while building a normalizer
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizerError {
    #[error("Sigmoid normalizer requires a non-zero scale")]
    ZeroScale,

    #[error("Invalid parameter for {kind} normalizer: {value}")]
    InvalidParameter { kind: NormalizerKind, value: f64 },
}
