use hrw_normalizer::NormalizerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Weights length mismatch: {items} items, {weights} weights")]
    ShapeMismatch { items: usize, weights: usize },

    #[error("Weights are not normalized: weight {index} is {value}")]
    NotNormalized { index: usize, value: f64 },

    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("Normalizer error: {0}")]
    Normalizer(#[from] NormalizerError),
}
