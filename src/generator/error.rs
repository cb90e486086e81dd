use thiserror::Error;

use crate::generator::MIN_BIT_SIZE;
use crate::key::error::EncodingError;

/// Errors raised by the underlying key synthesis.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("bit size `{0}` is below the minimum of {min} bits", min = MIN_BIT_SIZE)]
    BitSizeTooSmall(usize),
    #[error("unable to generate key: `{0}`")]
    UnableToGenerateKey(String),
}

/// Errors returned by every [KeyPairGenerator](crate::generator::KeyPairGenerator) stage.
///
/// A stage propagates the error of the stage it builds on unchanged.
#[derive(Error, Debug)]
pub enum KeyPairGeneratorError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
