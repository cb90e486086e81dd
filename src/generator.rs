use rand::rngs::OsRng;
use rsa::RsaPrivateKey;
use tracing::debug;

use crate::key::der::encode_der;
use crate::key::pem::encode_pem;
use crate::key::{KeyPair, KeyPairEncoded};
use error::{GenerationError, KeyPairGeneratorError};

pub mod error;

/// Bit size used when no option overrides it.
pub const DEFAULT_BIT_SIZE: usize = 2048;
/// Smallest modulus length accepted at generation time.
pub const MIN_BIT_SIZE: usize = 512;

/// Generates RSA key pairs in raw, DER or PEM form.
///
/// Each stage builds on the previous one: the DER pair is the raw pair encoded, and the PEM pair
/// is the DER pair wrapped in text blocks.
#[cfg_attr(test, mockall::automock)]
pub trait KeyPairGenerator {
    /// Generates a fresh key pair, consuming entropy from the OS.
    fn generate_raw_key_pair(&self) -> Result<KeyPair, KeyPairGeneratorError>;

    /// Generates a key pair encoded as PKCS#1 (private) and PKIX (public) DER.
    fn generate_encoded_key_pair(&self) -> Result<KeyPairEncoded, KeyPairGeneratorError>;

    /// Generates a key pair encoded as PEM.
    fn generate_pem_key_pair(&self) -> Result<KeyPairEncoded, KeyPairGeneratorError>;
}

/// A configuration change applied while building a [Generator].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorOption {
    /// Sets the modulus length of generated keys.
    BitSize(usize),
}

/// RSA key pair generator.
///
/// Holds no per-call state, so a single instance can be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    bit_size: usize,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            bit_size: DEFAULT_BIT_SIZE,
        }
    }
}

impl Generator {
    /// Creates a generator from the defaults, applying `options` in order.
    ///
    /// Later options override earlier ones. Nothing is validated here, an unusable bit size is
    /// reported when generating.
    pub fn new(options: impl IntoIterator<Item = GeneratorOption>) -> Self {
        options
            .into_iter()
            .fold(Self::default(), |generator, option| generator.apply(option))
    }

    pub fn with_bit_size(self, bit_size: usize) -> Self {
        self.apply(GeneratorOption::BitSize(bit_size))
    }

    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    fn apply(self, option: GeneratorOption) -> Self {
        match option {
            GeneratorOption::BitSize(bit_size) => Self { bit_size, ..self },
        }
    }
}

impl KeyPairGenerator for Generator {
    fn generate_raw_key_pair(&self) -> Result<KeyPair, KeyPairGeneratorError> {
        if self.bit_size < MIN_BIT_SIZE {
            return Err(GenerationError::BitSizeTooSmall(self.bit_size).into());
        }

        debug!(bit_size = self.bit_size, "generating RSA key pair");
        let private = RsaPrivateKey::new(&mut OsRng, self.bit_size)
            .map_err(|e| GenerationError::UnableToGenerateKey(e.to_string()))?;
        debug!("RSA key pair generated");

        Ok(KeyPair::from(private))
    }

    fn generate_encoded_key_pair(&self) -> Result<KeyPairEncoded, KeyPairGeneratorError> {
        let raw = self.generate_raw_key_pair()?;
        let encoded = encode_der(&raw)?;
        debug!("key pair encoded as DER");
        Ok(encoded)
    }

    fn generate_pem_key_pair(&self) -> Result<KeyPairEncoded, KeyPairGeneratorError> {
        let der = self.generate_encoded_key_pair()?;
        let pem = encode_pem(&der)?;
        debug!("key pair wrapped as PEM");
        Ok(pem)
    }
}
