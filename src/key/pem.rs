use rsa::pkcs1::LineEnding;
use rsa::pkcs8::der::pem;

use crate::key::error::EncodingError;
use crate::key::{KeyPairEncoded, RSA_PRIVATE_KEY_LABEL, RSA_PUBLIC_KEY_LABEL};

/// Wraps a DER encoded key pair in PEM blocks.
///
/// The private key is labelled [`RSA_PRIVATE_KEY_LABEL`] and the public key
/// [`RSA_PUBLIC_KEY_LABEL`].
pub fn encode_pem(der: &KeyPairEncoded) -> Result<KeyPairEncoded, EncodingError> {
    Ok(KeyPairEncoded {
        private: wrap(RSA_PRIVATE_KEY_LABEL, &der.private)?,
        public: wrap(RSA_PUBLIC_KEY_LABEL, &der.public)?,
    })
}

fn wrap(label: &str, der: &[u8]) -> Result<Vec<u8>, EncodingError> {
    pem::encode_string(label, LineEnding::LF, der)
        .map(String::into_bytes)
        .map_err(|e| EncodingError::Pem(e.to_string()))
}
