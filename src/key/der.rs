use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::EncodePublicKey;

use crate::key::error::EncodingError;
use crate::key::{KeyPair, KeyPairEncoded};

/// Serializes a key pair to DER.
///
/// The private key uses the PKCS#1 `RSAPrivateKey` structure while the public key uses the PKIX
/// `SubjectPublicKeyInfo` structure, matching the usual on-disk conventions for RSA key files.
pub fn encode_der(key_pair: &KeyPair) -> Result<KeyPairEncoded, EncodingError> {
    let private = key_pair
        .private
        .to_pkcs1_der()
        .map_err(|e| EncodingError::PrivateKey(e.to_string()))?;
    let public = key_pair
        .public
        .to_public_key_der()
        .map_err(|e| EncodingError::PublicKey(e.to_string()))?;

    Ok(KeyPairEncoded {
        private: private.as_bytes().to_vec(),
        public: public.into_vec(),
    })
}
