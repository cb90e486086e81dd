use std::fmt;

use rsa::{RsaPrivateKey, RsaPublicKey};

pub mod der;
pub mod error;
pub mod pem;

/// PEM label used to wrap the PKCS#1 private key.
pub const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
/// PEM label used to wrap the PKIX public key.
pub const RSA_PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";

/// Raw RSA key material.
///
/// The public half is always derived from the private one, so the public parameters embedded in
/// `private` are the same as `public`.
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// The RSA public key.
    pub public: RsaPublicKey,
    /// The RSA private key.
    pub private: RsaPrivateKey,
}

impl From<RsaPrivateKey> for KeyPair {
    fn from(private: RsaPrivateKey) -> Self {
        KeyPair {
            public: private.to_public_key(),
            private,
        }
    }
}

/// Serialized key material, either DER bytes or PEM text depending on the stage producing it.
#[derive(Clone, PartialEq)]
pub struct KeyPairEncoded {
    /// The encoded public key.
    pub public: Vec<u8>,
    /// The encoded private key.
    pub private: Vec<u8>,
}

impl fmt::Debug for KeyPairEncoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPairEncoded")
            .field("public", &self.public)
            .field("private", &format_args!("<{} bytes redacted>", self.private.len()))
            .finish()
    }
}
