use thiserror::Error;

/// Errors that can occur while serializing key material.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// The private key could not be encoded as PKCS#1 DER.
    #[error("unable to encode private key: `{0}`")]
    PrivateKey(String),
    /// The public key could not be encoded as PKIX DER.
    #[error("unable to encode public key: `{0}`")]
    PublicKey(String),
    /// The DER bytes could not be wrapped in a PEM block.
    #[error("unable to wrap key in PEM block: `{0}`")]
    Pem(String),
}
