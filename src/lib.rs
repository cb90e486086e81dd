//! Generates RSA key pairs and serializes them as raw key components, DER or PEM.
//!
//! The [generator::Generator] pipeline is layered: the DER pair is the raw pair encoded with
//! PKCS#1 (private) and PKIX (public), and the PEM pair is the DER pair wrapped in
//! `RSA PRIVATE KEY` and `RSA PUBLIC KEY` blocks.

pub mod commands;
pub mod generator;
pub mod key;
pub mod output;
pub mod parameters;
