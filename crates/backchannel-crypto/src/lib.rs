#![doc = include_str!("../README.md")]

mod asymmetric_crypto_key;
pub use asymmetric_crypto_key::{PrivateKey, PublicKey};
mod content_format;
pub use content_format::SpkiPublicKeyDer;
mod error;
pub(crate) use error::Result;
pub use error::CryptoError;
mod fingerprint;
pub use fingerprint::{Fingerprint, FingerprintAlgorithm, Fingerprintable};
