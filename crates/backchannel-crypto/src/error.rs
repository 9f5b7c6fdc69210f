use thiserror::Error;

/// Errors reported by the identity-key primitives.
///
/// Every error is terminal for the call that raised it: there are no partial
/// results and no silent fallback to a different algorithm. User-facing
/// messaging is left to the caller.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The textual container or the DER structure of a key could not be
    /// parsed.
    #[error("Malformed key")]
    MalformedKey,
    /// The key parsed, but its algorithm identifier is not rsaEncryption.
    #[error("Unsupported key algorithm")]
    UnsupportedKeyAlgorithm,
    /// A fingerprint string carried a digest tag this build does not
    /// implement.
    #[error("Unsupported fingerprint digest: {0}")]
    UnsupportedDigest(String),
    /// A fingerprint string was not valid grouped hex, or its digest length
    /// does not match any supported algorithm.
    #[error("Malformed fingerprint")]
    MalformedFingerprint,
    /// Key generation failed.
    #[error("Unable to generate key")]
    KeyGeneration,
}

pub(crate) type Result<T, E = CryptoError> = std::result::Result<T, E>;
