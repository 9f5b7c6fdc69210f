/// The canonical encoding of a public key: the DER serialization of its
/// SubjectPublicKeyInfo structure (algorithm OID + modulus + exponent).
///
/// These are the exact bytes that get digested into a fingerprint, so any
/// compliant peer must reproduce them identically. Two mathematically
/// identical keys always produce byte-identical values here, regardless of
/// which representation (private key material or standalone public key) or
/// which textual container they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpkiPublicKeyDer(Vec<u8>);

impl SpkiPublicKeyDer {
    /// The raw DER bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the encoding and returns the raw DER bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for SpkiPublicKeyDer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for SpkiPublicKeyDer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
