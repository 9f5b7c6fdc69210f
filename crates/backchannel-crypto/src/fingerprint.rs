//! Identity-key fingerprints.
//!
//! A fingerprint is a digest over the canonical encoding of a public key
//! ([`SpkiPublicKeyDer`]), rendered as colon-grouped lowercase hex for
//! out-of-band comparison between peers. Both halves of a key pair converge
//! on the same canonical encoding, so a peer holding only the public key and
//! a peer holding the full private key always compute the same fingerprint.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use sha1::Digest;
use subtle::{Choice, ConstantTimeEq};

use crate::{CryptoError, PrivateKey, PublicKey, Result, SpkiPublicKeyDer};

/// Digest algorithm used to derive a fingerprint.
///
/// The rendered fingerprint carries the algorithm tag, so peers running
/// different defaults never compare digests of different algorithms as if
/// they were the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum FingerprintAlgorithm {
    /// SHA-1, 160-bit. The legacy protocol digest and the default, for
    /// compatibility with fingerprints already verified under the existing
    /// protocol.
    #[default]
    Sha1 = 1,
    /// SHA-256, 256-bit. The upgrade path.
    Sha256 = 2,
}

impl FingerprintAlgorithm {
    /// Digest length in bytes.
    pub fn digest_size(self) -> usize {
        match self {
            FingerprintAlgorithm::Sha1 => 20,
            FingerprintAlgorithm::Sha256 => 32,
        }
    }

    /// The tag rendered in front of the grouped hex digest.
    pub fn tag(self) -> &'static str {
        match self {
            FingerprintAlgorithm::Sha1 => "SHA1",
            FingerprintAlgorithm::Sha256 => "SHA256",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        if tag.eq_ignore_ascii_case("SHA1") {
            Some(FingerprintAlgorithm::Sha1)
        } else if tag.eq_ignore_ascii_case("SHA256") {
            Some(FingerprintAlgorithm::Sha256)
        } else {
            None
        }
    }

    // Untagged fingerprint strings predate the algorithm tag. The supported
    // digest lengths are distinct, so the length identifies the algorithm.
    fn from_digest_size(len: usize) -> Option<Self> {
        match len {
            20 => Some(FingerprintAlgorithm::Sha1),
            32 => Some(FingerprintAlgorithm::Sha256),
            _ => None,
        }
    }
}

impl fmt::Display for FingerprintAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A digest of the canonical encoding of a public key, together with the
/// algorithm that produced it.
///
/// Computed on demand and never the source of truth; the key is. Display
/// renders `TAG:aa:bb:...`; parsing also accepts the bare grouped-hex legacy
/// form and upper- or lowercase hex.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fingerprint {
    #[serde(with = "serde_bytes")]
    digest: Vec<u8>,
    algorithm: FingerprintAlgorithm,
}

impl Fingerprint {
    /// Digest the canonical encoding with the given algorithm.
    ///
    /// Deterministic: byte-identical encodings always produce byte-identical
    /// digests, and any change to the encoding changes the digest with
    /// overwhelming probability.
    pub fn derive(encoding: &SpkiPublicKeyDer, algorithm: FingerprintAlgorithm) -> Self {
        let digest = match algorithm {
            FingerprintAlgorithm::Sha1 => sha1::Sha1::digest(encoding.as_bytes()).to_vec(),
            FingerprintAlgorithm::Sha256 => sha2::Sha256::digest(encoding.as_bytes()).to_vec(),
        };
        Fingerprint { digest, algorithm }
    }

    /// The raw digest bytes.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    /// The algorithm that produced the digest.
    pub fn algorithm(&self) -> FingerprintAlgorithm {
        self.algorithm
    }

    /// The grouped-hex rendering without the algorithm tag, e.g.
    /// `6e:d6:42:...`. This is the legacy on-screen form and is stable across
    /// versions.
    pub fn to_hex(&self) -> String {
        self.digest
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(":")
    }

    /// Compare a locally computed fingerprint against one claimed by a peer.
    ///
    /// Fingerprints are public, but the comparison is constant-time anyway so
    /// that adjacent secret comparisons in the surrounding tool have no
    /// variable-time precedent to copy.
    pub fn verify(&self, claimed: &Fingerprint) -> bool {
        self.ct_eq(claimed).into()
    }
}

impl ConstantTimeEq for Fingerprint {
    fn ct_eq(&self, other: &Self) -> Choice {
        // The algorithm is public metadata; only the digest bytes need the
        // branch-free comparison. Slice ct_eq is defined to return false for
        // mismatched lengths.
        Choice::from((self.algorithm == other.algorithm) as u8) & self.digest.ct_eq(&other.digest)
    }
}

impl PartialEq for Fingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Fingerprint {}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}

impl FromStr for Fingerprint {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        // A leading segment longer than a hex pair is an algorithm tag.
        let (tagged, hex) = match s.split_once(':') {
            Some((head, rest)) if head.len() > 2 => {
                let algorithm = FingerprintAlgorithm::from_tag(head)
                    .ok_or_else(|| CryptoError::UnsupportedDigest(head.to_string()))?;
                (Some(algorithm), rest)
            }
            _ => (None, s),
        };

        let digest = decode_delimited_hex(hex)?;
        let algorithm = match tagged {
            Some(algorithm) if digest.len() == algorithm.digest_size() => algorithm,
            Some(_) => return Err(CryptoError::MalformedFingerprint),
            None => FingerprintAlgorithm::from_digest_size(digest.len())
                .ok_or(CryptoError::MalformedFingerprint)?,
        };

        Ok(Fingerprint { digest, algorithm })
    }
}

/// Decodes hex with optional colon delimiters, case-insensitively.
fn decode_delimited_hex(s: &str) -> Result<Vec<u8>> {
    let compact: Vec<u8> = s.bytes().filter(|&b| b != b':').collect();
    if compact.is_empty() || compact.len() % 2 != 0 {
        return Err(CryptoError::MalformedFingerprint);
    }
    compact
        .chunks(2)
        .map(|pair| Ok(hex_nibble(pair[0])? << 4 | hex_nibble(pair[1])?))
        .collect()
}

fn hex_nibble(b: u8) -> Result<u8> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(CryptoError::MalformedFingerprint),
    }
}

/// Keys that a canonical fingerprint can be derived from.
///
/// Implemented for both halves of a key pair: the private-key implementation
/// first derives the public half, so every representation of one logical key
/// flows through the single canonicalization path and yields an identical
/// fingerprint.
pub trait Fingerprintable {
    /// Fingerprint under an explicit digest algorithm.
    fn fingerprint_with(&self, algorithm: FingerprintAlgorithm) -> Result<Fingerprint>;

    /// Fingerprint under the default digest algorithm.
    fn fingerprint(&self) -> Result<Fingerprint> {
        self.fingerprint_with(FingerprintAlgorithm::default())
    }
}

impl Fingerprintable for PublicKey {
    fn fingerprint_with(&self, algorithm: FingerprintAlgorithm) -> Result<Fingerprint> {
        Ok(Fingerprint::derive(&self.to_der()?, algorithm))
    }
}

impl Fingerprintable for PrivateKey {
    fn fingerprint_with(&self, algorithm: FingerprintAlgorithm) -> Result<Fingerprint> {
        self.to_public_key().fingerprint_with(algorithm)
    }
}
