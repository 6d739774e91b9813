use std::fmt;

use crate::algorithm::Algorithm;
use crate::encoding::{EncodedDigest, Encoding};

/// A digest together with the algorithm that produced it.
///
/// Identical input always produces the same `Fingerprint` under the same
/// algorithm, making fingerprints usable as cache keys and content
/// addresses. Two fingerprints are equal only when both the bytes and the
/// producing algorithm match.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    algorithm: Algorithm,
    bytes: Vec<u8>,
}

impl Fingerprint {
    /// Digest `data` under `algorithm`.
    pub fn compute(algorithm: Algorithm, data: &[u8]) -> Self {
        Self {
            algorithm,
            bytes: algorithm.digest(data),
        }
    }

    /// The algorithm that produced this fingerprint.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.bytes[..self.bytes.len().min(4)])
    }

    /// Render under the given output encoding.
    pub fn encode(&self, encoding: Encoding) -> EncodedDigest {
        encoding.encode(&self.bytes)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}:{})", self.algorithm, self.short_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
