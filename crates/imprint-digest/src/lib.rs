//! Digest layer for Imprint.
//!
//! Turns a canonical string into a fixed-length digest under a named hash
//! algorithm, then renders the digest bytes under a named output encoding.
//! All digest computation wraps established libraries; no custom
//! cryptography.
//!
//! Every operation here is pure and synchronous. The only failure modes
//! are unrecognized algorithm or encoding names, reported as
//! [`DigestError`] and never silently recovered.

pub mod algorithm;
pub mod encoding;
pub mod error;
pub mod fingerprint;

pub use algorithm::Algorithm;
pub use encoding::{EncodedDigest, Encoding};
pub use error::DigestError;
pub use fingerprint::Fingerprint;
