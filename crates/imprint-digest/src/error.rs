use thiserror::Error;

/// Errors produced by the digest layer.
///
/// These are the only failure modes in the system: digesting and encoding
/// themselves are pure and total, so the errors are limited to name
/// resolution. They propagate directly to the caller; no retries, no
/// silent recovery.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("unsupported output encoding: {0}")]
    UnsupportedEncoding(String),
}
