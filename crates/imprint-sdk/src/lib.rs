//! High-level API for Imprint.
//!
//! Provides the one-call operations applications want (canonicalize a
//! value, or canonicalize and fingerprint it) plus re-exports of the
//! underlying types. This is the main entry point for applications
//! embedding Imprint.
//!
//! ```
//! use imprint_sdk::{hash, Value};
//!
//! let config = Value::record([("retries", Value::from(3.0)), ("host", Value::from("db-1"))]);
//! let reordered = Value::record([("host", Value::from("db-1")), ("retries", Value::from(3.0))]);
//! assert_eq!(hash(&config), hash(&reordered));
//! ```

pub use imprint_canon::{canonicalize, canonicalize_memo, Memo};
pub use imprint_digest::{Algorithm, DigestError, EncodedDigest, Encoding, Fingerprint};
pub use imprint_value::{is_plain_record, ToCanonical, Value};

/// Fingerprint a value with the defaults: SHA-1 over the canonical string,
/// rendered as lowercase hex.
pub fn hash(value: &Value) -> String {
    Fingerprint::compute(Algorithm::Sha1, canonicalize(value).as_bytes()).to_hex()
}

/// Fingerprint a value under an explicit algorithm and output encoding.
pub fn hash_with(value: &Value, algorithm: Algorithm, encoding: Encoding) -> EncodedDigest {
    fingerprint(value, algorithm).encode(encoding)
}

/// Fingerprint a value with the algorithm and encoding given by name
/// (`"sha1"`, `"sha512"`, ... / `"hex"`, `"base64"`, `"base64url"`,
/// `"binary"`).
///
/// Fails only on an unrecognized name; canonicalization itself is total.
pub fn hash_named(
    value: &Value,
    algorithm: &str,
    encoding: &str,
) -> Result<EncodedDigest, DigestError> {
    let algorithm: Algorithm = algorithm.parse()?;
    let encoding: Encoding = encoding.parse()?;
    Ok(hash_with(value, algorithm, encoding))
}

/// Compute the digest of a value's canonical string under `algorithm`.
pub fn fingerprint(value: &Value, algorithm: Algorithm) -> Fingerprint {
    Fingerprint::compute(algorithm, canonicalize(value).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_digests_the_canonical_quoted_form() {
        // SHA-1 of `"TEST_VALUE"`: the quoted canonical form, not the
        // bare text.
        assert_eq!(
            hash(&Value::from("TEST_VALUE")),
            "834218bc70326403be39138c2f63aceac945719e"
        );
        assert_ne!(
            hash(&Value::from("TEST_VALUE")),
            Fingerprint::compute(Algorithm::Sha1, b"TEST_VALUE").to_hex()
        );
    }

    #[test]
    fn hash_is_order_independent_for_records() {
        let ab = Value::record([("a", 1.0), ("b", 2.0)]);
        let ba = Value::record([("b", 2.0), ("a", 1.0)]);
        assert_eq!(hash(&ab), hash(&ba));
    }

    #[test]
    fn hash_discriminates_types() {
        assert_ne!(hash(&Value::Number(123.0)), hash(&Value::from("123")));
        assert_ne!(hash(&Value::Null), hash(&Value::from("null")));
    }

    #[test]
    fn hash_with_explicit_algorithm_and_encoding() {
        let value = Value::from("TEST_VALUE");
        let hex = hash_with(&value, Algorithm::Sha1, Encoding::Hex);
        assert_eq!(
            hex.as_text(),
            Some("834218bc70326403be39138c2f63aceac945719e")
        );

        let b64url = hash_with(&value, Algorithm::Sha1, Encoding::Base64Url);
        assert_eq!(b64url.as_text(), Some("g0IYvHAyZAO-OROML2Os6slFcZ4"));

        let sha512 = hash_with(&value, Algorithm::Sha512, Encoding::Hex);
        assert_eq!(sha512.as_text().map(str::len), Some(128));
    }

    #[test]
    fn hash_named_resolves_names() {
        let value = Value::from("TEST_VALUE");
        let out = hash_named(&value, "sha1", "hex").unwrap();
        assert_eq!(
            out.as_text(),
            Some("834218bc70326403be39138c2f63aceac945719e")
        );
    }

    #[test]
    fn hash_named_rejects_unknown_algorithm() {
        let err = hash_named(&Value::Null, "md5", "hex").unwrap_err();
        assert_eq!(err, DigestError::UnsupportedAlgorithm("md5".into()));
    }

    #[test]
    fn hash_named_rejects_unknown_encoding() {
        let err = hash_named(&Value::Null, "sha1", "base32").unwrap_err();
        assert_eq!(err, DigestError::UnsupportedEncoding("base32".into()));
    }

    #[test]
    fn binary_encoding_yields_raw_digest_bytes() {
        let value = Value::from("TEST_VALUE");
        let out = hash_named(&value, "sha1", "binary").unwrap();
        assert_eq!(out.as_bytes().map(<[u8]>::len), Some(20));
    }

    #[test]
    fn fingerprint_carries_the_algorithm() {
        let fp = fingerprint(&Value::Null, Algorithm::Blake3);
        assert_eq!(fp.algorithm(), Algorithm::Blake3);
        assert_eq!(fp.as_bytes().len(), 32);
    }

    #[test]
    fn json_documents_hash_identically_regardless_of_key_order() {
        let a: serde_json::Value = serde_json::from_str(r#"{"x": 1, "y": [true, null]}"#).unwrap();
        let b: serde_json::Value = serde_json::from_str(r#"{"y": [true, null], "x": 1}"#).unwrap();
        assert_eq!(hash(&Value::from(a)), hash(&Value::from(b)));
    }

    #[test]
    fn memo_reexport_produces_identical_hashes() {
        let value = Value::record([("a", Value::array([Value::from(1.0)]))]);
        let mut memo = Memo::new();
        let canonical = canonicalize_memo(&value, &mut memo);
        assert_eq!(
            Fingerprint::compute(Algorithm::Sha1, canonical.as_bytes()).to_hex(),
            hash(&value)
        );
    }
}
