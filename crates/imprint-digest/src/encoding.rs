use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::DigestError;

/// A named rendering of digest bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Lowercase hex digits. The default.
    Hex,
    /// Standard base64 alphabet, padded.
    Base64,
    /// URL-safe base64 alphabet, unpadded.
    Base64Url,
    /// The raw byte sequence, unrendered.
    Binary,
}

impl Encoding {
    /// Every recognized encoding, in documentation order.
    pub const ALL: [Encoding; 4] = [
        Encoding::Hex,
        Encoding::Base64,
        Encoding::Base64Url,
        Encoding::Binary,
    ];

    /// The lowercase wire name.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
            Encoding::Binary => "binary",
        }
    }

    /// Render digest bytes under this encoding.
    pub fn encode(&self, bytes: &[u8]) -> EncodedDigest {
        match self {
            Encoding::Hex => EncodedDigest::Text(hex::encode(bytes)),
            Encoding::Base64 => EncodedDigest::Text(STANDARD.encode(bytes)),
            Encoding::Base64Url => EncodedDigest::Text(URL_SAFE_NO_PAD.encode(bytes)),
            Encoding::Binary => EncodedDigest::Bytes(bytes.to_vec()),
        }
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Hex
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            "base64url" => Ok(Encoding::Base64Url),
            "binary" => Ok(Encoding::Binary),
            _ => Err(DigestError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// An encoded digest: text for the textual encodings, raw bytes for
/// `binary`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodedDigest {
    Text(String),
    Bytes(Vec<u8>),
}

impl EncodedDigest {
    /// The textual rendering, if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EncodedDigest::Text(text) => Some(text),
            EncodedDigest::Bytes(_) => None,
        }
    }

    /// The raw byte rendering, if this is one.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            EncodedDigest::Text(_) => None,
            EncodedDigest::Bytes(bytes) => Some(bytes),
        }
    }

    /// Consume into bytes: textual renderings yield their UTF-8 bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            EncodedDigest::Text(text) => text.into_bytes(),
            EncodedDigest::Bytes(bytes) => bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SHA-1 of `"TEST_VALUE"` (the canonical, quoted form).
    const DIGEST: [u8; 20] = [
        0x83, 0x42, 0x18, 0xbc, 0x70, 0x32, 0x64, 0x03, 0xbe, 0x39, 0x13, 0x8c, 0x2f, 0x63, 0xac,
        0xea, 0xc9, 0x45, 0x71, 0x9e,
    ];

    #[test]
    fn hex_is_lowercase() {
        let encoded = Encoding::Hex.encode(&DIGEST);
        assert_eq!(
            encoded.as_text(),
            Some("834218bc70326403be39138c2f63aceac945719e")
        );
    }

    #[test]
    fn base64_is_standard_and_padded() {
        let encoded = Encoding::Base64.encode(&DIGEST);
        assert_eq!(encoded.as_text(), Some("g0IYvHAyZAO+OROML2Os6slFcZ4="));
    }

    #[test]
    fn base64url_is_url_safe_and_unpadded() {
        let encoded = Encoding::Base64Url.encode(&DIGEST);
        let text = encoded.as_text().unwrap();
        assert_eq!(text, "g0IYvHAyZAO-OROML2Os6slFcZ4");
        assert!(!text.contains('+'));
        assert!(!text.contains('/'));
        assert!(!text.ends_with('='));
    }

    #[test]
    fn binary_is_the_raw_bytes() {
        let encoded = Encoding::Binary.encode(&DIGEST);
        assert_eq!(encoded.as_bytes(), Some(&DIGEST[..]));
        assert_eq!(encoded.as_text(), None);
    }

    #[test]
    fn into_bytes_flattens_both_variants() {
        assert_eq!(Encoding::Binary.encode(&DIGEST).into_bytes(), DIGEST.to_vec());
        assert_eq!(
            Encoding::Hex.encode(&DIGEST).into_bytes(),
            b"834218bc70326403be39138c2f63aceac945719e".to_vec()
        );
    }

    #[test]
    fn names_roundtrip_through_from_str() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.name().parse::<Encoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn unknown_name_is_rejected_with_the_offending_name() {
        let err = "base32".parse::<Encoding>().unwrap_err();
        assert_eq!(err, DigestError::UnsupportedEncoding("base32".into()));
    }

    #[test]
    fn default_is_hex() {
        assert_eq!(Encoding::default(), Encoding::Hex);
    }
}
