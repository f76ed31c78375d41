use std::fmt;

use crate::error::{Result, VerificationError};
use crate::Algorithm;

/// Hex-encoded digest tagged with the algorithm family that produced it.
///
/// Two digests are equal only when both the family and the hex value match.
/// Comparing across families is `false`, never an error. The hex value may be
/// absent ("no digest known"): absent equals absent within a family, but never
/// equals a present value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    hex:       Option<String>,
}

impl Digest {
    /// Build a digest from a literal, such as a manifest-declared hash.
    ///
    /// `None`, empty and all-whitespace input yield the absent digest. Anything
    /// else must be hex of exactly `algorithm.digest_len() * 2` characters and
    /// is stored lowercased.
    pub fn from_literal(algorithm: Algorithm, hex: Option<&str>) -> Result<Self> {
        let hex = match hex.map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(normalize(algorithm, value)?),
        };
        Ok(Self { algorithm, hex })
    }

    pub fn absent(algorithm: Algorithm) -> Self { Self { algorithm, hex: None } }

    pub(crate) fn from_bytes(algorithm: Algorithm, bytes: &[u8]) -> Self {
        Self {
            algorithm,
            hex: Some(hex::encode(bytes)),
        }
    }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Lowercase hex, or `None` when absent.
    pub fn hex(&self) -> Option<&str> { self.hex.as_deref() }

    pub fn is_absent(&self) -> bool { self.hex.is_none() }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.algorithm, self.hex.as_deref().unwrap_or("none"))
    }
}

fn normalize(algorithm: Algorithm, value: &str) -> Result<String> {
    let invalid = |reason: String| VerificationError::InvalidDigestFormat {
        algorithm,
        value: value.to_string(),
        reason,
    };

    let expected = algorithm.digest_len() * 2;
    if value.len() != expected {
        return Err(invalid(format!(
            "expected {expected} hex characters, got {}",
            value.len()
        )));
    }
    hex::decode(value).map_err(|e| invalid(e.to_string()))?;

    Ok(value.to_ascii_lowercase())
}
