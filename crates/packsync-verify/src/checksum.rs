//! Manifest-declared checksums.
//!
//! Pack manifests describe each file's expected content with a `hash-format`
//! and a `hash` field. [`Checksum`] deserializes that pair and drives a
//! verifying copy of the file's bytes.

use std::io::{self, Read, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VerificationError};
use crate::{Algorithm, Digest, Hasher};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Checksum {
    pub hash_format: Algorithm,
    pub hash:        String,
}

impl Checksum {
    pub fn new(algorithm: Algorithm, hash: impl Into<String>) -> Self {
        Self {
            hash_format: algorithm,
            hash:        hash.into(),
        }
    }

    pub fn hasher(&self) -> Hasher { Hasher::new(self.hash_format) }

    /// The declared digest, validated.
    pub fn expected(&self) -> Result<Digest> { self.hasher().parse(&self.hash) }

    /// Copy `reader` into `writer` while hashing, then compare with the
    /// declared digest.
    ///
    /// Returns the computed digest on a match. An absent declared hash never
    /// matches.
    pub fn verify_copy<R, W>(&self, reader: R, writer: &mut W) -> Result<Digest>
    where
        R: Read,
        W: Write + ?Sized,
    {
        let expected = self.expected()?;
        let mut reader = self.hasher().wrap(reader);
        io::copy(&mut reader, writer)?;
        check(expected, reader.get_digest())
    }

    /// Async counterpart of [`verify_copy`](Checksum::verify_copy).
    #[cfg(feature = "tokio")]
    pub async fn verify_copy_async<R, W>(&self, reader: R, writer: &mut W) -> Result<Digest>
    where
        R: tokio::io::AsyncRead + Unpin,
        W: tokio::io::AsyncWrite + Unpin + ?Sized,
    {
        let expected = self.expected()?;
        let mut reader = self.hasher().wrap(reader);
        tokio::io::copy(&mut reader, writer).await?;
        check(expected, reader.get_digest())
    }
}

fn check(expected: Digest, actual: Digest) -> Result<Digest> {
    if expected == actual {
        Ok(actual)
    } else {
        tracing::debug!(%expected, %actual, "checksum mismatch");
        Err(VerificationError::Mismatch { expected, actual })
    }
}

impl FromStr for Checksum {
    type Err = VerificationError;

    /// Parse `"<algorithm>:<hex>"`. A bare 64 character hex string is taken
    /// as sha256.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (algorithm, hash) = match s.split_once(':') {
            Some((algorithm, hash)) => (algorithm.parse()?, hash),
            None => (Algorithm::Sha256, s),
        };

        let digest = Digest::from_literal(algorithm, Some(hash))?;
        Ok(Self::new(algorithm, digest.hex().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_WORLD: &str = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    #[test]
    fn test_from_str_with_prefix() {
        let checksum: Checksum = format!("SHA256:{}", HELLO_WORLD.to_uppercase()).parse().unwrap();
        assert_eq!(checksum.hash_format, Algorithm::Sha256);
        assert_eq!(checksum.hash, HELLO_WORLD);
    }

    #[test]
    fn test_from_str_bare_defaults_to_sha256() {
        let checksum: Checksum = HELLO_WORLD.parse().unwrap();
        assert_eq!(checksum, Checksum::new(Algorithm::Sha256, HELLO_WORLD));
    }

    #[test]
    fn test_from_str_rejects() {
        assert!(matches!(
            "md17:abc".parse::<Checksum>(),
            Err(VerificationError::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            "abc".parse::<Checksum>(),
            Err(VerificationError::InvalidDigestFormat { .. })
        ));
        assert!(matches!(
            format!("sha512:{HELLO_WORLD}").parse::<Checksum>(),
            Err(VerificationError::InvalidDigestFormat { .. })
        ));
    }

    #[test]
    fn test_verify_copy() {
        let checksum = Checksum::new(Algorithm::Sha256, HELLO_WORLD);
        let mut out = Vec::new();

        let digest = checksum.verify_copy(&b"hello world"[..], &mut out).unwrap();

        assert_eq!(out, b"hello world");
        assert_eq!(digest, checksum.expected().unwrap());
    }

    #[test]
    fn test_verify_copy_mismatch() {
        let checksum = Checksum::new(Algorithm::Sha256, HELLO_WORLD);
        let mut out = Vec::new();

        match checksum.verify_copy(&b"hello world!"[..], &mut out) {
            Err(VerificationError::Mismatch { expected, actual }) => {
                assert_eq!(expected.hex(), Some(HELLO_WORLD));
                assert_ne!(actual, expected);
            },
            other => panic!("expected Mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_copy_absent_hash_never_matches() {
        let checksum = Checksum::new(Algorithm::Sha256, "");
        let result = checksum.verify_copy(&b""[..], &mut io::sink());
        assert!(matches!(result, Err(VerificationError::Mismatch { .. })));
    }

    #[test]
    fn test_verify_copy_invalid_hash() {
        let checksum = Checksum::new(Algorithm::Sha256, "not-hex");
        let result = checksum.verify_copy(&b"hello world"[..], &mut io::sink());
        assert!(matches!(
            result,
            Err(VerificationError::InvalidDigestFormat { .. })
        ));
    }

    #[test]
    fn test_serde_field_names() {
        let json = format!(r#"{{"hash-format":"sha256","hash":"{HELLO_WORLD}"}}"#);
        let checksum: Checksum = serde_json::from_str(&json).unwrap();
        assert_eq!(checksum, Checksum::new(Algorithm::Sha256, HELLO_WORLD));
        assert_eq!(serde_json::to_string(&checksum).unwrap(), json);
    }
}
