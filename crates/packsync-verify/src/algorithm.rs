use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::accumulator::{Accumulator, DigestAccumulator};
use crate::error::VerificationError;

#[cfg(feature = "blake3")]
use crate::accumulator::Blake3Accumulator;

/// Digest functions a [`Hasher`](crate::Hasher) can be built for.
///
/// Manifests name these by identifier (`"sha256"`), see [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[non_exhaustive]
pub enum Algorithm {
    /// SHA-256
    Sha256,
    /// SHA-512
    Sha512,
    /// BLAKE3 with the default 32 byte output
    #[cfg(feature = "blake3")]
    Blake3,
}

impl Algorithm {
    /// Digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Algorithm::Sha256 => 32,
            Algorithm::Sha512 => 64,
            #[cfg(feature = "blake3")]
            Algorithm::Blake3 => 32,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
            #[cfg(feature = "blake3")]
            Algorithm::Blake3 => "blake3",
        }
    }

    /// Fresh accumulator for this algorithm.
    pub(crate) fn accumulator(self) -> Box<dyn Accumulator> {
        match self {
            Algorithm::Sha256 => Box::new(DigestAccumulator::<sha2::Sha256>::default()),
            Algorithm::Sha512 => Box::new(DigestAccumulator::<sha2::Sha512>::default()),
            #[cfg(feature = "blake3")]
            Algorithm::Blake3 => Box::new(Blake3Accumulator::default()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Algorithm {
    type Err = VerificationError;

    /// Case-insensitive; `sha-256` and `sha-512` are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            "sha512" | "sha-512" => Ok(Algorithm::Sha512),
            #[cfg(feature = "blake3")]
            "blake3" => Ok(Algorithm::Blake3),
            _ => Err(VerificationError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl TryFrom<String> for Algorithm {
    type Error = VerificationError;

    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<Algorithm> for &'static str {
    fn from(algorithm: Algorithm) -> Self { algorithm.as_str() }
}
