use crate::accumulator::Accumulator as _;
use crate::error::Result;
use crate::{Algorithm, Digest, VerifyingReader};

/// Factory for digests and verifying readers of a single [`Algorithm`].
///
/// Holds no data state; every [`wrap`](Hasher::wrap) starts a fresh
/// accumulator. Digests carry their algorithm as the family tag, so values
/// produced by two `Hasher`s for the same algorithm compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hasher {
    algorithm: Algorithm,
}

impl Hasher {
    pub fn new(algorithm: Algorithm) -> Self { Self { algorithm } }

    /// Look up a hasher by manifest identifier, e.g. `"sha256"`.
    ///
    /// Fails with [`UnsupportedAlgorithm`](crate::VerificationError::UnsupportedAlgorithm)
    /// for identifiers outside the implemented set.
    pub fn for_algorithm(identifier: &str) -> Result<Self> { identifier.parse().map(Self::new) }

    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Wrap `source` so that reading it also computes a digest.
    pub fn wrap<R>(&self, source: R) -> VerifyingReader<R> {
        VerifyingReader::new(source, self.algorithm)
    }

    /// Parse an expected digest. Empty input is the absent digest.
    pub fn parse(&self, hex: &str) -> Result<Digest> {
        Digest::from_literal(self.algorithm, Some(hex))
    }

    pub fn absent(&self) -> Digest { Digest::absent(self.algorithm) }

    /// One-shot digest of an in-memory buffer.
    pub fn digest_bytes(&self, data: &[u8]) -> Digest {
        let mut accumulator = self.algorithm.accumulator();
        accumulator.update(data);
        Digest::from_bytes(self.algorithm, &accumulator.finalize())
    }
}
