use std::fmt;
use std::io::{self, Read};
use std::mem;

use pin_project_lite::pin_project;

use crate::accumulator::Accumulator;
use crate::{Algorithm, Digest};

pin_project! {
    /// Pass-through reader that hashes every byte it hands out.
    ///
    /// Reads behave exactly like reads on the wrapped source. Each successful
    /// non-empty read feeds the returned bytes into the accumulator; errors and
    /// end-of-stream feed nothing.
    ///
    /// The first [`get_digest`](VerifyingReader::get_digest) call finalizes the
    /// accumulator and caches the result. Later calls return the cached value.
    /// Asking before the source is exhausted yields the digest of the bytes read
    /// so far; reading to the end first is up to the caller.
    ///
    /// Owns the source: dropping the reader drops the source once. Not meant
    /// to be shared between threads mid-read; wrap each download separately.
    pub struct VerifyingReader<R> {
        #[pin]
        inner: R,
        tally: Tally,
    }
}

enum Stage {
    Reading(Box<dyn Accumulator>),
    Finalized(Digest),
}

struct Tally {
    algorithm:   Algorithm,
    stage:       Stage,
    bytes_read:  u64,
    late_warned: bool,
}

impl Tally {
    fn feed(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        match &mut self.stage {
            Stage::Reading(accumulator) => {
                accumulator.update(data);
                self.bytes_read += data.len() as u64;
            },
            Stage::Finalized(_) => {
                if !self.late_warned {
                    tracing::warn!(
                        algorithm = %self.algorithm,
                        "read after digest was finalized; bytes are not part of the digest"
                    );
                    self.late_warned = true;
                }
            },
        }
    }

    fn finalize(&mut self) -> Digest {
        let placeholder = Stage::Finalized(Digest::absent(self.algorithm));
        let digest = match mem::replace(&mut self.stage, placeholder) {
            Stage::Reading(accumulator) => {
                let digest = Digest::from_bytes(self.algorithm, &accumulator.finalize());
                tracing::trace!(bytes = self.bytes_read, %digest, "finalized digest");
                digest
            },
            Stage::Finalized(digest) => digest,
        };
        self.stage = Stage::Finalized(digest.clone());
        digest
    }
}

impl<R> VerifyingReader<R> {
    pub fn new(inner: R, algorithm: Algorithm) -> Self {
        Self {
            inner,
            tally: Tally {
                algorithm,
                stage: Stage::Reading(algorithm.accumulator()),
                bytes_read: 0,
                late_warned: false,
            },
        }
    }

    pub fn algorithm(&self) -> Algorithm { self.tally.algorithm }

    /// Digest of everything read so far, computed once and cached.
    pub fn get_digest(&mut self) -> Digest { self.tally.finalize() }

    pub fn is_finalized(&self) -> bool { matches!(self.tally.stage, Stage::Finalized(_)) }

    /// Bytes fed into the accumulator.
    pub fn bytes_read(&self) -> u64 { self.tally.bytes_read }

    pub fn get_ref(&self) -> &R { &self.inner }

    /// Reading through this reference bypasses the digest.
    pub fn get_mut(&mut self) -> &mut R { &mut self.inner }

    pub fn into_inner(self) -> R { self.inner }

    /// Finalize and release the source.
    pub fn into_parts(mut self) -> (R, Digest) {
        let digest = self.get_digest();
        (self.inner, digest)
    }
}

impl<R: Read> Read for VerifyingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.tally.feed(&buf[..n]);
        Ok(n)
    }
}

#[cfg(feature = "tokio")]
impl<R: tokio::io::AsyncRead> tokio::io::AsyncRead for VerifyingReader<R> {
    fn poll_read(
        self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
        buf: &mut tokio::io::ReadBuf<'_>,
    ) -> std::task::Poll<io::Result<()>> {
        let this = self.project();
        let before = buf.filled().len();
        std::task::ready!(tokio::io::AsyncRead::poll_read(this.inner, cx, buf))?;
        this.tally.feed(&buf.filled()[before..]);
        std::task::Poll::Ready(Ok(()))
    }
}

impl<R: fmt::Debug> fmt::Debug for VerifyingReader<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyingReader")
            .field("inner", &self.inner)
            .field("algorithm", &self.tally.algorithm)
            .field("bytes_read", &self.tally.bytes_read)
            .field("finalized", &self.is_finalized())
            .finish()
    }
}
