/// Running state of an in-progress digest computation.
///
/// `finalize` consumes the accumulator, so it can run at most once.
pub trait Accumulator: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Adapter for any RustCrypto [`digest::Digest`] implementation.
pub struct DigestAccumulator<D>(D);

impl<D: digest::Digest> Default for DigestAccumulator<D> {
    fn default() -> Self { Self(D::new()) }
}

impl<D: digest::Digest + Send> Accumulator for DigestAccumulator<D> {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }

    fn finalize(self: Box<Self>) -> Vec<u8> { self.0.finalize().to_vec() }
}

#[cfg(feature = "blake3")]
#[derive(Default)]
pub struct Blake3Accumulator(blake3::Hasher);

#[cfg(feature = "blake3")]
impl Accumulator for Blake3Accumulator {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }

    fn finalize(self: Box<Self>) -> Vec<u8> { self.0.finalize().as_bytes().to_vec() }
}
