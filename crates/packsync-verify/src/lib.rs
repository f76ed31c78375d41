//! Streaming content verification for pack downloads.
//!
//! A [`Hasher`] is bound to one [`Algorithm`]. It parses manifest-declared
//! digests and wraps byte sources in a [`VerifyingReader`], which forwards
//! reads unchanged while hashing them. Once the source is exhausted the
//! reader's digest is compared with the declared one.
//!
//! [`Digest`] values are tagged with their algorithm family: a sha256 digest
//! never equals a digest of another algorithm, even if the hex matches.
//!
//! # Example
//!
//! ```
//! use std::io::Read;
//!
//! use packsync_verify::Hasher;
//!
//! let hasher = Hasher::for_algorithm("sha256")?;
//! let expected =
//!     hasher.parse("b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9")?;
//!
//! let mut reader = hasher.wrap(&b"hello world"[..]);
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//!
//! assert_eq!(reader.get_digest(), expected);
//! # Ok::<(), packsync_verify::VerificationError>(())
//! ```
//!
//! # Features
//!
//! - `blake3` (default): the BLAKE3 algorithm
//! - `tokio`: `tokio::io::AsyncRead` for [`VerifyingReader`] and
//!   `Checksum::verify_copy_async`

pub use self::algorithm::Algorithm;
pub use self::checksum::Checksum;
pub use self::error::{Result, VerificationError};
pub use self::hasher::Hasher;
pub use self::reader::VerifyingReader;
pub use self::value::Digest;

mod accumulator;
mod algorithm;
mod checksum;
mod error;
mod hasher;
mod reader;
mod value;
