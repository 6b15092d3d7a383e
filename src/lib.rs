//! Cryptographically secure random bytes with a fixed fallback chain.
//!
//! [`SecureRandomSource`] tries the kernel CSPRNG, then the random device, then
//! a library CSPRNG, and reports which one produced the bytes. The
//! non-cryptographic [`legacy`] generator is kept apart and is never used by it.

extern crate alloc;

pub mod config;
pub mod entropy;
pub mod legacy;
pub mod output;

pub use config::SourceConfig;
pub use entropy::secure::{fill, SecureRandomSource};
pub use entropy::{AcquisitionResult, EntropyError, EntropySource, ErrorKind, SourceFailure};
