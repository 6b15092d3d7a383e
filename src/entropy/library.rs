//! Library CSPRNG Source.
//!
//! Delegates to a ChaCha20 generator from `rand_chacha`, keyed from the operating
//! system via `rand_core::OsRng`. A new generator is built for every call and
//! dropped before returning, so no generator state outlives the request.

use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};

use super::{Backend, EntropySource, SourceFailure};

/// ChaCha20 CSPRNG backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibraryBackend {
    _private: (),
}

impl LibraryBackend {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Backend for LibraryBackend {
    fn kind(&self) -> EntropySource {
        EntropySource::LibraryCsprng
    }

    fn acquire(&self, dest: &mut [u8]) -> Result<(), SourceFailure> {
        let mut rng = ChaCha20Rng::from_rng(OsRng).map_err(|e| {
            log::debug!("ChaCha20 seeding failed: {}", e);
            SourceFailure::Library
        })?;
        rng.try_fill_bytes(dest).map_err(|_| SourceFailure::Library)
    }
}
