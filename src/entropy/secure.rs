//! Secure Random Source.
//!
//! Walks the kernel, device and library strategies in fixed order and returns
//! the first complete result. Non-cryptographic generators are not part of the
//! chain and cannot be added to it.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use zeroize::Zeroizing;

use super::device::DeviceFileBackend;
use super::kernel::KernelBackend;
use super::library::LibraryBackend;
use super::{AcquisitionResult, Backend, EntropyError, EntropySource};
use crate::config::SourceConfig;

type BoxedBackend = Box<dyn Backend + Send + Sync>;

/// Produces cryptographically strong random bytes.
///
/// Holds no mutable state; share it freely between threads.
pub struct SecureRandomSource {
    backends: [BoxedBackend; 3],
    max_request: usize,
}

impl SecureRandomSource {
    /// Creates a source with the default device path and request limit.
    pub fn new() -> Self {
        Self::with_config(SourceConfig::default())
    }

    pub fn with_config(config: SourceConfig) -> Self {
        Self::from_backends(
            KernelBackend::new(),
            DeviceFileBackend::new(config.device_path),
            LibraryBackend::new(),
            config.max_request,
        )
    }

    /// One backend per strategy, in preference order.
    pub(crate) fn from_backends<K, D, L>(kernel: K, device: D, library: L, max_request: usize) -> Self
    where
        K: Backend + Send + Sync + 'static,
        D: Backend + Send + Sync + 'static,
        L: Backend + Send + Sync + 'static,
    {
        let backends: [BoxedBackend; 3] = [Box::new(kernel), Box::new(device), Box::new(library)];
        debug_assert!(backends
            .iter()
            .map(|b| b.kind())
            .eq(EntropySource::PREFERENCE.iter().copied()));

        Self {
            backends,
            max_request,
        }
    }

    /// Largest `length` a single call accepts.
    pub fn max_request(&self) -> usize {
        self.max_request
    }

    /// Fills `buffer[..length]` with random bytes.
    ///
    /// # Returns
    /// * `Ok(source)` - the strategy that produced the bytes.
    /// * `Err(EntropyError::InvalidLength)` - `length` is zero, above the maximum, or
    ///   exceeds `buffer.len()`. No source is tried.
    /// * `Err(EntropyError::EntropyUnavailable)` - every strategy failed.
    ///
    /// On error `buffer` is left untouched. Bytes past `length` are never written.
    pub fn fill(&self, buffer: &mut [u8], length: usize) -> AcquisitionResult {
        if length == 0 || length > self.max_request || length > buffer.len() {
            return Err(EntropyError::InvalidLength {
                requested: length,
                capacity: buffer.len(),
                max: self.max_request,
            });
        }

        // Staged so a failing source never leaks partial output to the caller.
        let mut scratch = Zeroizing::new(alloc::vec![0u8; length]);

        for backend in &self.backends {
            let source = backend.kind();
            log::debug!("Requesting {} bytes from {}", length, source);

            match backend.acquire(&mut scratch) {
                Ok(()) => {
                    buffer[..length].copy_from_slice(&scratch);
                    return Ok(source);
                }
                Err(why) => {
                    log::warn!("{}", EntropyError::SourceUnavailable(source, why));
                }
            }
        }

        let last = self.backends[self.backends.len() - 1].kind();
        log::error!("All entropy sources exhausted for a {} byte request", length);
        Err(EntropyError::EntropyUnavailable(last))
    }

    /// Allocates and fills a buffer of `length` bytes.
    pub fn random_bytes(&self, length: usize) -> Result<(Vec<u8>, EntropySource), EntropyError> {
        if length == 0 || length > self.max_request {
            return Err(EntropyError::InvalidLength {
                requested: length,
                capacity: length,
                max: self.max_request,
            });
        }

        let mut bytes = alloc::vec![0u8; length];
        let source = self.fill(&mut bytes, length)?;
        Ok((bytes, source))
    }
}

impl Default for SecureRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SecureRandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureRandomSource")
            .field("chain", &self.backends.iter().map(|b| b.kind()).collect::<Vec<_>>())
            .field("max_request", &self.max_request)
            .finish()
    }
}

/// Fills `buffer[..length]` using a default-configured [`SecureRandomSource`].
pub fn fill(buffer: &mut [u8], length: usize) -> AcquisitionResult {
    SecureRandomSource::new().fill(buffer, length)
}
