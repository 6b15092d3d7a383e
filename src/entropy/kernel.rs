//! Kernel CSPRNG Source.
//!
//! Calls `getrandom(2)` directly with no flags. The call blocks only until the
//! kernel pool is initialized at boot and does not consume a file descriptor.
//!
//! On targets without the syscall the source reports `NotSupported` so the
//! caller moves on to the next strategy.

use super::{Backend, EntropySource, SourceFailure};

/// `getrandom(2)` backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct KernelBackend {
    _private: (),
}

impl KernelBackend {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Backend for KernelBackend {
    fn kind(&self) -> EntropySource {
        EntropySource::KernelCsprng
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn acquire(&self, dest: &mut [u8]) -> Result<(), SourceFailure> {
        // Safety: the pointer and length describe `dest`, which we borrow mutably.
        let ret = unsafe { libc::getrandom(dest.as_mut_ptr().cast(), dest.len(), 0) };
        if ret < 0 {
            return Err(std::io::Error::last_os_error().into());
        }

        let received = ret as usize;
        if received != dest.len() {
            return Err(SourceFailure::ShortRead {
                requested: dest.len(),
                received,
            });
        }
        Ok(())
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    fn acquire(&self, _dest: &mut [u8]) -> Result<(), SourceFailure> {
        Err(SourceFailure::NotSupported)
    }
}
