//! Secure entropy acquisition.
//!
//! This module defines the closed set of entropy strategies, the capability every
//! strategy implements, and the error types shared by all of them.
//!
//! # Design
//! - **Fixed Order**: Kernel CSPRNG, then the random device, then a library CSPRNG.
//! - **All-or-Nothing**: A source either fills the whole request or fails. Short reads fail.
//! - **No Retries**: A failed source is skipped for the rest of the call.
//! - **Stateless**: Nothing is cached or reseeded between calls.

use core::fmt;

pub mod device;
pub mod kernel;
pub mod library;
pub mod secure;
pub mod sources;

/// Identifies the strategy that produced (or failed to produce) a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntropySource {
    /// Direct `getrandom`-style system call.
    KernelCsprng,
    /// Read from the platform random device.
    DeviceFile,
    /// User-space cryptographic library RNG seeded from the kernel.
    LibraryCsprng,
}

impl EntropySource {
    /// Fallback order used by [`secure::SecureRandomSource`].
    pub const PREFERENCE: [EntropySource; 3] = [
        EntropySource::KernelCsprng,
        EntropySource::DeviceFile,
        EntropySource::LibraryCsprng,
    ];

    /// Short stable name, used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            EntropySource::KernelCsprng => "KernelCSPRNG",
            EntropySource::DeviceFile => "DeviceFile",
            EntropySource::LibraryCsprng => "LibraryCSPRNG",
        }
    }
}

impl fmt::Display for EntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a single backend could not satisfy a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFailure {
    /// The mechanism does not exist on this platform.
    NotSupported,
    /// The OS reported an error (raw errno when available).
    Os(Option<i32>),
    /// Fewer bytes were delivered than requested.
    ShortRead { requested: usize, received: usize },
    /// The cryptographic library refused to produce output.
    Library,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFailure::NotSupported => write!(f, "not supported on this platform"),
            SourceFailure::Os(Some(code)) => write!(f, "OS error {}", code),
            SourceFailure::Os(None) => write!(f, "OS error"),
            SourceFailure::ShortRead { requested, received } => {
                write!(f, "short read ({} of {} bytes)", received, requested)
            }
            SourceFailure::Library => write!(f, "library RNG failure"),
        }
    }
}

impl From<std::io::Error> for SourceFailure {
    fn from(err: std::io::Error) -> Self {
        SourceFailure::Os(err.raw_os_error())
    }
}

/// Coarse classification of [`EntropyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A single source failed. Never returned by `fill`.
    SourceUnavailable,
    /// Every source failed.
    EntropyUnavailable,
    /// The requested length violates the call's preconditions.
    InvalidLength,
}

/// Error types for entropy acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// One source failed for this call.
    SourceUnavailable(EntropySource, SourceFailure),
    /// All sources were exhausted. Carries the last source tried.
    EntropyUnavailable(EntropySource),
    /// `length` was zero, above the configured maximum, or larger than the buffer.
    InvalidLength {
        requested: usize,
        capacity: usize,
        max: usize,
    },
}

impl EntropyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EntropyError::SourceUnavailable(..) => ErrorKind::SourceUnavailable,
            EntropyError::EntropyUnavailable(_) => ErrorKind::EntropyUnavailable,
            EntropyError::InvalidLength { .. } => ErrorKind::InvalidLength,
        }
    }

    /// The source the error refers to, if any.
    pub fn source_tag(&self) -> Option<EntropySource> {
        match self {
            EntropyError::SourceUnavailable(source, _) => Some(*source),
            EntropyError::EntropyUnavailable(source) => Some(*source),
            EntropyError::InvalidLength { .. } => None,
        }
    }
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropyError::SourceUnavailable(source, why) => {
                write!(f, "Entropy source {} unavailable: {}", source, why)
            }
            EntropyError::EntropyUnavailable(_) => write!(f, "No entropy source available"),
            EntropyError::InvalidLength {
                requested,
                capacity,
                max,
            } => write!(
                f,
                "Invalid length {} (buffer holds {}, maximum is {})",
                requested, capacity, max
            ),
        }
    }
}

impl std::error::Error for EntropyError {}

/// Outcome of a `fill` call: the tag of the source that satisfied it.
pub type AcquisitionResult = Result<EntropySource, EntropyError>;

/// A single acquisition strategy.
pub trait Backend {
    /// Which strategy this backend implements.
    fn kind(&self) -> EntropySource;

    /// Fills all of `dest` or fails. Implementations must not retry.
    fn acquire(&self, dest: &mut [u8]) -> Result<(), SourceFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_order() {
        assert_eq!(
            EntropySource::PREFERENCE,
            [
                EntropySource::KernelCsprng,
                EntropySource::DeviceFile,
                EntropySource::LibraryCsprng
            ]
        );
    }

    #[test]
    fn test_error_kind_and_tag() {
        let err = EntropyError::SourceUnavailable(EntropySource::DeviceFile, SourceFailure::Os(Some(2)));
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
        assert_eq!(err.source_tag(), Some(EntropySource::DeviceFile));
        assert_eq!(err.to_string(), "Entropy source DeviceFile unavailable: OS error 2");

        let err = EntropyError::InvalidLength { requested: 0, capacity: 4, max: 16 };
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
        assert_eq!(err.source_tag(), None);
    }

    #[test]
    fn test_io_error_keeps_errno() {
        let io = std::io::Error::from_raw_os_error(libc::ENOENT);
        assert_eq!(SourceFailure::from(io), SourceFailure::Os(Some(libc::ENOENT)));
    }
}
