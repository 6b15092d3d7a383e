//! Configuration for the secure random source.
//!
//! Populated by the host application and passed to
//! [`SecureRandomSource::with_config`](crate::entropy::secure::SecureRandomSource::with_config).

use std::path::PathBuf;

use crate::entropy::device::DEFAULT_DEVICE_PATH;

/// Upper bound on a single request (1 MiB). Bounds blocking time and catches misuse.
pub const DEFAULT_MAX_REQUEST: usize = 1024 * 1024;

/// Settings for [`SecureRandomSource`](crate::entropy::secure::SecureRandomSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Random device read by the `DeviceFile` strategy.
    pub device_path: PathBuf,

    /// Largest `length` accepted by a single `fill`.
    pub max_request: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            device_path: PathBuf::from(DEFAULT_DEVICE_PATH),
            max_request: DEFAULT_MAX_REQUEST,
        }
    }
}
