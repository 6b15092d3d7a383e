//! Random Device Source.
//!
//! Reads from the platform random device (`/dev/urandom` by default).
//!
//! # Resource handling
//! The handle is opened read-only for a single call and dropped on every exit
//! path, including a failed or short read. Exactly one `read` is issued; a
//! short read fails the source rather than being topped up.

use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::{Backend, EntropySource, SourceFailure};

/// Canonical random device path.
pub const DEFAULT_DEVICE_PATH: &str = "/dev/urandom";

/// Opens a fresh readable handle to the random device.
pub trait DeviceOpener {
    type Handle: Read;

    fn open(&self) -> io::Result<Self::Handle>;
}

/// Opens a device node by path, read-only.
#[derive(Debug, Clone)]
pub struct PathOpener {
    path: PathBuf,
}

impl PathOpener {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeviceOpener for PathOpener {
    type Handle = File;

    fn open(&self) -> io::Result<File> {
        OpenOptions::new().read(true).open(&self.path)
    }
}

/// Random device backend.
#[derive(Debug, Clone)]
pub struct DeviceFileBackend<O = PathOpener> {
    opener: O,
}

impl DeviceFileBackend<PathOpener> {
    /// Creates a backend reading from `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            opener: PathOpener::new(path),
        }
    }
}

impl Default for DeviceFileBackend<PathOpener> {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_PATH)
    }
}

impl<O: DeviceOpener> DeviceFileBackend<O> {
    pub fn with_opener(opener: O) -> Self {
        Self { opener }
    }
}

impl<O: DeviceOpener> Backend for DeviceFileBackend<O> {
    fn kind(&self) -> EntropySource {
        EntropySource::DeviceFile
    }

    fn acquire(&self, dest: &mut [u8]) -> Result<(), SourceFailure> {
        let mut handle = self.opener.open()?;
        let received = handle.read(dest)?;
        if received != dest.len() {
            return Err(SourceFailure::ShortRead {
                requested: dest.len(),
                received,
            });
        }
        Ok(())
    }
}
