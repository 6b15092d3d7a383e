//! Standard Entropy Sources Registry.
//!
//! Re-exports the backends of the secure chain for convenient access.

pub use super::device::{DeviceFileBackend, DeviceOpener, PathOpener};
pub use super::kernel::KernelBackend;
pub use super::library::LibraryBackend;
