//! Legacy Seeded PRNG. NOT CRYPTOGRAPHIC.
//!
//! Reproduces the classic `srand(seed); rand()` pattern: a 32-bit linear
//! congruential generator seeded from the wall clock or from one device read.
//! Output is predictable from a handful of samples. Use it for simulation and
//! demonstrations only.
//!
//! # Isolation
//! `LegacyRng` shares no trait with the secure backends and does not implement
//! `rand_core::RngCore`, so it cannot be handed to code expecting a CSPRNG and
//! cannot be placed in the secure chain.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Largest value returned by [`LegacyRng::next_value`].
pub const LEGACY_RAND_MAX: u32 = 32767;

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;

/// Non-cryptographic linear congruential generator.
#[derive(Debug, Clone)]
pub struct LegacyRng {
    state: u32,
}

impl LegacyRng {
    /// Seeds the generator explicitly. Equal seeds give equal sequences.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds from the current time (`seconds ^ nanoseconds`).
    pub fn from_clock() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::new((now.as_secs() as u32) ^ now.subsec_nanos())
    }

    /// Seeds from a single native-endian `u32` read from `path`.
    pub fn from_device<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let mut seed = [0u8; 4];
        File::open(path)?.read_exact(&mut seed)?;
        Ok(Self::new(u32::from_ne_bytes(seed)))
    }

    /// Next value in `0..=LEGACY_RAND_MAX`.
    pub fn next_value(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state / 65_536) % (LEGACY_RAND_MAX + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        let mut rng = LegacyRng::new(1);
        let values: Vec<u32> = (0..4).map(|_| rng.next_value()).collect();
        assert_eq!(values, [16838, 5758, 10113, 17515]);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = LegacyRng::new(0xDEAD_BEEF);
        let mut b = LegacyRng::new(0xDEAD_BEEF);
        for _ in 0..100 {
            let v = a.next_value();
            assert_eq!(v, b.next_value());
            assert!(v <= LEGACY_RAND_MAX);
        }
    }

    #[test]
    fn test_seed_from_file() {
        let dir = std::env::temp_dir().join("securerand_test_legacy");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("seed.bin");
        std::fs::write(&path, 1u32.to_ne_bytes()).unwrap();

        let mut rng = LegacyRng::from_device(&path).unwrap();
        assert_eq!(rng.next_value(), 16838);

        std::fs::write(&path, [0u8; 2]).unwrap();
        assert!(LegacyRng::from_device(&path).is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_clock_seed_in_range() {
        let mut rng = LegacyRng::from_clock();
        assert!(rng.next_value() <= LEGACY_RAND_MAX);
    }
}
