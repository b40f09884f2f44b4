//! 128-bit opaque identifiers for probes, systems, and planets.

use serde::{Deserialize, Serialize};

/// A 128-bit identifier. The all-zero pair is the null sentinel and never
/// denotes a real entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Uid {
    pub hi: u64,
    pub lo: u64,
}

impl Uid {
    pub const NULL: Uid = Uid { hi: 0, lo: 0 };

    pub fn new(hi: u64, lo: u64) -> Self {
        Self { hi, lo }
    }

    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Derives a UID deterministically from the owning sector's RNG stream
    /// plus a small per-entity discriminant, so re-generating the same
    /// sector always yields the same identifiers.
    pub fn derive(rng: &mut crate::prng::Rng, discriminant: u64) -> Self {
        let hi = rng.next() ^ discriminant.rotate_left(17);
        let lo = rng.next();
        let uid = Uid { hi, lo };
        if uid.is_null() {
            Uid { hi: 1, lo }
        } else {
            uid
        }
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Rng;

    #[test]
    fn null_is_zero_zero() {
        assert!(Uid::NULL.is_null());
        assert!(Uid::default().is_null());
    }

    #[test]
    fn equality_requires_both_halves() {
        let a = Uid::new(1, 2);
        let b = Uid::new(1, 3);
        assert_ne!(a, b);
        assert_eq!(a, Uid::new(1, 2));
    }

    #[test]
    fn derive_never_produces_null() {
        let mut rng = Rng::seed(0);
        for i in 0..1000 {
            assert!(!Uid::derive(&mut rng, i).is_null());
        }
    }
}
