//! RNG module - seeded shuffling for deterministic deals
//!
//! Deals are driven by ChaCha8 seeded from a `u64`, so the same seed yields
//! the same layout on every platform. Seeds can also be derived from text
//! (a date for a daily deal, a player-chosen phrase) via FNV-1a.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deal seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub u64);

impl Seed {
    pub fn value(self) -> u64 {
        self.0
    }

    /// Fresh seed from the thread-local generator
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Hash arbitrary text into a seed (FNV-1a 64)
    pub fn from_text(text: &str) -> Self {
        let mut hasher = Fnv1a64::new();
        hasher.write(text.as_bytes());
        Self(hasher.finish())
    }

    /// Parse user input
    ///
    /// Decimal digits (with optional `_` separators) are taken literally; any
    /// other non-empty text is hashed. Blank input yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use klondike_core::Seed;
    ///
    /// assert_eq!(Seed::parse("1_000"), Some(Seed(1000)));
    /// assert_eq!(Seed::parse("  "), None);
    /// assert_eq!(Seed::parse("2026-10-14"), Some(Seed::from_text("2026-10-14")));
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let normalized = trimmed.replace('_', "");
        match normalized.parse::<u64>() {
            Ok(value) => Some(Self(value)),
            Err(_) => Some(Self::from_text(trimmed)),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Seeded generator used by the dealer
#[derive(Debug, Clone)]
pub struct DealRng {
    rng: ChaCha8Rng,
}

impl DealRng {
    pub fn new(seed: Seed) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed.value()),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.random()
    }

    /// Uniform value in `[0, max)`; `max` must be non-zero
    pub fn next_range(&mut self, max: usize) -> usize {
        self.rng.random_range(0..max)
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range(i + 1);
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = DealRng::new(Seed(12345));
        let mut rng2 = DealRng::new(Seed(12345));

        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = DealRng::new(Seed(12345));
        let mut rng2 = DealRng::new(Seed(54321));
        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut values: Vec<u32> = (0..52).collect();
        DealRng::new(Seed(7)).shuffle(&mut values);
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, (0..52).collect::<Vec<_>>());
        assert_ne!(values, sorted);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = DealRng::new(Seed(1));
        for max in 1..60 {
            assert!(rng.next_range(max) < max);
        }
    }

    #[test]
    fn test_seed_parse() {
        assert_eq!(Seed::parse("42"), Some(Seed(42)));
        assert_eq!(Seed::parse(" 18_446_744_073_709_551_615 "), Some(Seed(u64::MAX)));
        assert_eq!(Seed::parse(""), None);
        assert_eq!(Seed::parse("daily"), Some(Seed::from_text("daily")));
        assert_ne!(Seed::from_text("2026-10-14"), Seed::from_text("2026-10-15"));
    }

    #[test]
    fn test_fnv_reference_value() {
        // FNV-1a 64 of the empty string is the offset basis.
        assert_eq!(Seed::from_text("").value(), 0xcbf2_9ce4_8422_2325);
        assert_eq!(Seed::from_text("a").value(), 0xaf63_dc4c_8601_ec8c);
    }
}
