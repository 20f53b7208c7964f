//! RNG module - injectable random sources
//!
//! Every random decision in the core (column shuffles, row selection, ticket ids,
//! draws) goes through [`RandomSource`], so tests can pin behaviour with a seed
//! ([`SimpleRng`]) or a fixed script ([`ScriptedRng`]).

/// Source of uniformly distributed 32-bit values.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the raw value (multiply-shift), which matters for LCGs
    /// whose low bits have short periods. Returns 0 when `max` is 0.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of raw values, cycling when exhausted.
///
/// Values go through the same `next_range` mapping as any other source, so a
/// script of `0`s always selects index 0 and `u32::MAX` always selects the last
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }

    /// Script that makes `next_range(max)` return `index` for the given `max`.
    ///
    /// Handy for forcing draws: picks `index` out of a pool of `max` entries.
    pub fn raw_for_index(index: u32, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Smallest raw value whose scaled high bits land on `index`.
        (((index as u64) << 32).div_ceil(max as u64)) as u32
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..=90 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_range_alternation_is_not_periodic() {
        // Low bits of an LCG alternate; the high-bit mapping must not.
        let mut rng = SimpleRng::new(99);
        let picks: Vec<u32> = (0..64).map(|_| rng.next_range(2)).collect();
        let alternating = picks.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternating);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(3);
        let mut values: Vec<u8> = (1..=10).collect();
        rng.shuffle(&mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_scripted_rng_cycles() {
        let mut rng = ScriptedRng::new(vec![1, 2, 3]);
        let got: Vec<u32> = (0..5).map(|_| rng.next_u32()).collect();
        assert_eq!(got, vec![1, 2, 3, 1, 2]);

        let mut empty = ScriptedRng::new(Vec::new());
        assert_eq!(empty.next_u32(), 0);
    }

    #[test]
    fn test_raw_for_index_round_trips_through_next_range() {
        for max in [1u32, 2, 3, 7, 10, 89, 90] {
            for index in 0..max {
                let mut rng = ScriptedRng::new(vec![ScriptedRng::raw_for_index(index, max)]);
                assert_eq!(rng.next_range(max), index, "index {index} of {max}");
            }
        }
    }
}
