//! Random source collaborator for bounded values and weighted tables.
//!
//! Everything in this crate that needs randomness goes through
//! [`RandomSource`], so callers can plug in a seeded generator for replays or a
//! scripted one for tests.
//!
//! # Determinism
//!
//! [`PcgSource`] is fully deterministic: given the same seed it produces the
//! same sequence of values on every platform.

use crate::range::clamp;

/// Uniform random source.
///
/// Only [`uniform_float`](Self::uniform_float) and
/// [`uniform_int`](Self::uniform_int) are required; every other method is
/// derived from them.
pub trait RandomSource {
    /// Uniform float in `[min, max]`. `max` is treated as reachable.
    fn uniform_float(&mut self, min: f32, max: f32) -> f32;

    /// Uniform integer in `[min, max_inclusive]`.
    fn uniform_int(&mut self, min: i32, max_inclusive: i32) -> i32;

    /// Uniform float in `[0, 1]`.
    fn unit(&mut self) -> f32 {
        self.uniform_float(0.0, 1.0)
    }

    /// Uniform float in `[-range, range]`.
    fn symmetric(&mut self, range: f32) -> f32 {
        self.uniform_float(-range, range)
    }

    /// Returns true with probability `probability` (expected in `[0, 1]`).
    fn chance(&mut self, probability: f32) -> bool {
        self.unit() <= probability
    }

    /// 50% chance of true.
    fn coin_flip(&mut self) -> bool {
        self.uniform_int(0, 1) == 0
    }

    /// Either `1` or `-1`.
    fn direction(&mut self) -> i32 {
        if self.coin_flip() { 1 } else { -1 }
    }

    /// Uniformly picks one element, or `None` for an empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        let last = i32::try_from(items.len().checked_sub(1)?).ok()?;
        let index = self.uniform_int(0, last);
        items.get(usize::try_from(index).ok()?)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_float(&mut self, min: f32, max: f32) -> f32 {
        (**self).uniform_float(min, max)
    }

    fn uniform_int(&mut self, min: i32, max_inclusive: i32) -> i32 {
        (**self).uniform_int(min, max_inclusive)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Uses the PCG-XSH-RR variant: 64-bit LCG state, 32-bit permuted output.
///
/// - **Deterministic**: same seed, same sequence
/// - **Small state**: only 64 bits
/// - **Good quality**: passes PractRand and TestU01
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PcgSource {
    state: u64,
}

impl PcgSource {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator from a seed.
    ///
    /// The seed is mixed once so that small consecutive seeds do not produce
    /// correlated first outputs.
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }

    /// Unbiased value in `[0, bound)` using rejection sampling.
    fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        // bound <= 2^32, so the zone fits in u64
        let span = 1u64 << 32;
        let zone = span - (span % bound);
        loop {
            let value = u64::from(self.next_u32());
            if value < zone {
                return value % bound;
            }
        }
    }
}

impl RandomSource for PcgSource {
    fn uniform_float(&mut self, min: f32, max: f32) -> f32 {
        // 24 random bits over 2^24 - 1 so that 1.0 is reachable
        let unit = (self.next_u32() >> 8) as f32 / ((1u32 << 24) - 1) as f32;
        // `max - min` may overflow, and rounding may step one ulp past a bound
        let value = min * (1.0 - unit) + max * unit;
        clamp(value, min.min(max), max.max(min))
    }

    fn uniform_int(&mut self, min: i32, max_inclusive: i32) -> i32 {
        if min >= max_inclusive {
            return min;
        }
        let span = (i64::from(max_inclusive) - i64::from(min) + 1) as u64;
        (i64::from(min) + self.below(span) as i64) as i32
    }
}

/// Scripted random source for deterministic tests.
///
/// Replays queued floats and ints in order. When a queue runs dry the source
/// falls back to the lower bound of the requested range.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    floats: std::collections::VecDeque<f32>,
    ints: std::collections::VecDeque<i32>,
    /// Every `(min, max)` pair passed to `uniform_float`, in call order.
    pub float_calls: Vec<(f32, f32)>,
    /// Every `(min, max_inclusive)` pair passed to `uniform_int`, in call order.
    pub int_calls: Vec<(i32, i32)>,
}

#[cfg(any(test, feature = "test-support"))]
impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues integer draws.
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Queues float draws.
    pub fn with_floats(mut self, floats: impl IntoIterator<Item = f32>) -> Self {
        self.floats.extend(floats);
        self
    }
}

#[cfg(any(test, feature = "test-support"))]
impl RandomSource for ScriptedSource {
    fn uniform_float(&mut self, min: f32, max: f32) -> f32 {
        self.float_calls.push((min, max));
        self.floats.pop_front().unwrap_or(min)
    }

    fn uniform_int(&mut self, min: i32, max_inclusive: i32) -> i32 {
        self.int_calls.push((min, max_inclusive));
        self.ints.pop_front().unwrap_or(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floats_stay_within_bounds() {
        let mut rng = PcgSource::new(11);
        for (min, max) in [(0.1_f32, 0.3_f32), (-f32::MAX, f32::MAX), (1e-3, 1e-3 + 1e-9)] {
            for _ in 0..1_000 {
                let value = rng.uniform_float(min, max);
                assert!(value.is_finite(), "{value} from ({min}, {max})");
                assert!((min..=max).contains(&value), "{value} outside ({min}, {max})");
            }
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PcgSource::new(42);
        let mut b = PcgSource::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PcgSource::new(1);
        let mut b = PcgSource::new(2);
        let same = (0..16).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 16);
    }

    #[test]
    fn uniform_int_stays_inclusive() {
        let mut rng = PcgSource::new(7);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let value = rng.uniform_int(-1, 2);
            assert!((-1..=2).contains(&value));
            seen[(value + 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every value should be drawn");
    }

    #[test]
    fn uniform_int_degenerate_range_returns_min() {
        let mut rng = PcgSource::new(7);
        assert_eq!(rng.uniform_int(5, 5), 5);
        assert_eq!(rng.uniform_int(9, 3), 9);
    }

    #[test]
    fn uniform_int_full_domain_does_not_overflow() {
        let mut rng = PcgSource::new(99);
        for _ in 0..100 {
            rng.uniform_int(i32::MIN, i32::MAX);
        }
    }

    #[test]
    fn uniform_float_within_bounds() {
        let mut rng = PcgSource::new(3);
        for _ in 0..1_000 {
            let value = rng.uniform_float(-2.5, 4.0);
            assert!((-2.5..=4.0).contains(&value));
        }
    }

    #[test]
    fn pick_empty_slice_is_none() {
        let mut rng = PcgSource::new(3);
        let empty: [u8; 0] = [];
        assert!(rng.pick(&empty).is_none());
        assert_eq!(rng.pick(&[9]), Some(&9));
    }

    #[test]
    fn direction_is_unit() {
        let mut rng = ScriptedSource::new().with_ints([0, 1]);
        assert_eq!(rng.direction(), 1);
        assert_eq!(rng.direction(), -1);
    }

    #[test]
    fn scripted_source_records_calls() {
        let mut rng = ScriptedSource::new().with_floats([0.25]);
        assert_eq!(rng.uniform_float(0.0, 1.0), 0.25);
        assert_eq!(rng.uniform_float(3.0, 4.0), 3.0);
        assert_eq!(rng.float_calls, vec![(0.0, 1.0), (3.0, 4.0)]);
    }
}
