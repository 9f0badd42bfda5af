use crate::rng::PcgSource;

/// How weighted tables are sampled.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SamplingStrategy {
    /// Pick from the materialized expanded sequence. O(total weight).
    #[default]
    Expanded,
    /// Prefix sums with binary search. O(log n) per draw.
    Cumulative,
}

/// Runtime configuration for value types and weighted tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValuesConfig {
    /// Seed for the default random source.
    pub seed: u64,
    /// Sampler used for tables built from content.
    pub sampling: SamplingStrategy,
}

impl ValuesConfig {
    // ===== compile-time limits =====
    /// Largest total weight a table may hold. Draws go through
    /// `RandomSource::uniform_int`, whose domain is `i32`.
    pub const MAX_TOTAL_WEIGHT: u32 = i32::MAX as u32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0x5EED_0F_7AB1E5;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            sampling: SamplingStrategy::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingStrategy) -> Self {
        self.sampling = sampling;
        self
    }

    /// Random source seeded from this config.
    pub fn rng(&self) -> PcgSource {
        PcgSource::new(self.seed)
    }
}

impl Default for ValuesConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomSource;

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!(
            "Cumulative".parse::<SamplingStrategy>(),
            Ok(SamplingStrategy::Cumulative)
        );
        assert_eq!(SamplingStrategy::Expanded.to_string(), "expanded");
    }

    #[test]
    fn rng_is_reproducible_from_config() {
        let config = ValuesConfig::new().with_seed(11);
        let mut a = config.rng();
        let mut b = config.rng();
        assert_eq!(a.uniform_int(0, 1000), b.uniform_int(0, 1000));
    }
}
