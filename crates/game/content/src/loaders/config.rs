//! Value configuration loader.

use std::path::Path;

use game_values::ValuesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for value configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`ValuesConfig::default`].
    ///
    /// ```toml
    /// seed = 1234
    /// sampling = "cumulative"
    /// ```
    pub fn load(path: &Path) -> LoadResult<ValuesConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<ValuesConfig> {
        let config: ValuesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        tracing::info!(
            target: "game_content::config",
            seed = config.seed,
            sampling = %config.sampling,
            "loaded value config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_values::SamplingStrategy;

    #[test]
    fn parses_full_config() {
        let config = ConfigLoader::parse("seed = 42\nsampling = \"cumulative\"\n").unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.sampling, SamplingStrategy::Cumulative);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, ValuesConfig::default());
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(ConfigLoader::parse("sampling = \"alias\"").is_err());
    }
}
