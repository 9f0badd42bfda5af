//! Range and scope preset loader.

use std::collections::HashMap;
use std::path::Path;

use game_values::{BoundedScope, FloatRange, IntRange};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Named bounds for ranges and scopes.
///
/// Presets hold plain numbers; every lookup builds a fresh value with no
/// observers, so two systems never share notifier state by accident.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Presets {
    ranges: HashMap<String, (f32, f32)>,
    int_ranges: HashMap<String, (i32, i32)>,
    scopes: HashMap<String, (f32, f32, f32)>,
}

impl Presets {
    /// Fresh float range for preset `name`.
    pub fn range(&self, name: &str) -> Option<FloatRange> {
        self.ranges
            .get(name)
            .map(|&(min, max)| FloatRange::new(min, max))
    }

    /// Fresh int range for preset `name`.
    pub fn int_range(&self, name: &str) -> Option<IntRange> {
        self.int_ranges
            .get(name)
            .map(|&(min, max)| IntRange::new(min, max))
    }

    /// Fresh scope for preset `name`.
    pub fn scope(&self, name: &str) -> Option<BoundedScope> {
        self.scopes
            .get(name)
            .map(|&(min, max, value)| BoundedScope::new(min, max, value))
    }

    /// Total number of presets across all kinds.
    pub fn len(&self) -> usize {
        self.ranges.len() + self.int_ranges.len() + self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loader for range/scope presets from RON files.
pub struct PresetLoader;

impl PresetLoader {
    /// Load presets from a RON file.
    ///
    /// ```ron
    /// (
    ///     ranges: { "dash_cooldown": (0.0, 1.5) },
    ///     int_ranges: { "potion_charges": (0, 3) },
    ///     scopes: { "health": (0.0, 100.0, 100.0) },
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<Presets> {
        let content = read_file(path)?;
        let presets = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load presets at {:?}: {}", path, e))?;

        tracing::info!(
            target: "game_content::presets",
            path = %path.display(),
            presets = presets.len(),
            "loaded range presets"
        );
        Ok(presets)
    }

    /// Parse presets from a RON string.
    pub fn parse(content: &str) -> LoadResult<Presets> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse presets RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_fresh_values() {
        let presets = PresetLoader::parse(
            r#"(
                ranges: { "dash": (0.0, 1.5) },
                int_ranges: { "charges": (1, 3) },
                scopes: { "health": (0.0, 100.0, 80.0) },
            )"#,
        )
        .unwrap();

        assert_eq!(presets.range("dash"), Some(FloatRange::new(0.0, 1.5)));
        assert_eq!(presets.int_range("charges").unwrap().ratio(), 1.0 / 3.0);
        assert_eq!(presets.scope("health").unwrap().ratio(), 0.8);
        assert_eq!(presets.len(), 3);
    }

    #[test]
    fn sections_are_optional() {
        let presets = PresetLoader::parse("(scopes: {})").unwrap();
        assert!(presets.is_empty());
        assert!(presets.range("dash").is_none());
    }
}
