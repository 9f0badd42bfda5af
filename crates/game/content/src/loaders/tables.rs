//! Weighted table loader.

use std::collections::HashMap;
use std::path::Path;

use game_values::{SamplingStrategy, WeightedList, WeightedSample};

use crate::loaders::{LoadResult, read_file};

/// Named weighted tables loaded from content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSet {
    tables: HashMap<String, WeightedList<String>>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, table: WeightedList<String>) {
        self.tables.insert(name.into(), table);
    }

    pub fn get(&self, name: &str) -> Option<&WeightedList<String>> {
        self.tables.get(name)
    }

    /// Sampler for table `name` using `strategy`.
    pub fn sampler(
        &self,
        name: &str,
        strategy: SamplingStrategy,
    ) -> Option<Box<dyn WeightedSample<String>>> {
        self.tables
            .get(name)
            .map(|table| table.clone().into_sampler(strategy))
    }

    /// Consumes the set, converting every table with `strategy`.
    pub fn into_samplers(
        self,
        strategy: SamplingStrategy,
    ) -> HashMap<String, Box<dyn WeightedSample<String>>> {
        self.tables
            .into_iter()
            .map(|(name, table)| (name, table.into_sampler(strategy)))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Loader for weighted tables from RON files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load tables from a RON file.
    ///
    /// File format: `HashMap<String, Vec<(String, i64)>>`
    ///
    /// ```ron
    /// {
    ///     "goblin_loot": [("copper", 6), ("dagger", 2), ("amulet", 1)],
    ///     "ambient": [("drip", 1), ("wind", 1)],
    /// }
    /// ```
    ///
    /// A non-positive weight anywhere aborts the whole load.
    pub fn load(path: &Path) -> LoadResult<TableSet> {
        let content = read_file(path)?;
        let tables = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load tables at {:?}: {}", path, e))?;

        tracing::info!(
            target: "game_content::tables",
            path = %path.display(),
            tables = tables.len(),
            "loaded weighted tables"
        );
        Ok(tables)
    }

    /// Parse tables from a RON string.
    pub fn parse(content: &str) -> LoadResult<TableSet> {
        let raw: HashMap<String, Vec<(String, i64)>> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables RON: {}", e))?;

        let mut set = TableSet::new();
        for (name, entries) in raw {
            let table = WeightedList::try_from(entries)
                .map_err(|e| anyhow::anyhow!("Invalid table '{}': {}", name, e))?;
            set.insert(name, table);
        }

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_values::PcgSource;

    const TABLES: &str = r#"{
        "loot": [("gold", 3), ("gem", 1)],
        "empty": [],
    }"#;

    #[test]
    fn parses_tables_in_entry_order() {
        let set = TablesLoader::parse(TABLES).unwrap();
        let loot = set.get("loot").unwrap();
        assert_eq!(loot.total_weight(), 4);
        assert_eq!(loot.items()[0].item(), "gold");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_table_loads_but_cannot_sample() {
        let set = TablesLoader::parse(TABLES).unwrap();
        let sampler = set.sampler("empty", SamplingStrategy::Cumulative).unwrap();
        assert!(sampler.is_empty());
        assert!(sampler.sample(&mut PcgSource::new(1)).is_err());
    }

    #[test]
    fn rejects_non_positive_weight() {
        let err = TablesLoader::parse(r#"{ "bad": [("x", 0)] }"#).unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn unknown_table_has_no_sampler() {
        let set = TablesLoader::parse(TABLES).unwrap();
        assert!(set.sampler("missing", SamplingStrategy::Expanded).is_none());
    }
}
