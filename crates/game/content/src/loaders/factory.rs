//! Content factory for building value types from data files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use game_values::{ValuesConfig, WeightedSample};

use crate::loaders::{ConfigLoader, LoadResult, PresetLoader, Presets, TableSet, TablesLoader};

/// Content factory that loads all value content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── tables.ron
/// └── presets.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load value configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<ValuesConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load weighted tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<TableSet> {
        let path = self.data_dir.join("tables.ron");
        TablesLoader::load(&path)
    }

    /// Load range and scope presets from `presets.ron`.
    pub fn load_presets(&self) -> LoadResult<Presets> {
        let path = self.data_dir.join("presets.ron");
        PresetLoader::load(&path)
    }

    /// Load every table and convert it with the strategy from `config`.
    pub fn load_samplers(
        &self,
        config: &ValuesConfig,
    ) -> LoadResult<HashMap<String, Box<dyn WeightedSample<String>>>> {
        Ok(self.load_tables()?.into_samplers(config.sampling))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
