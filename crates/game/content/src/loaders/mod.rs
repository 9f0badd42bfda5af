//! Content loaders for reading value data from files.
//!
//! Each loader converts one RON/TOML file into `game-values` types, running
//! every entry through the same validation the types apply at runtime.

pub mod config;
pub mod factory;
pub mod presets;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use presets::{PresetLoader, Presets};
pub use tables::{TableSet, TablesLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
