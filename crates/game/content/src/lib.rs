//! Data-driven content definitions and loaders.
//!
//! This crate builds `game-values` types from content files:
//! - Weighted tables (loot, spawns, names) via RON
//! - Range and scope presets (cooldowns, resource pools) via RON
//! - Value configuration (seed, sampling strategy) via TOML
//!
//! Content is read once at startup; the resulting values are owned by
//! gameplay code from then on.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, PresetLoader, Presets, TableSet, TablesLoader,
};
