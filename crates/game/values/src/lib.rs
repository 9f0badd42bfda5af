//! Bounded value types, change notification and weighted tables for game logic.
//!
//! `game-values` holds the small stateful primitives gameplay code builds on:
//!
//! - [`BoundedRange`]: a `(min, max)` pair whose `min` fills towards `max`
//!   (cooldowns, charges), with `change` and `maximize` notifications
//! - [`BoundedScope`]: a current value clamped between fixed bounds
//! - [`ChangeNotifier`]: the ordered, fallible observer registry both use
//! - [`WeightedList`] / [`CumulativeWeightedList`]: weighted random selection
//!
//! All randomness goes through the [`RandomSource`] trait; [`PcgSource`] is the
//! deterministic, seedable implementation. Nothing here performs I/O.
pub mod config;
pub mod error;
pub mod notify;
pub mod range;
pub mod rng;
pub mod scope;
pub mod weighted;

pub use config::{SamplingStrategy, ValuesConfig};
pub use error::{ErrorSeverity, ValueError};
pub use notify::{ChangeNotifier, NotifyError, ObserverError, ObserverResult, SubscriptionId};
pub use range::{Bound, BoundedRange, FloatRange, IntRange, RangeBuilder};
#[cfg(any(test, feature = "test-support"))]
pub use rng::ScriptedSource;
pub use rng::{PcgSource, RandomSource};
pub use scope::BoundedScope;
pub use weighted::{
    CumulativeWeightedList, SampleError, WeightError, WeightedList, WeightedListItem,
    WeightedSample,
};
