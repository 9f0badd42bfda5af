//! Weighted random selection.
//!
//! Two samplers share the [`WeightedSample`] contract:
//!
//! - [`WeightedList`]: materializes the expanded sequence (each item repeated
//!   `weight` times) and picks uniformly from it. O(total weight) time per
//!   draw, no allocation.
//!   Content-authored tables have small totals, so this is the default.
//! - [`CumulativeWeightedList`]: prefix sums plus binary search. O(n) to build,
//!   O(log n) per draw.
//!
//! Both consume exactly one `uniform_int(0, total - 1)` per draw and map the
//! same draw to the same item, so they can be swapped without changing a
//! seeded replay.

mod cumulative;
mod error;
mod item;

pub use cumulative::CumulativeWeightedList;
pub use error::{SampleError, WeightError};
pub use item::WeightedListItem;

use crate::config::{SamplingStrategy, ValuesConfig};
use crate::rng::RandomSource;

/// Common contract for weighted samplers.
pub trait WeightedSample<T> {
    /// Sum of all entry weights.
    fn total_weight(&self) -> u32;

    /// Draws one item with probability proportional to its weight.
    fn sample(&self, rng: &mut dyn RandomSource) -> Result<&T, SampleError>;

    /// True when nothing can be drawn (zero total weight).
    fn is_empty(&self) -> bool {
        self.total_weight() == 0
    }

    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

/// Draws the index into `0..total`, validating the collaborator's answer.
pub(crate) fn draw<R: RandomSource + ?Sized>(rng: &mut R, total: u32) -> Result<u32, SampleError> {
    if total == 0 {
        return Err(SampleError::EmptyCollection);
    }
    // total <= MAX_TOTAL_WEIGHT == i32::MAX, so this cannot truncate
    let draw = rng.uniform_int(0, (total - 1) as i32);
    let index = u32::try_from(draw)
        .ok()
        .filter(|index| *index < total)
        .ok_or(SampleError::DrawOutOfRange { draw, total })?;

    tracing::debug!(target: "game_values::weighted", total, draw, "weighted draw");
    Ok(index)
}

/// Ordered list of items with positive integer weights.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<WeightedListItem<T>>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct WeightedList<T> {
    items: Vec<WeightedListItem<T>>,
    total: u32,
}

impl<T> WeightedList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Appends `item` with `weight`.
    ///
    /// Rejects `weight <= 0` and totals beyond
    /// [`ValuesConfig::MAX_TOTAL_WEIGHT`]; on error the list is unchanged.
    pub fn add(&mut self, item: T, weight: i64) -> Result<(), WeightError> {
        match WeightedListItem::with_weight(item, weight) {
            Ok(entry) => self.push(entry),
            Err(err) => {
                tracing::warn!(target: "game_values::weighted", weight, error = %err, "rejected weighted entry");
                Err(err)
            }
        }
    }

    /// Builder form of [`add`](Self::add).
    pub fn with(mut self, item: T, weight: i64) -> Result<Self, WeightError> {
        self.add(item, weight)?;
        Ok(self)
    }

    /// Appends an already-weighted entry.
    pub fn push(&mut self, entry: WeightedListItem<T>) -> Result<(), WeightError> {
        let limit = ValuesConfig::MAX_TOTAL_WEIGHT;
        let total = self
            .total
            .checked_add(entry.weight())
            .filter(|total| *total <= limit)
            .ok_or_else(|| WeightError::TotalOverflow {
                total: self.total,
                weight: i64::from(entry.weight()),
                limit,
            })?;

        self.total = total;
        self.items.push(entry);
        Ok(())
    }

    pub fn items(&self) -> &[WeightedListItem<T>] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, WeightedListItem<T>> {
        self.items.iter()
    }

    /// Number of entries (not the total weight).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total_weight(&self) -> u32 {
        self.total
    }

    /// True when the total weight is zero.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Every item repeated `weight` times, in entry order.
    ///
    /// This is the reference semantics for sampling. Cost is O(total weight).
    pub fn to_expanded_sequence(&self) -> Vec<&T> {
        self.items.iter().flat_map(|entry| entry.expanded()).collect()
    }

    /// Uniform pick over [`to_expanded_sequence`](Self::to_expanded_sequence).
    ///
    /// Walks the expanded sequence lazily; nothing is collected.
    pub fn random_item<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<&T, SampleError> {
        let index = draw(rng, self.total)?;
        self.items
            .iter()
            .flat_map(|entry| entry.expanded())
            .nth(index as usize)
            .ok_or(SampleError::EmptyCollection)
    }

    /// Prefix-sum sampler over a copy of this list.
    pub fn to_cumulative(&self) -> CumulativeWeightedList<T>
    where
        T: Clone,
    {
        CumulativeWeightedList::from(self.clone())
    }

    /// Boxes this list as a sampler using the given strategy.
    pub fn into_sampler(self, strategy: SamplingStrategy) -> Box<dyn WeightedSample<T>>
    where
        T: 'static,
    {
        match strategy {
            SamplingStrategy::Expanded => Box::new(self),
            SamplingStrategy::Cumulative => Box::new(CumulativeWeightedList::from(self)),
        }
    }
}

impl<T> Default for WeightedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedSample<T> for WeightedList<T> {
    fn total_weight(&self) -> u32 {
        self.total
    }

    fn sample(&self, rng: &mut dyn RandomSource) -> Result<&T, SampleError> {
        self.random_item(rng)
    }
}

impl<T> TryFrom<Vec<WeightedListItem<T>>> for WeightedList<T> {
    type Error = WeightError;

    fn try_from(entries: Vec<WeightedListItem<T>>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        for entry in entries {
            list.push(entry)?;
        }
        Ok(list)
    }
}

impl<T> TryFrom<Vec<(T, i64)>> for WeightedList<T> {
    type Error = WeightError;

    fn try_from(pairs: Vec<(T, i64)>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        for (item, weight) in pairs {
            list.add(item, weight)?;
        }
        Ok(list)
    }
}

/// Serializes as the plain entry sequence, the same shape it deserializes from.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for WeightedList<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'a, T> IntoIterator for &'a WeightedList<T> {
    type Item = &'a WeightedListItem<T>;
    type IntoIter = core::slice::Iter<'a, WeightedListItem<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PcgSource, ScriptedSource};
    use crate::ValueError;

    fn a3_b1() -> WeightedList<&'static str> {
        WeightedList::new().with("A", 3).unwrap().with("B", 1).unwrap()
    }

    #[test]
    fn expanded_sequence_repeats_by_weight() {
        let list = a3_b1();
        assert_eq!(list.to_expanded_sequence(), vec![&"A", &"A", &"A", &"B"]);
        assert_eq!(list.total_weight(), 4);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn add_rejects_non_positive_weight_and_keeps_list() {
        let mut list = a3_b1();
        let err = list.add("C", 0).unwrap_err();
        assert_eq!(err, WeightError::NonPositive { weight: 0 });
        assert_eq!(err.error_code(), "WEIGHT_NON_POSITIVE");
        assert!(list.add("C", -2).is_err());
        assert_eq!(list.len(), 2);
        assert_eq!(list.total_weight(), 4);
    }

    #[test]
    fn add_rejects_total_overflow() {
        let mut list = WeightedList::new();
        list.add("big", i64::from(ValuesConfig::MAX_TOTAL_WEIGHT)).unwrap();
        let err = list.add("one more", 1).unwrap_err();
        assert!(matches!(err, WeightError::TotalOverflow { .. }));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn empty_list_cannot_be_sampled() {
        let list: WeightedList<u8> = WeightedList::new();
        let mut rng = ScriptedSource::new();
        assert!(list.is_empty());
        assert_eq!(list.random_item(&mut rng), Err(SampleError::EmptyCollection));
        assert!(rng.int_calls.is_empty());
    }

    #[test]
    fn draw_indexes_expanded_sequence() {
        let list = a3_b1();
        let mut rng = ScriptedSource::new().with_ints([0, 2, 3]);
        assert_eq!(list.random_item(&mut rng), Ok(&"A"));
        assert_eq!(list.random_item(&mut rng), Ok(&"A"));
        assert_eq!(list.random_item(&mut rng), Ok(&"B"));
        assert_eq!(rng.int_calls, vec![(0, 3); 3]);
    }

    #[test]
    fn heavy_entry_samples_at_both_ends() {
        let list = WeightedList::new()
            .with("common", 20_000_000)
            .unwrap()
            .with("rare", 1)
            .unwrap();
        let mut rng = ScriptedSource::new().with_ints([0, 19_999_999, 20_000_000]);
        assert_eq!(list.random_item(&mut rng), Ok(&"common"));
        assert_eq!(list.random_item(&mut rng), Ok(&"common"));
        assert_eq!(list.random_item(&mut rng), Ok(&"rare"));
        assert_eq!(rng.int_calls, vec![(0, 20_000_000); 3]);
    }

    #[test]
    fn out_of_range_draw_is_reported() {
        let list = a3_b1();
        let mut rng = ScriptedSource::new().with_ints([9]);
        assert_eq!(
            list.random_item(&mut rng),
            Err(SampleError::DrawOutOfRange { draw: 9, total: 4 })
        );
    }

    #[test]
    fn sampling_frequency_tracks_weights() {
        let list = a3_b1();
        let mut rng = PcgSource::new(2024);
        let trials = 10_000;
        let a_count = (0..trials)
            .filter(|_| *list.random_item(&mut rng).unwrap() == "A")
            .count();
        let b_count = trials - a_count;

        let ratio = a_count as f64 / b_count as f64;
        assert!((2.6..3.4).contains(&ratio), "A:B ratio was {ratio}");
    }

    #[test]
    fn strategies_agree_for_every_draw() {
        let list = WeightedList::new()
            .with('a', 2)
            .unwrap()
            .with('b', 5)
            .unwrap()
            .with('c', 1)
            .unwrap();
        let cumulative = list.to_cumulative();

        for draw in 0..list.total_weight() as i32 {
            let mut left = ScriptedSource::new().with_ints([draw]);
            let mut right = ScriptedSource::new().with_ints([draw]);
            assert_eq!(
                list.random_item(&mut left),
                cumulative.random_item(&mut right),
                "draw {draw}"
            );
        }
    }

    #[test]
    fn boxed_samplers_share_contract() {
        for strategy in [SamplingStrategy::Expanded, SamplingStrategy::Cumulative] {
            let sampler = a3_b1().into_sampler(strategy);
            let mut rng = ScriptedSource::new().with_ints([3]);
            assert_eq!(sampler.total_weight(), 4);
            assert!(sampler.is_not_empty());
            assert_eq!(sampler.sample(&mut rng), Ok(&"B"));
        }
    }

    #[test]
    fn try_from_pairs_validates() {
        let ok = WeightedList::try_from(vec![("x", 2_i64), ("y", 1)]).unwrap();
        assert_eq!(ok.total_weight(), 3);
        assert!(WeightedList::try_from(vec![("x", 2_i64), ("y", 0)]).is_err());
    }
}
