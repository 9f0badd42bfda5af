//! Prefix-sum weighted sampler.

use super::{SampleError, WeightedList, WeightedSample, draw};
use crate::rng::RandomSource;

/// Weighted sampler backed by cumulative weights and binary search.
///
/// `ends[i]` is the exclusive upper end of item `i`'s slot in `0..total`, so a
/// draw `r` selects the first item whose end is greater than `r`. That is the
/// same item the expanded sequence holds at index `r`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CumulativeWeightedList<T> {
    items: Vec<T>,
    ends: Vec<u32>,
}

impl<T> CumulativeWeightedList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn total_weight(&self) -> u32 {
        self.ends.last().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total_weight() == 0
    }

    /// Weighted pick in O(log n).
    pub fn random_item<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<&T, SampleError> {
        let target = draw(rng, self.total_weight())?;
        let index = self.ends.partition_point(|end| *end <= target);
        self.items.get(index).ok_or(SampleError::EmptyCollection)
    }
}

impl<T> From<WeightedList<T>> for CumulativeWeightedList<T> {
    fn from(list: WeightedList<T>) -> Self {
        let mut items = Vec::with_capacity(list.len());
        let mut ends = Vec::with_capacity(list.len());
        let mut running = 0u32;

        for entry in list.items {
            // WeightedList caps the total, so the running sum cannot overflow
            running += entry.weight();
            ends.push(running);
            items.push(entry.into_item());
        }

        Self { items, ends }
    }
}

impl<T> WeightedSample<T> for CumulativeWeightedList<T> {
    fn total_weight(&self) -> u32 {
        CumulativeWeightedList::total_weight(self)
    }

    fn sample(&self, rng: &mut dyn RandomSource) -> Result<&T, SampleError> {
        self.random_item(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    #[test]
    fn slots_follow_weights() {
        let list = WeightedList::new()
            .with("A", 3)
            .unwrap()
            .with("B", 1)
            .unwrap();
        let cumulative = CumulativeWeightedList::from(list);
        assert_eq!(cumulative.ends, vec![3, 4]);

        let mut rng = ScriptedSource::new().with_ints([2, 3]);
        assert_eq!(cumulative.random_item(&mut rng), Ok(&"A"));
        assert_eq!(cumulative.random_item(&mut rng), Ok(&"B"));
    }

    #[test]
    fn empty_is_reported() {
        let cumulative = CumulativeWeightedList::from(WeightedList::<u8>::new());
        let mut rng = ScriptedSource::new();
        assert!(cumulative.is_empty());
        assert_eq!(
            cumulative.random_item(&mut rng),
            Err(SampleError::EmptyCollection)
        );
    }
}
