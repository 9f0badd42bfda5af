//! Single weighted entry.

use core::iter;

use super::error::WeightError;
use crate::config::ValuesConfig;

/// An item with a positive integer weight.
///
/// The weight only has meaning relative to the other entries of the list that
/// owns this item.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawWeightedItem<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct WeightedListItem<T> {
    item: T,
    weight: u32,
}

impl<T> WeightedListItem<T> {
    pub const DEFAULT_WEIGHT: u32 = 1;

    /// Item with the default weight of 1.
    pub fn new(item: T) -> Self {
        Self {
            item,
            weight: Self::DEFAULT_WEIGHT,
        }
    }

    /// Item with an explicit weight. Rejects `weight <= 0`.
    pub fn with_weight(item: T, weight: i64) -> Result<Self, WeightError> {
        let weight = validate(weight)?;
        Ok(Self { item, weight })
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn into_item(self) -> T {
        self.item
    }

    /// The item repeated `weight` times.
    pub fn expanded(&self) -> impl Iterator<Item = &T> {
        iter::repeat_n(&self.item, self.weight as usize)
    }
}

pub(super) fn validate(weight: i64) -> Result<u32, WeightError> {
    if weight <= 0 {
        return Err(WeightError::NonPositive { weight });
    }
    let limit = ValuesConfig::MAX_TOTAL_WEIGHT;
    if weight > i64::from(limit) {
        return Err(WeightError::TotalOverflow {
            total: 0,
            weight,
            limit,
        });
    }
    Ok(weight as u32)
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWeightedItem<T> {
    item: T,
    #[serde(default = "default_weight")]
    weight: i64,
}

#[cfg(feature = "serde")]
fn default_weight() -> i64 {
    i64::from(WeightedListItem::<()>::DEFAULT_WEIGHT)
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawWeightedItem<T>> for WeightedListItem<T> {
    type Error = WeightError;

    fn try_from(raw: RawWeightedItem<T>) -> Result<Self, Self::Error> {
        Self::with_weight(raw.item, raw.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weight_is_one() {
        assert_eq!(WeightedListItem::new("a").weight(), 1);
    }

    #[test]
    fn rejects_non_positive_weight() {
        assert_eq!(
            WeightedListItem::with_weight("a", 0),
            Err(WeightError::NonPositive { weight: 0 })
        );
        assert!(WeightedListItem::with_weight("a", -3).is_err());
    }

    #[test]
    fn expanded_repeats_item() {
        let item = WeightedListItem::with_weight('x', 3).unwrap();
        assert_eq!(item.expanded().collect::<String>(), "xxx");
    }
}
