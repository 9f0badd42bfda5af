//! Current value tracked within a pair of bounds.
//!
//! Unlike [`BoundedRange`](crate::BoundedRange), a [`BoundedScope`] keeps the
//! bounds fixed and moves a separate `value` between them (health, stamina,
//! temperature). It has a single `value_changed` notifier and no maximize
//! event.

use core::fmt;

use crate::notify::{ChangeNotifier, NotifyError};
use crate::range::clamp;
use crate::rng::RandomSource;

pub(crate) const VALUE_CHANGED_EVENT: &str = "value_changed";

fn value_notifier<S: ?Sized>() -> ChangeNotifier<S> {
    ChangeNotifier::new(VALUE_CHANGED_EVENT)
}

/// `(min, max, value)` where mutators keep `min <= value <= max`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedScope {
    min: f32,
    max: f32,
    value: f32,
    #[cfg_attr(feature = "serde", serde(skip, default = "value_notifier"))]
    on_value_changed: ChangeNotifier<BoundedScope>,
}

impl BoundedScope {
    /// Creates a scope. `value` is taken as given, without clamping.
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        Self {
            min,
            max,
            value,
            on_value_changed: value_notifier(),
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn on_value_changed(&self) -> &ChangeNotifier<Self> {
        &self.on_value_changed
    }

    /// Sets `value` to `max`.
    pub fn maximize(&mut self) -> Result<(), NotifyError> {
        self.value = self.max;
        self.on_value_changed.notify(self)
    }

    /// Sets `value` to `min`.
    pub fn minimize(&mut self) -> Result<(), NotifyError> {
        self.value = self.min;
        self.on_value_changed.notify(self)
    }

    /// Moves `value` by `amount`, clamped to `[min, max]`.
    pub fn adjust(&mut self, amount: f32) -> Result<(), NotifyError> {
        self.value = clamp(self.value + amount, self.min, self.max);
        self.on_value_changed.notify(self)
    }

    /// Position of `value` between the bounds, `0` when `max == min`.
    pub fn ratio(&self) -> f32 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        (self.value - self.min) / span
    }

    /// `value / max`. Not guarded against a zero `max`.
    pub fn ratio_from_zero(&self) -> f32 {
        self.value / self.max
    }

    /// How far below zero `value` sits relative to a negative `min`.
    ///
    /// `0` unless both `value` and `min` are negative.
    pub fn negative_ratio(&self) -> f32 {
        if self.value >= 0.0 || self.min >= 0.0 {
            return 0.0;
        }
        self.value / self.min
    }

    /// Uniform value between `min` and `max`, inclusive.
    pub fn random<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.uniform_float(self.min, self.max)
    }

    pub fn is_maximized(&self) -> bool {
        self.value >= self.max
    }

    pub fn is_minimized(&self) -> bool {
        self.value <= self.min
    }
}

impl Default for BoundedScope {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl PartialEq for BoundedScope {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max && self.value == other.value
    }
}

impl fmt::Debug for BoundedScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedScope")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("observers", &self.on_value_changed.len())
            .finish()
    }
}

impl fmt::Display for BoundedScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}..{})", self.value, self.min, self.max)
    }
}
