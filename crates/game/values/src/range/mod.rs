//! Two-bound ranges with change and maximize notifications.
//!
//! A [`BoundedRange`] holds a `min` and a `max`. In practice `min` is used as a
//! saturating accumulator that fills up towards `max` (cooldowns, charge
//! meters), which is why `zero`, `adjust` and `maximize` all move `min`.
//!
//! # Notification Order
//!
//! Every mutator funnels through the same commit step:
//! 1. the new bounds are written
//! 2. every `change` observer runs, in registration order
//! 3. if the range is now maximized, every `maximize` observer runs
//!
//! `maximize` observers therefore always see state that `change` observers
//! have already seen.

mod bound;
mod builder;

pub use bound::{Bound, clamp};
pub use builder::RangeBuilder;

use core::fmt;

use crate::notify::{ChangeNotifier, NotifyError};
use crate::rng::RandomSource;

/// Float range, e.g. a cooldown timer.
pub type FloatRange = BoundedRange<f32>;

/// Integer range, e.g. charges out of a maximum.
pub type IntRange = BoundedRange<i32>;

pub(crate) const CHANGE_EVENT: &str = "change";
pub(crate) const MAXIMIZE_EVENT: &str = "maximize";

fn change_notifier<S: ?Sized>() -> ChangeNotifier<S> {
    ChangeNotifier::new(CHANGE_EVENT)
}

fn maximize_notifier<S: ?Sized>() -> ChangeNotifier<S> {
    ChangeNotifier::new(MAXIMIZE_EVENT)
}

/// A `(min, max)` pair with derived queries and notifying mutators.
///
/// `min <= max` is not enforced. Queries stay well-defined floating-point
/// operations either way and may yield `NaN` or infinity.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedRange<N: Bound> {
    min: N,
    max: N,
    #[cfg_attr(feature = "serde", serde(skip, default = "change_notifier"))]
    on_change: ChangeNotifier<BoundedRange<N>>,
    #[cfg_attr(feature = "serde", serde(skip, default = "maximize_notifier"))]
    on_maximize: ChangeNotifier<BoundedRange<N>>,
}

impl<N: Bound> BoundedRange<N> {
    /// Creates a range with no observers.
    ///
    /// Use [`BoundedRange::builder`] to attach observers that should see the
    /// establishing notification.
    pub fn new(min: N, max: N) -> Self {
        Self {
            min,
            max,
            on_change: change_notifier(),
            on_maximize: maximize_notifier(),
        }
    }

    /// Starts a builder that registers observers before the establishing
    /// notification fires.
    pub fn builder(min: N, max: N) -> RangeBuilder<N> {
        RangeBuilder::new(min, max)
    }

    pub fn min(&self) -> N {
        self.min
    }

    pub fn max(&self) -> N {
        self.max
    }

    /// Observers notified after every mutation.
    pub fn on_change(&self) -> &ChangeNotifier<Self> {
        &self.on_change
    }

    /// Observers notified after a mutation that leaves the range maximized.
    pub fn on_maximize(&self) -> &ChangeNotifier<Self> {
        &self.on_maximize
    }

    /// Overwrites both bounds.
    pub fn set(&mut self, min: N, max: N) -> Result<(), NotifyError> {
        self.min = min;
        self.max = max;
        self.commit()
    }

    /// Sets `min` to `max`.
    pub fn maximize(&mut self) -> Result<(), NotifyError> {
        self.min = self.max;
        self.commit()
    }

    /// Sets `min` to zero.
    pub fn zero(&mut self) -> Result<(), NotifyError> {
        self.min = N::ZERO;
        self.commit()
    }

    /// Alias for [`zero`](Self::zero).
    pub fn minimize(&mut self) -> Result<(), NotifyError> {
        self.zero()
    }

    /// Moves `min` by `amount`, clamped to `[0, max]`.
    pub fn adjust(&mut self, amount: N) -> Result<(), NotifyError> {
        self.min = clamp(self.min.offset(amount), N::ZERO, self.max);
        self.commit()
    }

    /// `min / max`. Not guarded: a zero `max` yields infinity or `NaN`.
    pub fn ratio(&self) -> f32 {
        N::ratio(self.min, self.max)
    }

    /// `|max - min|`.
    pub fn difference(&self) -> N {
        self.max.distance(self.min)
    }

    pub fn is_maximized(&self) -> bool {
        self.min >= self.max
    }

    pub fn is_not_maximized(&self) -> bool {
        !self.is_maximized()
    }

    pub fn is_minimized(&self) -> bool {
        self.min <= N::ZERO
    }

    pub fn is_not_minimized(&self) -> bool {
        !self.is_minimized()
    }

    /// Uniform value between `min` and `max`, inclusive.
    pub fn random<R: RandomSource + ?Sized>(&self, rng: &mut R) -> N {
        N::sample(rng, self.min, self.max)
    }

    /// True if `value` lies in `[min, max]`.
    pub fn within(&self, value: N) -> bool {
        self.within_scaled(value, 1.0, 1.0)
    }

    /// True if `value` lies in `[min * min_mod, max * max_mod]`.
    ///
    /// The bounds are scaled, not the tested value, and the range itself is
    /// left untouched.
    pub fn within_scaled(&self, value: N, min_mod: f32, max_mod: f32) -> bool {
        value >= self.min.scale(min_mod) && value <= self.max.scale(max_mod)
    }

    /// New range with both bounds multiplied by `factor`.
    pub fn scaled_by(&self, factor: f32) -> Self {
        Self::new(self.min.scale(factor), self.max.scale(factor))
    }

    /// New range with both bounds divided by `divisor`.
    pub fn divided_by(&self, divisor: f32) -> Self {
        Self::new(self.min.divide(divisor), self.max.divide(divisor))
    }

    fn commit(&self) -> Result<(), NotifyError> {
        self.on_change.notify(self)?;

        if self.is_maximized() {
            tracing::debug!(
                target: "game_values::range",
                min = %self.min,
                max = %self.max,
                "range maximized"
            );
            self.on_maximize.notify(self)?;
        }

        Ok(())
    }
}

impl<N: Bound> Default for BoundedRange<N> {
    fn default() -> Self {
        Self::new(N::ZERO, N::ZERO)
    }
}

/// Compares bounds only; observers are ignored.
impl<N: Bound> PartialEq for BoundedRange<N> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<N: Bound> fmt::Debug for BoundedRange<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedRange")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("change_observers", &self.on_change.len())
            .field("maximize_observers", &self.on_maximize.len())
            .finish()
    }
}

impl<N: Bound> fmt::Display for BoundedRange<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.min, N::SEPARATOR, self.max)
    }
}
