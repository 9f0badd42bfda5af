//! Builder that attaches observers before a range is established.

use super::{Bound, BoundedRange};
use crate::notify::{NotifyError, ObserverResult};

type Observer<N> = Box<dyn Fn(&BoundedRange<N>) -> ObserverResult>;

/// Collects observers, then builds the range and fires its establishing
/// notification (change, then maximize if `min >= max`).
///
/// # Example
///
/// ```
/// use game_values::FloatRange;
///
/// let range = FloatRange::builder(3.0, 3.0)
///     .on_maximize(|r| {
///         assert_eq!(r.min(), 3.0);
///         Ok(())
///     })
///     .build()?;
/// assert!(range.is_maximized());
/// # Ok::<(), game_values::NotifyError>(())
/// ```
pub struct RangeBuilder<N: Bound> {
    min: N,
    max: N,
    on_change: Vec<Observer<N>>,
    on_maximize: Vec<Observer<N>>,
}

impl<N: Bound> RangeBuilder<N> {
    pub fn new(min: N, max: N) -> Self {
        Self {
            min,
            max,
            on_change: Vec::new(),
            on_maximize: Vec::new(),
        }
    }

    #[must_use]
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&BoundedRange<N>) -> ObserverResult + 'static,
    {
        self.on_change.push(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_maximize<F>(mut self, callback: F) -> Self
    where
        F: Fn(&BoundedRange<N>) -> ObserverResult + 'static,
    {
        self.on_maximize.push(Box::new(callback));
        self
    }

    /// Builds the range and fires the establishing notification.
    pub fn build(self) -> Result<BoundedRange<N>, NotifyError> {
        let range = BoundedRange::new(self.min, self.max);
        for callback in self.on_change {
            range.on_change().subscribe(callback);
        }
        for callback in self.on_maximize {
            range.on_maximize().subscribe(callback);
        }
        range.commit()?;
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::{FloatRange, IntRange};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn build_fires_establishing_change() {
        let calls = Rc::new(Cell::new(0));
        let sink = Rc::clone(&calls);

        let range = FloatRange::builder(1.0, 5.0)
            .on_change(move |_| {
                sink.set(sink.get() + 1);
                Ok(())
            })
            .build()
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(range.on_change().len(), 1);
    }

    #[test]
    fn build_fires_maximize_when_established_full() {
        let fired = Rc::new(Cell::new(false));
        let sink = Rc::clone(&fired);

        IntRange::builder(4, 4)
            .on_maximize(move |_| {
                sink.set(true);
                Ok(())
            })
            .build()
            .unwrap();

        assert!(fired.get());
    }

    #[test]
    fn build_skips_maximize_when_not_full() {
        let fired = Rc::new(Cell::new(false));
        let sink = Rc::clone(&fired);

        IntRange::builder(1, 4)
            .on_maximize(move |_| {
                sink.set(true);
                Ok(())
            })
            .build()
            .unwrap();

        assert!(!fired.get());
    }
}
