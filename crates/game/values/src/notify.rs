//! Change notification primitive shared by ranges and scopes.
//!
//! A [`ChangeNotifier`] is an ordered registry of callbacks. Owners call
//! [`ChangeNotifier::notify`] after they mutate, passing themselves as the
//! subject so callbacks can read current state through the owner's accessors.
//!
//! # Dispatch Rules
//!
//! - Callbacks run synchronously, in registration order
//! - Dispatch iterates a snapshot taken when `notify` starts, so subscribing or
//!   unsubscribing from inside a callback only affects later dispatches
//! - The first callback that returns an error aborts the dispatch; the error is
//!   returned to the caller and the remaining callbacks are skipped

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{ErrorSeverity, ValueError};

/// Handle returned by [`ChangeNotifier::subscribe`].
///
/// Only a notifier can mint handles:
///
/// ```compile_fail
/// let forged = game_values::SubscriptionId(7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Error returned by an observer callback to reject a notification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ObserverError {
    message: String,
}

impl ObserverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure of a notification dispatch.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    /// An observer returned an error; later observers were not invoked.
    #[error("observer {subscription} rejected '{event}' notification: {source}")]
    Rejected {
        event: &'static str,
        subscription: SubscriptionId,
        #[source]
        source: ObserverError,
    },
}

impl NotifyError {
    /// The subscription whose callback failed.
    pub fn subscription(&self) -> SubscriptionId {
        match self {
            Self::Rejected { subscription, .. } => *subscription,
        }
    }
}

impl ValueError for NotifyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "NOTIFY_OBSERVER_REJECTED",
        }
    }
}

/// Result type returned by observer callbacks.
pub type ObserverResult = Result<(), ObserverError>;

type Callback<S: ?Sized> = Rc<dyn Fn(&S) -> ObserverResult>;

struct Registry<S: ?Sized> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback<S>)>,
}

/// Ordered, synchronous observer registry for a subject of type `S`.
///
/// Not `Send`: a notifier belongs to one owner on one thread.
pub struct ChangeNotifier<S: ?Sized> {
    event: &'static str,
    registry: RefCell<Registry<S>>,
}

impl<S: ?Sized> ChangeNotifier<S> {
    /// Creates an empty notifier. `event` names the notification in logs and
    /// errors (e.g. `"change"`, `"maximize"`).
    pub fn new(event: &'static str) -> Self {
        Self {
            event,
            registry: RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            }),
        }
    }

    /// Name of the event this notifier announces.
    pub fn event(&self) -> &'static str {
        self.event
    }

    /// Registers a callback and returns its handle.
    ///
    /// Safe to call from inside a running dispatch; the new callback is first
    /// invoked on the next `notify`.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&S) -> ObserverResult + 'static,
    {
        let callback: Callback<S> = Rc::new(callback);
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, callback));
        id
    }

    /// Removes a callback. Returns false if the handle was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.entries.len();
        registry.entries.retain(|(entry, _)| *entry != id);
        registry.entries.len() != before
    }

    /// Removes every callback.
    pub fn clear(&self) {
        self.registry.borrow_mut().entries.clear();
    }

    /// Number of registered callbacks.
    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes every registered callback with `subject`, in registration order.
    pub fn notify(&self, subject: &S) -> Result<(), NotifyError> {
        let snapshot: Vec<(SubscriptionId, Callback<S>)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        tracing::trace!(
            target: "game_values::notify",
            event = self.event,
            observers = snapshot.len(),
            "dispatching notification"
        );

        for (subscription, callback) in snapshot {
            if let Err(source) = callback(subject) {
                tracing::warn!(
                    target: "game_values::notify",
                    event = self.event,
                    %subscription,
                    error = %source,
                    "observer rejected notification, aborting dispatch"
                );
                return Err(NotifyError::Rejected {
                    event: self.event,
                    subscription,
                    source,
                });
            }
        }

        Ok(())
    }
}

impl<S: ?Sized> fmt::Debug for ChangeNotifier<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("event", &self.event)
            .field("observers", &self.len())
            .finish()
    }
}
