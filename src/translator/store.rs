//! Observable value with subscriber callbacks

use std::fmt;
use std::sync::atomic::{
    AtomicU64,
    Ordering,
};
use std::sync::{
    Arc,
    Mutex,
    PoisonError,
    RwLock,
};

/// Handle returned by [`Observable::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscriber callback
type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A value that notifies its subscribers on every `set`.
///
/// The value is replaced as a whole, so readers never observe a partial
/// update. Concurrent `set` calls are serialized together with their
/// notifications: subscribers see the values in the order they were stored,
/// and the last notification carries the current value.
///
/// Callbacks may read the value or (un)subscribe. Calling `set` from a
/// callback deadlocks.
pub struct Observable<T> {
    /// Current value
    value: RwLock<T>,
    /// Registered callbacks in subscription order
    subscribers: Mutex<Vec<(SubscriptionId, Callback<T>)>>,
    /// Next subscription id
    next_id: AtomicU64,
    /// Held across swap and notification in `set`
    notify: Mutex<()>,
}

impl<T: Clone> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            notify: Mutex::new(()),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replaces the value and notifies every subscriber, even when the value
    /// did not change.
    pub fn set(&self, value: T) {
        let notifying = self.notify.lock().unwrap_or_else(PoisonError::into_inner);
        {
            let mut current = self.value.write().unwrap_or_else(PoisonError::into_inner);
            *current = value.clone();
        }
        for callback in self.callbacks() {
            callback(&value);
        }
        drop(notifying);
    }

    /// Registers `callback` and calls it right away with the current value.
    pub fn subscribe(&self, callback: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let callback: Callback<T> = Arc::new(callback);
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::clone(&callback)));
        callback(&self.get());
        id
    }

    /// Removes a subscriber. Returns `false` when `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = subscribers.len();
        subscribers.retain(|(subscriber, _)| *subscriber != id);
        subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Snapshot of the registered callbacks.
    fn callbacks(&self) -> Vec<Callback<T>> {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subscribers = self.subscribers.lock().map_or(0, |subscribers| subscribers.len());
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("subscribers", &subscribers)
            .finish_non_exhaustive()
    }
}
