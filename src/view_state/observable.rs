//! Observable value holder.
//!
//! An [`Observable`] stores one value and calls its listeners synchronously,
//! on the writer's thread, whenever the value changes. Listeners are
//! registered with [`Observable::subscribe`], which returns a
//! [`Subscription`] guard; dropping the guard (or calling
//! [`Subscription::unsubscribe`]) removes the listener.
//!
//! Only this crate writes to observables. Hosts read and subscribe.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: Mutex<T>,
    listeners: Mutex<Vec<(u64, Listener<T>)>>,
    next_id: AtomicU64,
}

/// A value plus change notification.
///
/// Clones share the same value and listeners.
pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking listener never runs under these locks, so a poisoned
    // mutex still holds consistent data.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T> Observable<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    /// Create an observable holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(initial),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        lock(&self.inner.value).clone()
    }

    /// Register a listener called with every new value.
    ///
    /// The listener is not called with the current value; use
    /// [`subscribe_with_current`](Self::subscribe_with_current) for that.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        lock(&self.inner.listeners).push((id, Arc::new(listener)));

        let weak: Weak<Inner<T>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner.listeners).retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    /// Register a listener and call it once with the current value.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe_with_current<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let listener = Arc::new(listener);
        let current = self.get();
        listener(&current);

        let forward = Arc::clone(&listener);
        self.subscribe(move |value| forward(value))
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        lock(&self.inner.listeners).len()
    }

    /// Store `value` and notify listeners if it differs from the current
    /// value. Returns whether listeners were notified.
    pub(crate) fn set(&self, value: T) -> bool {
        if !self.replace(value.clone()) {
            return false;
        }
        self.notify(&value);
        true
    }

    /// Store `value` without notifying. Returns whether it differs from the
    /// previous value.
    ///
    /// Pair with [`notify`](Self::notify) when the store must happen under a
    /// caller's lock but listeners must not.
    pub(crate) fn replace(&self, value: T) -> bool {
        let mut current = lock(&self.inner.value);
        if *current == value {
            return false;
        }
        *current = value;
        true
    }

    /// Call every listener with `value`.
    pub(crate) fn notify(&self, value: &T) {
        // Listeners run without any lock held so they may read other
        // observables, or this one.
        let listeners: Vec<Listener<T>> = lock(&self.inner.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(value);
        }
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Observable<T>
where
    T: Clone + PartialEq + Send + Default + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*lock(&self.inner.value))
            .field("listeners", &lock(&self.inner.listeners).len())
            .finish()
    }
}

/// Guard for a registered listener.
///
/// The listener stays registered until this guard is dropped or
/// [`unsubscribe`](Self::unsubscribe) is called.
#[must_use = "dropping the subscription unsubscribes the listener"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new<F>(unsubscribe: F) -> Self
    where
        F: FnOnce() + Send + Sync + 'static,
    {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Remove the listener now.
    pub fn unsubscribe(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
