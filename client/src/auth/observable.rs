//! Observable single-value cell
//!
//! A minimal observer-list primitive: holds one value, lets any number of
//! observers subscribe, and notifies them synchronously in registration
//! order whenever the value changes. A newly attached observer receives the
//! current value immediately.
//!
//! Observers run while the cell's lock is held, so a callback must not call
//! back into the same cell.

use std::sync::{Arc, Mutex, PoisonError, Weak};

type Callback<T> = Box<dyn FnMut(&T) + Send>;

struct Inner<T> {
    value: T,
    observers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

/// Shared observable value holder
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Observable<T> {
    /// Create a cell holding `value`
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Read the current value synchronously
    pub fn get(&self) -> T {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.value.clone()
    }

    /// Replace the value and notify observers in registration order
    pub fn set(&self, value: T) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.value = value;
        let current = inner.value.clone();
        for (_, observer) in &mut inner.observers {
            observer(&current);
        }
    }

    /// Register an observer; it is invoked immediately with the current
    /// value, then on every subsequent change
    ///
    /// Dropping the returned [`Subscription`] deregisters the observer.
    pub fn subscribe(&self, mut observer: impl FnMut(&T) + Send + 'static) -> Subscription<T> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        observer(&inner.value);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.observers.push((id, Box::new(observer)));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Unsubscribe handle returned by [`Observable::subscribe`]
pub struct Subscription<T> {
    id: u64,
    inner: Weak<Mutex<Inner<T>>>,
}

impl<T> Subscription<T> {
    /// Explicitly deregister the observer (equivalent to dropping)
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            let id = self.id;
            inner.observers.retain(|(observer_id, _)| *observer_id != id);
        }
    }
}
