//! Change notification
//!
//! Controllers own their state and notify subscribed host code after each
//! mutating call. Listeners are keyed by a slotmap id so they can be removed
//! when the subscribing view goes away.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`ChangeListeners::subscribe`]
    pub struct ListenerId;
}

/// Callback invoked with the latest state
pub type Listener<T> = Box<dyn FnMut(&T) + Send>;

/// A set of change listeners for values of type `T`
pub struct ChangeListeners<T> {
    listeners: SlotMap<ListenerId, Listener<T>>,
}

impl<T> ChangeListeners<T> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
        }
    }

    /// Register a listener
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener, returning whether it was registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Call every listener with `value`
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T> Default for ChangeListeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ChangeListeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_reaches_all_listeners() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = ChangeListeners::new();

        let seen_a = seen.clone();
        listeners.subscribe(move |v: &i32| seen_a.lock().unwrap().push(("a", *v)));
        let seen_b = seen.clone();
        listeners.subscribe(move |v: &i32| seen_b.lock().unwrap().push(("b", *v)));

        listeners.notify(&7);

        let mut seen = seen.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut listeners = ChangeListeners::new();

        let count_clone = count.clone();
        let id = listeners.subscribe(move |_: &f32| *count_clone.lock().unwrap() += 1);

        listeners.notify(&1.0);
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.notify(&2.0);

        assert_eq!(*count.lock().unwrap(), 1);
        assert!(listeners.is_empty());
    }
}
