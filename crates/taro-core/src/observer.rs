//! Typed listener registry.
//!
//! [`Emitter`] holds an ordered list of callbacks for a single event type.
//! Owners call [`emit`](Emitter::emit) synchronously after mutating their
//! state; listeners only ever see a shared reference to the event.

use std::fmt;

/// Handle returned by [`Emitter::subscribe`], used to unsubscribe later.
///
/// Ids are allocated from a per-emitter counter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E) + Send>;

/// An ordered set of listeners for events of type `E`.
///
/// # Example
///
/// ```rust,ignore
/// let mut emitter = Emitter::<u32>::new();
/// let id = emitter.subscribe(|n| println!("got {n}"));
/// emitter.emit(&7);
/// emitter.unsubscribe(id);
/// ```
pub struct Emitter<E> {
    listeners: Vec<(ListenerId, Listener<E>)>,
    next_id: u64,
}

impl<E> Emitter<E> {
    /// Create an emitter with no listeners.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener. Listeners run in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener.
    pub fn emit(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop all listeners. Ids handed out earlier stay retired.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, Emitter<u32>) {
        (Arc::new(Mutex::new(Vec::new())), Emitter::new())
    }

    #[test]
    fn emit_without_listeners_is_noop() {
        let mut emitter = Emitter::<u32>::new();
        emitter.emit(&1);
        assert!(emitter.is_empty());
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let (log, mut emitter) = recorder();
        let a = log.clone();
        emitter.subscribe(move |n| a.lock().unwrap().push(format!("a{n}")));
        let b = log.clone();
        emitter.subscribe(move |n| b.lock().unwrap().push(format!("b{n}")));

        emitter.emit(&1);
        emitter.emit(&2);
        assert_eq!(*log.lock().unwrap(), vec!["a1", "b1", "a2", "b2"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let (log, mut emitter) = recorder();
        let a = log.clone();
        let id = emitter.subscribe(move |n| a.lock().unwrap().push(format!("a{n}")));

        emitter.emit(&1);
        assert!(emitter.unsubscribe(id));
        emitter.emit(&2);
        assert_eq!(*log.lock().unwrap(), vec!["a1"]);
        assert!(!emitter.unsubscribe(id));
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut emitter = Emitter::<u32>::new();
        let first = emitter.subscribe(|_| {});
        emitter.clear();
        let second = emitter.subscribe(|_| {});
        assert_ne!(first, second);
        assert_eq!(emitter.listener_count(), 1);
    }
}
