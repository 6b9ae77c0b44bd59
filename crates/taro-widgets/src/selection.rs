//! Keyed selection state for list-like widgets.
//!
//! [`Selection`] records which keys are selected, each with an optional
//! payload, in either single-select or multi-select mode. Every mutation
//! is reported to registered listeners as a [`SelectionEvent`].
//!
//! Keys are usually row indices. For that case `Selection<usize, V>` also
//! offers [`remove`](Selection::remove), which keeps the selection attached
//! to the same rows after one is deleted from the underlying list.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use taro_core::observer::{Emitter, ListenerId};
use taro_core::property::{Changed, Property};

/// A notification emitted by [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent<K, V> {
    /// `key` became selected. `data` is the payload it was stored with.
    Select { key: K, data: Option<V> },
    /// `key` was deselected. `data` is the payload it held.
    ///
    /// `data` is `None` both when the key was selected without a payload
    /// and when [`Selection::set_by_key`] deselects a key that was not
    /// selected at all. [`Selection::deselect`] and
    /// [`Selection::toggle`] only ever deselect selected keys.
    Deselect { key: K, data: Option<V> },
    /// Sent after every `Select`/`Deselect`, and when the mode changes.
    Change,
}

/// Selected keys with optional payloads, plus single/multi mode.
///
/// In single-select mode at most one key is selected at a time, and it is
/// always [`last_selected`](Selection::last_selected). A payload of `None`
/// means the key was selected without data.
///
/// # Example
///
/// ```ignore
/// let mut sel = Selection::<usize, &str>::multi();
/// sel.select(1, Some("a"));
/// sel.select(3, Some("b"));
/// assert!(sel.is_selected(&1) && sel.is_selected(&3));
///
/// sel.remove(2); // row 2 deleted: key 3 becomes key 2
/// assert!(sel.is_selected(&2));
/// ```
pub struct Selection<K = usize, V = ()> {
    selected: HashMap<K, Option<V>>,
    last_selected: Option<K>,
    multi: Property<bool>,
    events: Emitter<SelectionEvent<K, V>>,
}

impl<K, V> Selection<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone,
{
    /// Create an empty single-select selection.
    pub fn new() -> Self {
        Self {
            selected: HashMap::new(),
            last_selected: None,
            multi: Property::new(false),
            events: Emitter::new(),
        }
    }

    /// Create an empty single-select selection.
    pub fn single() -> Self {
        Self::new()
    }

    /// Create an empty multi-select selection.
    pub fn multi() -> Self {
        Self::new().with_multi(true)
    }

    /// Set the mode at construction time.
    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = Property::new(multi);
        self
    }

    pub fn is_multi(&self) -> bool {
        self.multi.value()
    }

    /// Switch between single and multi mode.
    ///
    /// Leaving multi mode clears the selection. Any real change of mode
    /// emits [`SelectionEvent::Change`].
    pub fn set_multi(&mut self, multi: bool) {
        if let Changed::Yes(_) = self.multi.set(multi) {
            tracing::debug!(multi, "selection mode changed");
            if !multi {
                self.clear();
            }
            self.events.emit(&SelectionEvent::Change);
        }
    }

    /// Register a listener for selection events.
    pub fn on_event(
        &mut self,
        listener: impl FnMut(&SelectionEvent<K, V>) + Send + 'static,
    ) -> ListenerId {
        self.events.subscribe(listener)
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Empty the selection without emitting events.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.selected.len(), "selection cleared");
        self.selected.clear();
        self.last_selected = None;
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains_key(key)
    }

    /// The payload stored for `key`, if it is selected with data.
    pub fn data(&self, key: &K) -> Option<&V> {
        self.selected.get(key).and_then(Option::as_ref)
    }

    /// The most recently selected key.
    pub fn last_selected(&self) -> Option<&K> {
        self.last_selected.as_ref()
    }

    /// Read-only view of the selected keys and their payloads.
    pub fn selected(&self) -> &HashMap<K, Option<V>> {
        &self.selected
    }

    /// The selected keys, in no particular order.
    pub fn selected_keys(&self) -> Vec<K> {
        self.selected.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Select or deselect `key` directly, ignoring the mode.
    ///
    /// Selecting stores `data` (overwriting any previous payload) and
    /// records `key` as last selected. Deselecting reports the payload the
    /// key held. Either way a `Change` event follows.
    pub fn set_by_key(&mut self, key: K, selected: bool, data: Option<V>) {
        if selected {
            tracing::trace!(?key, "select");
            self.selected.insert(key.clone(), data.clone());
            self.last_selected = Some(key.clone());
            self.events.emit(&SelectionEvent::Select { key, data });
        } else {
            tracing::trace!(?key, "deselect");
            let data = self.selected.remove(&key).flatten();
            self.events.emit(&SelectionEvent::Deselect { key, data });
        }
        self.events.emit(&SelectionEvent::Change);
    }

    /// Select `key`.
    ///
    /// In multi mode this flips the key's state. In single mode an
    /// unselected key replaces the previous selection, and an already
    /// selected key is left alone.
    pub fn select(&mut self, key: K, data: Option<V>) {
        if self.is_multi() {
            let selected = !self.is_selected(&key);
            self.set_by_key(key, selected, data);
        } else if !self.is_selected(&key) {
            if let Some(previous) = self.last_selected.clone() {
                self.deselect(&previous);
            }
            self.set_by_key(key, true, data);
        }
    }

    /// Deselect `key` if it is selected.
    pub fn deselect(&mut self, key: &K) {
        if self.is_selected(key) {
            self.set_by_key(key.clone(), false, None);
        }
    }

    /// Flip the state of `key`. In single mode a different selected key is
    /// deselected first.
    pub fn toggle(&mut self, key: K, data: Option<V>) {
        if !self.is_multi() {
            if let Some(previous) = self.last_selected.clone() {
                if previous != key {
                    self.deselect(&previous);
                }
            }
        }
        let selected = !self.is_selected(&key);
        self.set_by_key(key, selected, data);
    }
}

impl<V: Clone> Selection<usize, V> {
    /// Account for row `index` being deleted from the underlying list.
    ///
    /// The entry at `index` is dropped and every key above it moves down by
    /// one. `last_selected` follows the same rule. No events are emitted.
    pub fn remove(&mut self, index: usize) {
        let before = self.selected.len();
        self.selected = std::mem::take(&mut self.selected)
            .into_iter()
            .filter_map(|(key, data)| match key.cmp(&index) {
                std::cmp::Ordering::Less => Some((key, data)),
                std::cmp::Ordering::Equal => None,
                std::cmp::Ordering::Greater => Some((key - 1, data)),
            })
            .collect();
        self.last_selected = match self.last_selected {
            Some(last) if last == index => None,
            Some(last) if last > index => Some(last - 1),
            other => other,
        };
        tracing::debug!(
            index,
            dropped = before != self.selected.len(),
            "selection re-keyed after row removal"
        );
    }

    /// The selected indices in ascending order.
    pub fn selected_indices(&self) -> Vec<usize> {
        let mut keys = self.selected_keys();
        keys.sort_unstable();
        keys
    }
}

impl<K, V> Default for Selection<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Selection<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("selected", &self.selected)
            .field("last_selected", &self.last_selected)
            .field("multi", self.multi.get())
            .field("listeners", &self.events.listener_count())
            .finish()
    }
}
