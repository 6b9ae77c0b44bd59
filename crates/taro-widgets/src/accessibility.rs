//! Accessibility attributes mirrored onto a host element.
//!
//! [`Accessibility`] holds a handful of high-level properties (label, hint,
//! role, alert, live, disabled) and keeps a set of ARIA-style attributes in
//! an [`AttributeSink`] in step with them. Screen-reader bridges and
//! snapshot tests read the attributes back out of the sink.

use std::collections::BTreeMap;

use taro_core::property::{Changed, Property};

/// Attribute names written by [`Accessibility`].
pub mod attr {
    pub const ROLE: &str = "role";
    pub const LABEL: &str = "aria-label";
    pub const LIVE: &str = "aria-live";
    pub const HIDDEN: &str = "aria-hidden";
    pub const SELECTED: &str = "aria-selected";
    pub const MULTISELECTABLE: &str = "aria-multiselectable";
}

/// Something that stores named string attributes.
pub trait AttributeSink {
    /// Set `name` to `value`, or remove it when `value` is `None`.
    fn set_attribute(&mut self, name: &str, value: Option<&str>);
}

/// An in-memory [`AttributeSink`] with deterministic ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attrs: BTreeMap<String, String>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl AttributeSink for AttributeMap {
    fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(v) => {
                self.attrs.insert(name.to_string(), v.to_string());
            }
            None => {
                self.attrs.remove(name);
            }
        }
    }
}

/// Accessibility properties of one element and the sink they are mirrored to.
///
/// Derived attributes:
///
/// | Attribute | Value |
/// |-----------|-------|
/// | `role` | `"alert"` if alert, else the role; absent when disabled |
/// | `aria-live` | `"assertive"` if live and enabled |
/// | `aria-label` | label and hint joined by a space, when enabled and non-empty |
/// | `aria-hidden` | `"true"` when disabled |
///
/// # Example
///
/// ```ignore
/// let mut a11y = Accessibility::new(AttributeMap::new());
/// a11y.set_label("Inbox");
/// a11y.set_hint("3 unread");
/// assert_eq!(a11y.sink().get("aria-label"), Some("Inbox 3 unread"));
/// ```
#[derive(Debug)]
pub struct Accessibility<S: AttributeSink = AttributeMap> {
    label: Property<String>,
    hint: Property<String>,
    role: Property<Option<String>>,
    alert: Property<bool>,
    live: Property<bool>,
    disabled: Property<bool>,
    sink: S,
}

impl<S: AttributeSink> Accessibility<S> {
    /// Wrap `sink` and write the initial (empty) attribute state to it.
    pub fn new(sink: S) -> Self {
        let mut a11y = Self {
            label: Property::default(),
            hint: Property::default(),
            role: Property::default(),
            alert: Property::default(),
            live: Property::default(),
            disabled: Property::default(),
            sink,
        };
        a11y.update_attributes();
        a11y
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.set_role(Some(role.into()));
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    pub fn label(&self) -> &str {
        self.label.get()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        let changed = self.label.set(label.into());
        self.changed(changed);
    }

    pub fn hint(&self) -> &str {
        self.hint.get()
    }

    pub fn set_hint(&mut self, hint: impl Into<String>) {
        let changed = self.hint.set(hint.into());
        self.changed(changed);
    }

    pub fn role(&self) -> Option<&str> {
        self.role.get().as_deref()
    }

    pub fn set_role(&mut self, role: Option<String>) {
        let changed = self.role.set(role);
        self.changed(changed);
    }

    pub fn alert(&self) -> bool {
        self.alert.value()
    }

    pub fn set_alert(&mut self, alert: bool) {
        let changed = self.alert.set(alert);
        self.changed(changed);
    }

    pub fn live(&self) -> bool {
        self.live.value()
    }

    pub fn set_live(&mut self, live: bool) {
        let changed = self.live.set(live);
        self.changed(changed);
    }

    pub fn disabled(&self) -> bool {
        self.disabled.value()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        let changed = self.disabled.set(disabled);
        self.changed(changed);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Direct access for attributes outside this struct's control (for
    /// example `aria-multiselectable` on a table).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn changed<T>(&mut self, changed: Changed<T>) {
        if changed.is_changed() {
            self.update_attributes();
        }
    }

    /// Rewrite every derived attribute from the current properties.
    pub fn update_attributes(&mut self) {
        let enabled = !self.disabled.value();

        let role = if !enabled {
            None
        } else if self.alert.value() {
            Some("alert")
        } else {
            self.role.get().as_deref()
        };
        self.sink.set_attribute(attr::ROLE, role);

        let live = (enabled && self.live.value()).then_some("assertive");
        self.sink.set_attribute(attr::LIVE, live);

        let label = [self.label.get().as_str(), self.hint.get().as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let label = (enabled && !label.is_empty()).then_some(label.as_str());
        self.sink.set_attribute(attr::LABEL, label);

        self.sink
            .set_attribute(attr::HIDDEN, (!enabled).then_some("true"));

        tracing::trace!(enabled, "accessibility attributes updated");
    }
}

impl Default for Accessibility<AttributeMap> {
    fn default() -> Self {
        Self::new(AttributeMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_attributes() {
        let a11y = Accessibility::default();
        assert!(a11y.sink().is_empty());
    }

    #[test]
    fn label_and_hint_are_joined() {
        let mut a11y = Accessibility::default();
        a11y.set_label("Inbox");
        assert_eq!(a11y.sink().get(attr::LABEL), Some("Inbox"));
        a11y.set_hint("3 unread");
        assert_eq!(a11y.sink().get(attr::LABEL), Some("Inbox 3 unread"));
        a11y.set_label("");
        assert_eq!(a11y.sink().get(attr::LABEL), Some("3 unread"));
        a11y.set_hint("");
        assert!(!a11y.sink().contains(attr::LABEL));
    }

    #[test]
    fn alert_overrides_role() {
        let mut a11y = Accessibility::default().with_role("grid");
        assert_eq!(a11y.sink().get(attr::ROLE), Some("grid"));
        a11y.set_alert(true);
        assert_eq!(a11y.sink().get(attr::ROLE), Some("alert"));
        a11y.set_alert(false);
        assert_eq!(a11y.sink().get(attr::ROLE), Some("grid"));
    }

    #[test]
    fn live_sets_assertive() {
        let mut a11y = Accessibility::default();
        a11y.set_live(true);
        assert_eq!(a11y.sink().get(attr::LIVE), Some("assertive"));
        a11y.set_live(false);
        assert!(!a11y.sink().contains(attr::LIVE));
    }

    #[test]
    fn disabled_hides_element() {
        let mut a11y = Accessibility::default()
            .with_role("button")
            .with_label("Save");
        a11y.set_live(true);
        a11y.set_disabled(true);

        let attrs: Vec<_> = a11y.sink().iter().collect();
        assert_eq!(attrs, vec![(attr::HIDDEN, "true")]);

        a11y.set_disabled(false);
        assert_eq!(a11y.sink().get(attr::ROLE), Some("button"));
        assert_eq!(a11y.sink().get(attr::LABEL), Some("Save"));
        assert_eq!(a11y.sink().get(attr::LIVE), Some("assertive"));
        assert!(!a11y.sink().contains(attr::HIDDEN));
    }

    #[test]
    fn unchanged_values_do_not_touch_sink() {
        #[derive(Default)]
        struct Counting {
            writes: usize,
        }
        impl AttributeSink for Counting {
            fn set_attribute(&mut self, _name: &str, _value: Option<&str>) {
                self.writes += 1;
            }
        }

        let mut a11y = Accessibility::new(Counting::default());
        let initial = a11y.sink().writes;
        a11y.set_label("x");
        let after_change = a11y.sink().writes;
        assert!(after_change > initial);
        a11y.set_label("x");
        assert_eq!(a11y.sink().writes, after_change);
    }

    #[test]
    fn sink_mut_keeps_extra_attributes() {
        let mut a11y = Accessibility::default();
        a11y.sink_mut()
            .set_attribute(attr::MULTISELECTABLE, Some("true"));
        a11y.set_label("Files");
        assert_eq!(a11y.sink().get(attr::MULTISELECTABLE), Some("true"));
    }
}
