//! Observable fields with explicit change detection.
//!
//! A [`Property`] is a plain value wrapper whose setter reports whether the
//! stored value actually changed. The owning type runs its own on-change
//! logic when [`Property::set`] returns [`Changed::Yes`]:
//!
//! ```rust,ignore
//! pub fn set_multi(&mut self, multi: bool) {
//!     if let Changed::Yes(_) = self.multi.set(multi) {
//!         self.multi_changed();
//!     }
//! }
//! ```

/// Outcome of [`Property::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Changed<T> {
    /// The value changed; carries the previous value.
    Yes(T),
    /// The new value equals the stored one; nothing was written.
    No,
}

impl<T> Changed<T> {
    pub fn is_changed(&self) -> bool {
        matches!(self, Changed::Yes(_))
    }
}

/// A value with an explicit getter and a change-reporting setter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Property<T> {
    value: T,
}

impl<T: PartialEq> Property<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrow the current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store `value`, returning the previous one if it differed.
    pub fn set(&mut self, value: T) -> Changed<T> {
        if self.value == value {
            Changed::No
        } else {
            Changed::Yes(std::mem::replace(&mut self.value, value))
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: PartialEq + Copy> Property<T> {
    /// Copy out the current value.
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: PartialEq> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_previous_value() {
        let mut p = Property::new(String::from("a"));
        assert_eq!(p.set("b".into()), Changed::Yes("a".into()));
        assert_eq!(p.get(), "b");
    }

    #[test]
    fn set_same_value_is_unchanged() {
        let mut p = Property::new(3);
        assert_eq!(p.set(3), Changed::No);
        assert!(!p.set(3).is_changed());
        assert_eq!(p.value(), 3);
    }

    #[test]
    fn default_uses_inner_default() {
        let p: Property<bool> = Property::default();
        assert!(!p.value());
        assert!(!Property::from(false).into_inner());
    }
}
