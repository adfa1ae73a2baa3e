//! Purpose: Define the explicit-presence container and its accessor contracts.
//! Exports: `Optional`.
//! Role: Value type embedded as a field in host records; owns at most one `T`.
//! Invariants: Presence changes only via construction, `set`, `clear`, `take`, `replace`.
//! Invariants: An absent container holds no `T`; "zero" reads are produced on demand.

/// Zero or one value of `T`, with presence tracked explicitly.
///
/// `Optional::default()` is `Absent` for every `T`, so a record that derives
/// `Default` starts out with all of its optional fields absent.
///
/// The JSON hooks live in `crate::json::field`: `Absent` encodes as `null`
/// and `Present(v)` encodes as `v` with no wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    Absent,
    Present(T),
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::Absent
    }
}

impl<T> Optional<T> {
    pub fn new(value: T) -> Self {
        Optional::Present(value)
    }

    pub fn empty() -> Self {
        Optional::Absent
    }

    /// Present with `value` only when `condition` holds.
    pub fn maybe(condition: bool, value: T) -> Self {
        if !condition {
            return Optional::Absent;
        }
        Optional::Present(value)
    }

    /// Bridge from a borrowed nullable reference; the referent is cloned.
    pub fn from_nullable(value: Option<&T>) -> Self
    where
        T: Clone,
    {
        match value {
            Some(value) => Optional::Present(value.clone()),
            None => Optional::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the value and a presence flag. The flag is authoritative:
    /// `(T::default(), false)` and a present default value differ only there.
    pub fn get(&self) -> (T, bool)
    where
        T: Clone + Default,
    {
        match self {
            Optional::Present(value) => (value.clone(), true),
            Optional::Absent => (T::default(), false),
        }
    }

    pub fn get_or_zero(&self) -> T
    where
        T: Clone + Default,
    {
        match self {
            Optional::Present(value) => value.clone(),
            Optional::Absent => T::default(),
        }
    }

    pub fn get_or_else(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match self {
            Optional::Present(value) => value.clone(),
            Optional::Absent => fallback,
        }
    }

    /// Borrow of the stored value, if any.
    pub fn get_ref(&self) -> Option<&T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    /// Mutable borrow of an already-present value. An absent container stays
    /// absent; use `set` to make it present.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    pub fn set(&mut self, value: T) {
        *self = Optional::Present(value);
    }

    pub fn clear(&mut self) {
        *self = Optional::Absent;
    }

    /// Moves the value out, leaving the container absent.
    pub fn take(&mut self) -> Option<T> {
        std::mem::take(self).into_option()
    }

    /// Stores `value` and returns whatever was present before.
    pub fn replace(&mut self, value: T) -> Option<T> {
        std::mem::replace(self, Optional::Present(value)).into_option()
    }

    pub fn as_option(&self) -> Option<&T> {
        self.get_ref()
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}
