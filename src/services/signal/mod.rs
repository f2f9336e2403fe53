//! Versioned observable cells.
//!
//! Producers write through [`Signal::set`]; consumers hold a [`Reaction`]
//! and only do work when the version they last saw is stale. This keeps the
//! "recompute on change" contract inside an immediate-mode frame loop.

/// A value plus a counter bumped on every effective write.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<T> {
    value: T,
    version: u64,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self { value, version: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

impl<T: PartialEq> Signal<T> {
    /// Store `value`. Writing the current value again is not a change.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.version += 1;
        true
    }
}

impl<T: Copy> Signal<T> {
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Remembers which version of a signal was last consumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reaction {
    seen: Option<u64>,
}

impl Reaction {
    /// A reaction that treats the signal's current version as already seen.
    pub fn primed<T>(signal: &Signal<T>) -> Self {
        Self {
            seen: Some(signal.version()),
        }
    }

    /// Returns the value if it changed since the last call, marking it seen.
    pub fn changed<'a, T>(&mut self, signal: &'a Signal<T>) -> Option<&'a T> {
        if self.seen == Some(signal.version()) {
            return None;
        }
        self.seen = Some(signal.version());
        Some(signal.get())
    }
}
