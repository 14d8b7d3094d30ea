//! Live handles to registered sections.

use arc_swap::{ArcSwap, Guard};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Key of the primary instance in a map-shaped section.
pub const DEFAULT_INSTANCE: &str = "default";

/// A shared, atomically swappable view of one section.
///
/// Every registration hands one of these back. Reloads publish a new value
/// into the same cell, so every clone of the handle sees updates without
/// registering again.
pub struct Section<T> {
    cell: Arc<ArcSwap<T>>,
}

impl<T> Section<T> {
    /// Creates a handle holding `initial` until the first reload.
    pub fn new(initial: T) -> Self {
        Self {
            cell: Arc::new(ArcSwap::from_pointee(initial)),
        }
    }

    /// Returns a snapshot of the current value.
    #[must_use]
    pub fn load(&self) -> Guard<Arc<T>> {
        self.cell.load()
    }

    /// Returns an owned snapshot of the current value.
    #[must_use]
    pub fn get(&self) -> Arc<T> {
        self.cell.load_full()
    }

    pub(crate) fn store(&self, value: T) {
        self.cell.store(Arc::new(value));
    }
}

impl<T: Clone> Section<HashMap<String, T>> {
    /// Returns the instance stored under `key`.
    #[must_use]
    pub fn instance(&self, key: &str) -> Option<T> {
        self.cell.load().get(key).cloned()
    }

    /// Returns the `default` instance.
    #[must_use]
    pub fn default_instance(&self) -> Option<T> {
        self.instance(DEFAULT_INSTANCE)
    }
}

impl<T> Clone for Section<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: Default> Default for Section<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Section<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Section").field(&**self.cell.load()).finish()
    }
}
