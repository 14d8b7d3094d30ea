//! Traits shared across all layerconf crates.
//!
//! Section types that need more than a plain deserialize implement these so
//! that the registry crate and the section crate depend only on
//! `layerconf-types`, not on each other.

use crate::Result;
use figment::value::Value;

/// Custom materialization of a section sub-tree.
///
/// A section registered with a reload hook is not deserialized generically.
/// Instead the registry hands the raw sub-tree to [`Reload::reload`] on a copy
/// of the current value and publishes the copy only if the hook succeeds.
pub trait Reload: Send + Sync + 'static {
    /// Rebuild `self` from the raw sub-tree stored under the section's name.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` cannot be turned into this section. The
    /// published value is left untouched in that case.
    fn reload(&mut self, raw: &Value) -> Result<()>;
}
