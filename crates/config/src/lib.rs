//! Layered configuration registry.
//!
//! One bootstrap YAML file, optionally chained with more files, is merged
//! into a single untyped tree. Typed sections are bound to named sub-trees
//! and handed back as live [`Section`] handles (arc-swap), which every
//! [`Registry::update`] refreshes in place. A notify-based [`UpdateWatcher`]
//! can feed a file into `update` as it changes.

pub mod document;
pub mod loader;
pub mod merge;
pub mod naming;
pub mod registry;
pub mod section;
pub mod watcher;

mod binding;

pub use document::parse_document;
pub use layerconf_types::{ConfigError, Dict, Reload, Result, UpdateMode, Value};
pub use loader::LoaderOptions;
pub use naming::{lc_first, section_name};
pub use registry::{PRESERVED_KEY, Registry};
pub use section::{DEFAULT_INSTANCE, Section};
pub use watcher::{UpdateWatcher, WatchGuard};
