//! The section registry: one merged configuration tree and every section
//! bound to it.
//!
//! ```text
//! register / register_named / register_map / register_with_hook
//!     → init() runs the bootstrap loader once
//!     → binding appended, reloaded from the current tree
//!     → live Section<T> handed back
//!
//! update(bytes, mode)
//!     → bytes parsed (rejected wholesale on error)
//!     → merge into the tree, or rebuild it keeping `nacos`
//!     → every binding reloaded in registration order
//! ```
//!
//! The tree and the bindings sit behind one `RwLock`. Reload hooks run while
//! that lock is held and must not call back into the registry.

use crate::binding::Binding;
use crate::document::parse_document;
use crate::loader::{self, LoaderOptions};
use crate::merge::merge_dict;
use crate::naming::section_name;
use crate::section::Section;
use layerconf_types::{Dict, Reload, Result, UpdateMode, Value};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{LazyLock, Once, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

/// Top-level key that survives an overwrite update: the settings of the
/// channel the update arrived through.
pub const PRESERVED_KEY: &str = "nacos";

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::from_env);

#[derive(Default)]
struct State {
    raw: Dict,
    bindings: Vec<Binding>,
}

/// Merged configuration plus the sections bound to it.
pub struct Registry {
    options: LoaderOptions,
    init: Once,
    state: RwLock<State>,
}

impl Registry {
    /// Creates a registry that bootstraps from `options` on first use.
    #[must_use]
    pub fn new(options: LoaderOptions) -> Self {
        Self {
            options,
            init: Once::new(),
            state: RwLock::new(State::default()),
        }
    }

    /// Creates a registry configured from `CONFIG_PATH` and `config`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LoaderOptions::from_env())
    }

    /// The process-wide registry, configured from the environment.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    #[must_use]
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// Runs the bootstrap loader if it has not run yet.
    ///
    /// Concurrent first callers block until the single load finishes.
    pub fn init(&self) {
        self.init.call_once(|| {
            let loaded = loader::load(&self.options);
            let mut state = self.write();
            merge_dict(&mut state.raw, loaded);
            info!(sections = state.raw.len(), "config registry initialized");
        });
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.init.is_completed()
    }

    /// Registers a section named after `T`, starting from `T::default()`.
    ///
    /// The name is the type's own name with its first letter lower-cased:
    /// `Server` binds to `server`.
    pub fn register<T>(&self) -> Section<T>
    where
        T: DeserializeOwned + Default + Send + Sync + 'static,
    {
        self.register_named(section_name::<T>(), T::default())
    }

    /// Registers a section under an explicit name.
    pub fn register_named<T>(&self, name: impl Into<String>, initial: T) -> Section<T>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let section = Section::new(initial);
        self.bind(Binding::copy(name.into(), section.clone()));
        section
    }

    /// Registers a map-shaped section whose keys name instances, such as
    /// connection pools. The primary instance lives under `default`.
    pub fn register_map<T>(&self, name: impl Into<String>) -> Section<HashMap<String, T>>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        self.register_named(name, HashMap::new())
    }

    /// Registers a section that materializes itself through [`Reload`].
    pub fn register_with_hook<T>(&self, name: impl Into<String>, initial: T) -> Section<T>
    where
        T: Reload + Clone,
    {
        let section = Section::new(initial);
        self.bind(Binding::hook(name.into(), section.clone()));
        section
    }

    /// Binds a handle the caller already owns, for sections declared ahead
    /// of the registry.
    pub fn register_legacy<T>(&self, name: impl Into<String>, section: &Section<T>)
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        self.bind(Binding::copy(name.into(), section.clone()));
    }

    fn bind(&self, binding: Binding) {
        self.init();
        let mut state = self.write();
        binding.reload(&state.raw);
        state.bindings.push(binding);
    }

    /// Applies externally supplied configuration and reloads every section.
    ///
    /// In [`UpdateMode::Merge`] the document is deep-merged into the current
    /// tree. In [`UpdateMode::Overwrite`] the tree is rebuilt from the
    /// document alone, except that the current [`PRESERVED_KEY`] sub-tree is
    /// carried over unless the document brings its own.
    ///
    /// # Errors
    ///
    /// Returns a parse error if `bytes` is not a YAML mapping. Nothing is
    /// changed in that case.
    pub fn update(&self, bytes: &[u8], mode: UpdateMode) -> Result<()> {
        let incoming = parse_document(bytes)?;
        self.init();

        let mut state = self.write();
        match mode {
            UpdateMode::Merge => merge_dict(&mut state.raw, incoming),
            UpdateMode::Overwrite => {
                let mut next = Dict::new();
                if let Some(backup) = state.raw.get(PRESERVED_KEY) {
                    next.insert(PRESERVED_KEY.to_string(), backup.clone());
                }
                next.extend(incoming);
                state.raw = next;
            }
        }

        let State { raw, bindings } = &*state;
        for binding in bindings {
            binding.reload(raw);
        }
        info!(%mode, sections = bindings.len(), "applied config update");
        Ok(())
    }

    /// [`Registry::update`] with the mode given as a label; unknown labels
    /// merge.
    ///
    /// # Errors
    ///
    /// See [`Registry::update`].
    pub fn update_with_label(&self, bytes: &[u8], mode: &str) -> Result<()> {
        self.update(bytes, UpdateMode::from_label(mode))
    }

    /// Returns a copy of the raw sub-tree stored under `name`.
    #[must_use]
    pub fn raw_section(&self, name: &str) -> Option<Value> {
        self.read().raw.get(name).cloned()
    }

    /// Returns a copy of the whole merged tree.
    #[must_use]
    pub fn snapshot(&self) -> Dict {
        self.read().raw.clone()
    }

    /// Names of all bindings, in registration order.
    #[must_use]
    pub fn section_names(&self) -> Vec<String> {
        self.read()
            .bindings
            .iter()
            .map(|b| b.name().to_string())
            .collect()
    }

    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.read().bindings.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(LoaderOptions::default())
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("options", &self.options)
            .field("initialized", &self.is_initialized())
            .field("sections", &self.section_names())
            .finish_non_exhaustive()
    }
}
