use crate::registry::Registry;
use layerconf_types::{ConfigError, Result, UpdateMode};
use notify::RecommendedWatcher;
use std::{path::PathBuf, sync::Arc};
use tracing::{info, warn};

/// Feeds a file into [`Registry::update`] whenever it changes.
///
/// This is the local stand-in for a dynamic configuration service: whatever
/// lands in the file is pushed to the registry with the configured mode.
pub struct UpdateWatcher {
    /// Registry receiving the updates.
    registry: Arc<Registry>,
    /// File holding the update payload.
    path: PathBuf,
    mode: UpdateMode,
    on_update: Option<OnUpdate>,
}

type OnUpdate = Box<dyn Fn(&Registry) + Send + Sync>;

/// Keeps a running watch alive. Dropping it stops the watch.
pub struct WatchGuard {
    _watcher: RecommendedWatcher,
    task: tokio::task::JoinHandle<()>,
}

impl WatchGuard {
    /// Stops watching and waits for the last in-flight update to finish.
    pub async fn stop(self) {
        let Self {
            _watcher: watcher,
            task,
        } = self;
        drop(watcher);
        let _ = task.await;
    }
}

impl UpdateWatcher {
    #[must_use]
    pub fn new(registry: Arc<Registry>, path: impl Into<PathBuf>, mode: UpdateMode) -> Self {
        Self {
            registry,
            path: path.into(),
            mode,
            on_update: None,
        }
    }

    /// Runs `f` after every update the registry accepts, with all sections
    /// already reloaded.
    #[must_use]
    pub fn with_on_update(mut self, f: impl Fn(&Registry) + Send + Sync + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Reads the file once and applies it, then runs the update callback.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or a parse
    /// error if its contents are rejected by the registry.
    pub fn apply(&self) -> Result<()> {
        let bytes = std::fs::read(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        self.registry.update(&bytes, self.mode)?;
        if let Some(f) = &self.on_update {
            f(&self.registry);
        }
        Ok(())
    }

    /// Starts background file watching (a blocking tokio task) that applies
    /// the file on every modification.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Watch`] if the OS file watcher cannot be
    /// created or the path cannot be registered for watching.
    pub fn watch(self: Arc<Self>) -> Result<WatchGuard> {
        use notify::{RecursiveMode, Watcher as _};

        let (tx, rx) = std::sync::mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            match res {
                Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                    let _ = tx.send(());
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "config watch error"),
            }
        })
        .map_err(|e| ConfigError::Watch(e.to_string()))?;

        watcher
            .watch(&self.path, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::Watch(e.to_string()))?;
        info!(path = %self.path.display(), mode = %self.mode, "watching config updates");

        let task = tokio::task::spawn_blocking(move || {
            for () in rx {
                match self.apply() {
                    Ok(()) => info!(path = %self.path.display(), "config update applied"),
                    Err(e) => warn!(path = %self.path.display(), error = %e, "config update rejected"),
                }
            }
        });
        Ok(WatchGuard {
            _watcher: watcher,
            task,
        })
    }
}
