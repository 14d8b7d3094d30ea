//! Bootstrap and chain file loading.
//!
//! The bootstrap file is read first. Its `config` key (or the `config`
//! environment variable, which takes precedence) names further files to
//! layer on top, resolved next to the bootstrap file. Every layer is parsed on
//! its own and deep-merged in order, so a later layer wins on scalar keys and
//! extends mapping keys. Missing or malformed files are logged and skipped;
//! loading itself never fails.

use crate::document::parse_document;
use crate::merge::merge_dict;
use layerconf_types::{ConfigError, Dict, Result, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable overriding the bootstrap file location.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Environment variable overriding the chain of additional files.
pub const CHAIN_ENV: &str = "config";

/// Bootstrap key holding the comma-separated chain of additional files.
pub const CHAIN_KEY: &str = "config";

/// Conventional bootstrap locations, tried in order.
pub const BOOTSTRAP_CANDIDATES: &[&str] = &["config/app.yaml", "config/app.yml"];

/// Extensions tried for each chain entry, preferred first.
pub const CHAIN_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Where to find the bootstrap file and which files to chain after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Explicit bootstrap file; skips the conventional locations.
    pub path: Option<PathBuf>,
    /// Comma-separated chain, replacing the bootstrap's own `config` key.
    pub chain: Option<String>,
}

impl LoaderOptions {
    /// Reads `CONFIG_PATH` and `config` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds options from an arbitrary variable lookup. Blank values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup(CONFIG_PATH_ENV)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let chain = lookup(CHAIN_ENV).filter(|c| !c.trim().is_empty());
        Self { path, chain }
    }

    /// Sets an explicit bootstrap file.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets an explicit chain of additional files.
    #[must_use]
    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = Some(chain.into());
        self
    }

    /// Resolves the bootstrap file relative to the working directory.
    #[must_use]
    pub fn bootstrap_path(&self) -> PathBuf {
        self.bootstrap_path_in(Path::new(""))
    }

    fn bootstrap_path_in(&self, root: &Path) -> PathBuf {
        if let Some(path) = &self.path {
            return path.clone();
        }
        BOOTSTRAP_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
            .unwrap_or_else(|| root.join(BOOTSTRAP_CANDIDATES[0]))
    }
}

/// Splits a chain value into trimmed, non-empty base names.
#[must_use]
pub fn chain_entries(chain: &str) -> Vec<&str> {
    chain
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Resolves a chain entry inside `dir`, preferring `.yaml` over `.yml`.
///
/// When neither exists the preferred path is returned so the read failure
/// names it.
#[must_use]
pub fn resolve_chain_file(dir: &Path, name: &str) -> PathBuf {
    CHAIN_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|path| path.exists())
        .unwrap_or_else(|| dir.join(format!("{name}.{}", CHAIN_EXTENSIONS[0])))
}

/// Reads and parses a single layer.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, or a parse error
/// if its contents are not a YAML mapping.
pub fn read_layer(path: &Path) -> Result<Dict> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&bytes)
}

/// Loads the bootstrap file and its chain into one merged tree.
///
/// Never fails: an unreadable bootstrap yields an empty tree, and an
/// unreadable or malformed chain file is skipped.
#[must_use]
pub fn load(options: &LoaderOptions) -> Dict {
    let bootstrap = options.bootstrap_path();
    let mut raw = match read_layer(&bootstrap) {
        Ok(dict) => {
            info!(path = %bootstrap.display(), keys = dict.len(), "loaded bootstrap config");
            dict
        }
        Err(e) => {
            warn!(path = %bootstrap.display(), error = %e, "bootstrap config unavailable, starting empty");
            Dict::new()
        }
    };

    let chain = match &options.chain {
        Some(chain) => Some(chain.clone()),
        None => match raw.get(CHAIN_KEY) {
            Some(Value::String(_, chain)) => Some(chain.clone()),
            Some(other) => {
                debug!(value = ?other, "ignoring non-string `{CHAIN_KEY}` key");
                None
            }
            None => None,
        },
    };
    let Some(chain) = chain else {
        return raw;
    };

    let dir = bootstrap.parent().unwrap_or_else(|| Path::new(""));
    for name in chain_entries(&chain) {
        let path = resolve_chain_file(dir, name);
        match read_layer(&path) {
            Ok(layer) => {
                info!(path = %path.display(), keys = layer.len(), "merged chained config");
                merge_dict(&mut raw, layer);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping chained config"),
        }
    }
    raw
}
