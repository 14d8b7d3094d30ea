//! Bindings between section names and live handles.

use crate::section::Section;
use layerconf_types::{ConfigError, Dict, Reload, Result, Value};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

type ReloadFn = Box<dyn Fn(&str, &Value) -> Result<()> + Send + Sync>;

/// How a binding turns its sub-tree into a value. Chosen once at
/// registration.
enum Strategy {
    /// Deserialize the sub-tree into a fresh value.
    Copy(ReloadFn),
    /// Hand the sub-tree to the section's own [`Reload`] implementation.
    Hook(ReloadFn),
}

impl Strategy {
    fn label(&self) -> &'static str {
        match self {
            Self::Copy(_) => "copy",
            Self::Hook(_) => "hook",
        }
    }

    fn run(&self, name: &str, raw: &Value) -> Result<()> {
        match self {
            Self::Copy(f) | Self::Hook(f) => f(name, raw),
        }
    }
}

/// One registered section.
pub(crate) struct Binding {
    name: String,
    strategy: Strategy,
}

impl Binding {
    /// Binds `section` through a plain deserialize of its sub-tree.
    pub(crate) fn copy<T>(name: String, section: Section<T>) -> Self
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        let strategy = Strategy::Copy(Box::new(move |name: &str, raw: &Value| {
            let next: T = raw
                .deserialize::<T>()
                .map_err(|e| ConfigError::materialize(name, e))?;
            section.store(next);
            Ok(())
        }));
        Self { name, strategy }
    }

    /// Binds `section` through its [`Reload`] hook. The hook runs on a copy
    /// of the current value, which is published only on success.
    pub(crate) fn hook<T>(name: String, section: Section<T>) -> Self
    where
        T: Reload + Clone,
    {
        let strategy = Strategy::Hook(Box::new(move |_: &str, raw: &Value| {
            let mut next = (**section.load()).clone();
            next.reload(raw)?;
            section.store(next);
            Ok(())
        }));
        Self { name, strategy }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Re-applies the binding from `raw`.
    ///
    /// An absent or null sub-tree leaves the section untouched. A sub-tree
    /// that does not fit is logged and also leaves the section untouched.
    pub(crate) fn reload(&self, raw: &Dict) {
        let sub = match raw.get(&self.name) {
            None | Some(Value::Empty(..)) => {
                debug!(section = %self.name, "no config for section, keeping current value");
                return;
            }
            Some(sub) => sub,
        };
        if let Err(e) = self.strategy.run(&self.name, sub) {
            warn!(
                section = %self.name,
                strategy = self.strategy.label(),
                error = %e,
                "section reload failed, keeping previous value"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_str;
    use serde::Deserialize;

    #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Smtp {
        address: String,
        port: u16,
    }

    #[derive(Debug, Clone, Default)]
    struct Upper {
        value: String,
    }

    impl Reload for Upper {
        fn reload(&mut self, raw: &Value) -> Result<()> {
            let s = raw.as_str().ok_or_else(|| ConfigError::materialize("upper", "expected a string"))?;
            self.value = s.to_uppercase();
            Ok(())
        }
    }

    #[test]
    fn test_copy_reload() {
        let section = Section::new(Smtp::default());
        let binding = Binding::copy("smtp".into(), section.clone());
        binding.reload(&parse_str("smtp:\n  address: mail.local\n  port: 25\n").unwrap());
        assert_eq!(section.load().address, "mail.local");
        assert_eq!(section.load().port, 25);
        assert_eq!(binding.name(), "smtp");
    }

    #[test]
    fn test_absent_subtree_is_noop() {
        let section = Section::new(Smtp {
            address: "keep".into(),
            port: 1,
        });
        let binding = Binding::copy("smtp".into(), section.clone());
        binding.reload(&parse_str("other: 1\n").unwrap());
        binding.reload(&parse_str("smtp:\n").unwrap());
        assert_eq!(section.load().address, "keep");
    }

    #[test]
    fn test_mismatched_subtree_keeps_previous() {
        let section = Section::new(Smtp {
            address: "keep".into(),
            port: 1,
        });
        let binding = Binding::copy("smtp".into(), section.clone());
        binding.reload(&parse_str("smtp:\n  port: not-a-port\n").unwrap());
        assert_eq!(section.load().address, "keep");
        assert_eq!(section.load().port, 1);
    }

    #[test]
    fn test_hook_reload() {
        let section = Section::new(Upper::default());
        let binding = Binding::hook("upper".into(), section.clone());
        binding.reload(&parse_str("upper: shout\n").unwrap());
        assert_eq!(section.load().value, "SHOUT");

        binding.reload(&parse_str("upper: [1, 2]\n").unwrap());
        assert_eq!(section.load().value, "SHOUT");
    }
}
