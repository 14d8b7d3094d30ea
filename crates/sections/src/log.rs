use layerconf_types::{ConfigError, Reload, Result, Value};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

/// Section name of [`Log`].
pub const NAME: &str = "log";

/// Logging settings, bound to `log`.
///
/// Materialized through [`Reload`] so that the level string is validated and
/// turned into a [`LevelFilter`] once per update, not on every read. An
/// unknown level rejects the whole update and keeps the previous settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    pub handler: String,
    pub log_level: String,
    /// Parsed from `log_level`; `INFO` when unset.
    pub level: LevelFilter,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            handler: String::new(),
            log_level: String::new(),
            level: LevelFilter::INFO,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Fields {
    handler: String,
    #[serde(alias = "level")]
    log_level: String,
}

fn parse_level(label: &str) -> Result<LevelFilter> {
    let label = label.trim();
    if label.is_empty() {
        return Ok(LevelFilter::INFO);
    }
    label
        .to_ascii_lowercase()
        .parse::<LevelFilter>()
        .map_err(|e| ConfigError::materialize(NAME, e))
}

impl Reload for Log {
    fn reload(&mut self, raw: &Value) -> Result<()> {
        let fields = raw
            .deserialize::<Fields>()
            .map_err(|e| ConfigError::materialize(NAME, e))?;
        self.level = parse_level(&fields.log_level)?;
        self.handler = fields.handler;
        self.log_level = fields.log_level;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerconf_config::document::parse_str;

    fn raw(yaml: &str) -> Value {
        parse_str(yaml).unwrap().remove(NAME).unwrap()
    }

    #[test]
    fn test_reload_parses_level() {
        let mut log = Log::default();
        log.reload(&raw("log:\n  handler: json\n  logLevel: DEBUG\n")).unwrap();
        assert_eq!(log.handler, "json");
        assert_eq!(log.log_level, "DEBUG");
        assert_eq!(log.level, LevelFilter::DEBUG);
    }

    #[test]
    fn test_level_alias_and_default() {
        let mut log = Log::default();
        log.reload(&raw("log:\n  level: warn\n")).unwrap();
        assert_eq!(log.level, LevelFilter::WARN);

        log.reload(&raw("log:\n  handler: text\n")).unwrap();
        assert_eq!(log.level, LevelFilter::INFO);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let mut log = Log::default();
        let err = log.reload(&raw("log:\n  logLevel: loud\n")).unwrap_err();
        assert!(matches!(err, ConfigError::Materialize { .. }));
    }
}
