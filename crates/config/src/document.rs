//! YAML documents as untyped configuration trees.

use figment::providers::{Format, Yaml};
use layerconf_types::{ConfigError, Dict, Result, Value};

/// Parses raw document bytes into a top-level mapping.
///
/// Blank input and a null document both yield an empty mapping.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the bytes are not UTF-8 or not valid
/// YAML, and [`ConfigError::NotAMapping`] if the root is a scalar or a
/// sequence.
pub fn parse_document(bytes: &[u8]) -> Result<Dict> {
    let text = std::str::from_utf8(bytes).map_err(|e| ConfigError::Parse(e.to_string()))?;
    parse_str(text)
}

/// Same as [`parse_document`] for text that is already decoded.
///
/// # Errors
///
/// See [`parse_document`].
pub fn parse_str(text: &str) -> Result<Dict> {
    if text.trim().is_empty() {
        return Ok(Dict::new());
    }
    let root = <Yaml as Format>::from_str::<Value>(text)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    match root {
        Value::Dict(_, dict) => Ok(dict),
        Value::Empty(..) => Ok(Dict::new()),
        _ => Err(ConfigError::NotAMapping),
    }
}
