//! Update semantics for runtime configuration pushes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a runtime update is applied to the merged configuration tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum UpdateMode {
    /// Recursively combine the update into the existing tree.
    #[default]
    Merge,
    /// Discard the existing tree, keeping only the dynamic-configuration
    /// connection settings, then repopulate it from the update.
    Overwrite,
}

impl UpdateMode {
    /// Maps a mode label to an [`UpdateMode`].
    ///
    /// Only `overwrite` (case-insensitive, surrounding whitespace ignored)
    /// selects [`UpdateMode::Overwrite`]; anything else, including an empty
    /// label, falls back to [`UpdateMode::Merge`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("overwrite") {
            Self::Overwrite
        } else {
            Self::Merge
        }
    }
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merge => write!(f, "merge"),
            Self::Overwrite => write!(f, "overwrite"),
        }
    }
}

impl std::str::FromStr for UpdateMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

impl From<String> for UpdateMode {
    fn from(s: String) -> Self {
        Self::from_label(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label() {
        assert_eq!(UpdateMode::from_label("merge"), UpdateMode::Merge);
        assert_eq!(UpdateMode::from_label("overwrite"), UpdateMode::Overwrite);
        assert_eq!(UpdateMode::from_label(" Overwrite "), UpdateMode::Overwrite);
    }

    #[test]
    fn test_unknown_label_is_merge() {
        assert_eq!(UpdateMode::from_label(""), UpdateMode::Merge);
        assert_eq!(UpdateMode::from_label("replace"), UpdateMode::Merge);
        assert_eq!(UpdateMode::default(), UpdateMode::Merge);
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(UpdateMode::Merge.to_string(), "merge");
        assert_eq!(UpdateMode::Overwrite.to_string(), "overwrite");
    }

    #[test]
    fn test_serde_lenient() {
        let m: UpdateMode = serde_json::from_str("\"overwrite\"").unwrap();
        assert_eq!(m, UpdateMode::Overwrite);
        let m: UpdateMode = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(m, UpdateMode::Merge);
        assert_eq!(
            serde_json::to_string(&UpdateMode::Overwrite).unwrap(),
            "\"overwrite\""
        );
    }
}
