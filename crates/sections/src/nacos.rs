use layerconf_types::UpdateMode;
use serde::{Deserialize, Serialize};

/// Connection settings of the dynamic configuration service, bound to
/// `nacos`.
///
/// This sub-tree survives overwrite updates, since overwrites arrive through
/// the very connection it describes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Nacos {
    pub enable: bool,
    pub ip_addr: String,
    pub port: u64,
    pub namespace_id: String,
    pub data_id: String,
    pub group: String,
    pub username: String,
    pub password: String,
    /// `merge` or `overwrite`; anything else merges.
    pub mode: String,
}

impl Nacos {
    /// How pushed configuration should be applied.
    #[must_use]
    pub fn update_mode(&self) -> UpdateMode {
        UpdateMode::from_label(&self.mode)
    }

    /// `host:port` of the server, if one is configured.
    #[must_use]
    pub fn server_addr(&self) -> Option<String> {
        if self.ip_addr.is_empty() {
            return None;
        }
        Some(format!("{}:{}", self.ip_addr, self.port))
    }
}
