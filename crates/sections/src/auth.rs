use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One OAuth2 client registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuth2 {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub scopes: Vec<String>,
}

/// Token signing and OAuth2 providers, bound to `auth`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Auth {
    pub jwt_secret: String,
    /// Provider name (`github`, `google`, ...) to client registration.
    pub oauth2: HashMap<String, OAuth2>,
}

impl Auth {
    #[must_use]
    pub fn provider(&self, name: &str) -> Option<&OAuth2> {
        self.oauth2.get(name)
    }
}

/// GitHub OAuth app, bound to `github`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Github {
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub client_secret: String,
}

/// GitLab OAuth app, bound to `gitlab`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gitlab {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}
