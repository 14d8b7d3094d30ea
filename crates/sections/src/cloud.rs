use serde::{Deserialize, Serialize};

/// Aliyun access key, an instance of the `aliyun` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aliyun {
    #[serde(rename = "accessKeyID")]
    pub access_key_id: String,
    #[serde(rename = "accessSecret")]
    pub access_secret: String,
}

/// WeChat app, an instance of the `wechat` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wechat {
    #[serde(rename = "appID")]
    pub app_id: String,
    pub app_secret: String,
    /// App kind, e.g. `mp` or `mini`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Riff service endpoint, bound to `riff`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Riff {
    pub url: String,
}

/// Outgoing mail server, bound to `smtp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Smtp {
    pub address: String,
    pub name: String,
    pub username: String,
    pub password: String,
}
