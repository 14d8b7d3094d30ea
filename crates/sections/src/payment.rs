//! Payment gateways, keyed by merchant account.

use serde::{Deserialize, Serialize};

/// Alipay merchant app, an instance of the `alipay` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alipay {
    #[serde(rename = "appID")]
    pub app_id: String,
    pub gateway: String,
    pub private_key: String,
    pub public_key: String,
    pub notify_url: String,
}

/// WeChat Pay merchant, an instance of the `wechatpay` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WechatPay {
    #[serde(rename = "mchID")]
    pub mch_id: String,
    pub key: String,
    pub serial_no: String,
    pub private_key: String,
    pub public_key: String,
    pub notify_url: String,
}
