//! Stock configuration sections.
//!
//! Each schema only declares a name and a shape; [`Sections::register`]
//! binds all of them to a [`Registry`] and keeps the live handles together.

pub mod auth;
pub mod cloud;
pub mod datastore;
pub mod log;
pub mod nacos;
pub mod payment;
pub mod server;

pub use auth::{Auth, Github, Gitlab, OAuth2};
pub use cloud::{Aliyun, Riff, Smtp, Wechat};
pub use datastore::{Mongo, Mysql, Redis, RedisCluster, RedisSentinel, RedisTopology};
pub use log::Log;
pub use nacos::Nacos;
pub use payment::{Alipay, WechatPay};
pub use server::Server;

use layerconf_config::{Registry, Section};
use std::collections::HashMap;
use std::sync::LazyLock;

/// A map section keyed by instance name.
pub type MapSection<T> = Section<HashMap<String, T>>;

static GLOBAL: LazyLock<Sections> = LazyLock::new(|| Sections::register(Registry::global()));

/// Live handles to every stock section.
#[derive(Debug, Clone)]
pub struct Sections {
    pub server: Section<Server>,
    pub nacos: Section<Nacos>,
    pub log: Section<Log>,
    pub auth: Section<Auth>,
    pub smtp: Section<Smtp>,
    pub github: Section<Github>,
    pub gitlab: Section<Gitlab>,
    pub riff: Section<Riff>,
    pub mongo: MapSection<Mongo>,
    pub redis: MapSection<Redis>,
    pub mysql: MapSection<Mysql>,
    pub alipay: MapSection<Alipay>,
    pub aliyun: MapSection<Aliyun>,
    pub wechat: MapSection<Wechat>,
    pub wechatpay: MapSection<WechatPay>,
}

impl Sections {
    /// Binds every stock section to `registry`, bootstrapping it if needed.
    #[must_use]
    pub fn register(registry: &Registry) -> Self {
        Self {
            server: registry.register::<Server>(),
            nacos: registry.register::<Nacos>(),
            log: registry.register_with_hook(log::NAME, Log::default()),
            auth: registry.register::<Auth>(),
            smtp: registry.register::<Smtp>(),
            github: registry.register::<Github>(),
            gitlab: registry.register::<Gitlab>(),
            riff: registry.register::<Riff>(),
            mongo: registry.register_map("mongo"),
            redis: registry.register_map("redis"),
            mysql: registry.register_map("mysql"),
            alipay: registry.register_map("alipay"),
            aliyun: registry.register_map("aliyun"),
            wechat: registry.register_map("wechat"),
            wechatpay: registry.register_map("wechatpay"),
        }
    }

    /// Stock sections bound to [`Registry::global`].
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }
}
