//! Data store connections. Each is a map section keyed by instance name,
//! with the primary connection under `default`.

use serde::{Deserialize, Serialize};

/// One MongoDB connection, an instance of the `mongo` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mongo {
    pub uri: String,
    pub hosts: Vec<String>,
    pub database: String,
    pub replica_set_name: String,
    pub username: String,
    pub password: String,
    pub source: String,
    pub pool_size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisSentinel {
    pub master: String,
    pub addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisCluster {
    pub addresses: Vec<String>,
}

/// One Redis connection, an instance of the `redis` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redis {
    pub sentinel: Option<RedisSentinel>,
    pub cluster: Option<RedisCluster>,
    pub address: String,
    pub password: String,
    pub db: i64,
}

/// Deployment shape of a Redis connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedisTopology {
    Sentinel,
    Cluster,
    Standalone,
}

impl Redis {
    /// Sentinel wins over cluster, which wins over a plain address.
    #[must_use]
    pub fn topology(&self) -> RedisTopology {
        if self.sentinel.is_some() {
            RedisTopology::Sentinel
        } else if self.cluster.is_some() {
            RedisTopology::Cluster
        } else {
            RedisTopology::Standalone
        }
    }
}

/// One MySQL connection, an instance of the `mysql` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mysql {
    pub dsn: String,
}
