use serde::{Deserialize, Serialize};

/// HTTP server settings, bound to `server`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Server {
    pub environment: String,
    pub url: String,
    pub short_url: String,
    pub allow_origins: Vec<String>,
    pub name: String,
    pub port: u16,
}

impl Server {
    /// Whether the server runs in a development environment.
    #[must_use]
    pub fn is_dev(&self) -> bool {
        matches!(self.environment.as_str(), "dev" | "development" | "local")
    }

    /// Listen address on all interfaces.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Whether `origin` may make cross-origin requests. `*` allows any.
    #[must_use]
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allow_origins.iter().any(|o| o == "*" || o == origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_origin() {
        let s = Server {
            allow_origins: vec!["https://a.example".into()],
            ..Server::default()
        };
        assert!(s.allows_origin("https://a.example"));
        assert!(!s.allows_origin("https://b.example"));

        let any = Server {
            allow_origins: vec!["*".into()],
            ..Server::default()
        };
        assert!(any.allows_origin("https://b.example"));
        assert!(!Server::default().allows_origin("https://a.example"));
    }

    #[test]
    fn test_listen_addr_and_env() {
        let s = Server {
            port: 8080,
            environment: "dev".into(),
            ..Server::default()
        };
        assert_eq!(s.listen_addr(), "0.0.0.0:8080");
        assert!(s.is_dev());
        assert!(!Server::default().is_dev());
    }
}
