use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_DIR: &str = ".fake-postman";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// Base URL of the proxy the CLI sends requests through.
    pub proxy_url: String,
    /// Directory holding the request history file.
    pub data_dir: PathBuf,
    /// Timeout for the proxy's outbound call. `None` waits indefinitely.
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            proxy_url: lookup("FAKE_POSTMAN_PROXY_URL")
                .unwrap_or_else(|| format!("http://localhost:{}", port)),
            data_dir: lookup("FAKE_POSTMAN_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            upstream_timeout: lookup("UPSTREAM_TIMEOUT_MS")
                .and_then(|t| t.parse().ok())
                .map(Duration::from_millis),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.proxy_url, "http://localhost:8080");
        assert_eq!(config.data_dir, PathBuf::from(".fake-postman"));
        assert_eq!(config.upstream_timeout, None);
    }

    #[test]
    fn test_proxy_url_follows_port() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "9000")]));
        assert_eq!(config.proxy_url, "http://localhost:9000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("FAKE_POSTMAN_PROXY_URL", "http://proxy:1234"),
            ("FAKE_POSTMAN_DATA_DIR", "/tmp/fp"),
            ("UPSTREAM_TIMEOUT_MS", "1500"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.proxy_url, "http://proxy:1234");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/fp"));
        assert_eq!(config.upstream_timeout, Some(Duration::from_millis(1500)));
    }
}
