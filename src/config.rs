use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the client finds the remote API. Read from the environment after
/// `.env` has been loaded.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_url = lookup("TODOLISTS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_key = lookup("TODOLISTS_API_KEY").filter(|k| !k.is_empty());
        let timeout = match lookup("TODOLISTS_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().with_context(|| format!("TODOLISTS_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self { base_url, api_key, timeout: Duration::from_secs(timeout) })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var("TODOLISTS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let addr = raw.parse().with_context(|| format!("invalid TODOLISTS_BIND_ADDR: {raw}"))?;
        Ok(Self { addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.base_url, DEFAULT_API_URL);
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides() {
        let cfg = ClientConfig::from_lookup(lookup(&[
            ("TODOLISTS_API_URL", "https://example.test/api/1.1/"),
            ("TODOLISTS_API_KEY", "k"),
            ("TODOLISTS_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "https://example.test/api/1.1/");
        assert_eq!(cfg.api_key.as_deref(), Some("k"));
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_timeout() {
        assert!(ClientConfig::from_lookup(lookup(&[("TODOLISTS_TIMEOUT_SECS", "soon")])).is_err());
    }
}
