use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

const HOST_VAR: &str = "FILE_RECEIVER_HOST";
const PORT_VAR: &str = "FILE_RECEIVER_PORT";
const MAX_BODY_VAR: &str = "FILE_RECEIVER_MAX_BODY_BYTES";
const DEFAULT_PORT: u16 = 5000;
/// Synchronous invocation payload limit of the hosting platform.
pub const DEFAULT_MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let host = match lookup(HOST_VAR) {
            Some(value) => value
                .parse::<IpAddr>()
                .with_context(|| format!("Invalid {HOST_VAR}: '{value}'"))?,
            None => defaults.host,
        };
        let port = match lookup(PORT_VAR) {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("Invalid {PORT_VAR}: '{value}'"))?,
            None => defaults.port,
        };
        let max_body_bytes = match lookup(MAX_BODY_VAR) {
            Some(value) => value
                .parse::<usize>()
                .with_context(|| format!("Invalid {MAX_BODY_VAR}: '{value}'"))?,
            None => defaults.max_body_bytes,
        };
        Ok(Self {
            host,
            port,
            max_body_bytes,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5000");
        assert_eq!(config.max_body_bytes, 6 * 1024 * 1024);
    }

    #[test]
    fn reads_host_and_port() {
        let config =
            Config::from_lookup(lookup(&[(HOST_VAR, "127.0.0.1"), (PORT_VAR, "8080")])).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn reads_body_limit() {
        let config = Config::from_lookup(lookup(&[(MAX_BODY_VAR, "1048576")])).unwrap();
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert!(Config::from_lookup(lookup(&[(MAX_BODY_VAR, "-1")])).is_err());
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[(PORT_VAR, "70000")])).unwrap_err();
        assert!(err.to_string().contains(PORT_VAR));
    }
}
