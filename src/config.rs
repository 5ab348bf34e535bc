use std::{env, fmt, net::SocketAddr, path::PathBuf, time::Duration};

/// Collector script behind the public CORS relay.
pub const DEFAULT_SYNC_URL: &str = "https://cors-anywhere.herokuapp.com/https://script.google.com/macros/s/AKfycby4zIUViJlA7kk0d5jMPHNAmEA2NV_iPML9SE8Sz8yblWKu7ru1aVQtKDjEZtcWMtXe/exec";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SYNC_TIMEOUT: Duration = Duration::from_secs(10);

/// Startup configuration handed to the store and the forwarder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub sync_url: String,
    pub sync_timeout: Duration,
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.key, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            sync_url: DEFAULT_SYNC_URL.to_string(),
            sync_timeout: DEFAULT_SYNC_TIMEOUT,
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("PORT") {
            config.port = value.trim().parse().map_err(|_| ConfigError { key: "PORT", value })?;
        }
        if let Some(value) = lookup("BRIEFING_SYNC_URL").filter(|v| !v.trim().is_empty()) {
            config.sync_url = value.trim().to_string();
        }
        if let Some(value) = lookup("BRIEFING_SYNC_TIMEOUT_SECS") {
            let secs: u64 = value.trim().parse().map_err(|_| ConfigError {
                key: "BRIEFING_SYNC_TIMEOUT_SECS",
                value,
            })?;
            config.sync_timeout = Duration::from_secs(secs);
        }
        if let Some(value) = lookup("BRIEFING_SEED_PATH").filter(|v| !v.trim().is_empty()) {
            config.seed_path = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.listen_addr().port(), 8080);
    }

    #[test]
    fn env_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "9100"),
            ("BRIEFING_SYNC_URL", "http://127.0.0.1:9/collect"),
            ("BRIEFING_SYNC_TIMEOUT_SECS", "2"),
            ("BRIEFING_SEED_PATH", "/tmp/seed.json"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.sync_url, "http://127.0.0.1:9/collect");
        assert_eq!(config.sync_timeout, Duration::from_secs(2));
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err.key, "PORT");
        let err = AppConfig::from_lookup(lookup(&[("BRIEFING_SYNC_TIMEOUT_SECS", "-1")])).unwrap_err();
        assert_eq!(err.key, "BRIEFING_SYNC_TIMEOUT_SECS");
    }
}
