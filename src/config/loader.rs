//! Load settings from the process environment.

use crate::config::types::Config;
use crate::error::ConfigError;
use std::str::FromStr;

impl Config {
    /// Read settings from env. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same rules as [`Config::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = non_empty("DATABASE_URL")
            .or_else(|| non_empty("DB_URI"))
            .unwrap_or(defaults.database_url);
        let host = non_empty("HOST").unwrap_or(defaults.host);
        let port = parse_or("PORT", non_empty("PORT"), defaults.port)?;
        let max_connections = parse_or("DB_MAX_CONNECTIONS", non_empty("DB_MAX_CONNECTIONS"), defaults.max_connections)?;
        let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", non_empty("BODY_LIMIT_BYTES"), defaults.body_limit_bytes)?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        Ok(Config {
            database_url,
            host,
            port,
            max_connections,
            body_limit_bytes,
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{DEFAULT_DATABASE_URL, DEFAULT_PORT};
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_env_uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn database_url_wins_over_db_uri() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite://primary.db"),
            ("DB_URI", "sqlite://fallback.db"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite://primary.db");
    }

    #[test]
    fn db_uri_is_used_when_database_url_missing() {
        let config = Config::from_lookup(lookup(&[("DB_URI", "sqlite://fallback.db")])).unwrap();
        assert_eq!(config.database_url, "sqlite://fallback.db");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "  "), ("PORT", "")])).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "not-a-port")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));
    }

    #[test]
    fn zero_connections_rejected() {
        let err = Config::from_lookup(lookup(&[("DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "DB_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn bind_addr_combines_host_and_port() {
        let config = Config::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
    }
}
