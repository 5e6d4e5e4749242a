use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://activities.db";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `PORT` has no default.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(v) if !v.trim().is_empty() => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {v:?}"))?,
            Some(_) => bail!("PORT is set but empty"),
            None => bail!("PORT must be set"),
        };
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let host = lookup("APP_HOST")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "0.0.0.0".into());

        Ok(Self {
            database_url,
            host,
            port,
        })
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_port_and_applies_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[("PORT", "8081")])).unwrap();
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn explicit_values_win() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("APP_HOST", "127.0.0.1"),
            ("DATABASE_URL", "sqlite://other.db"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.database_url, "sqlite://other.db");
    }

    #[test]
    fn missing_port_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("PORT must be set"));
    }

    #[test]
    fn empty_port_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn non_numeric_port_is_an_error() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }
}
