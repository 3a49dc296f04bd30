use std::{env, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub scan_delay: Duration,
    pub analysis_delay: Duration,
    /// Points balance shown on the storefront loyalty card.
    pub loyalty_points: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "static".to_string(),
            scan_delay: Duration::from_millis(2000),
            analysis_delay: Duration::from_millis(2000),
            loyalty_points: 2500,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: number(&lookup, "PORT")?.unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            scan_delay: number(&lookup, "SCAN_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.scan_delay),
            analysis_delay: number(&lookup, "ANALYSIS_DELAY_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.analysis_delay),
            loyalty_points: number(&lookup, "LOYALTY_POINTS")?.unwrap_or(defaults.loyalty_points),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn number<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.scan_delay, Duration::from_millis(2000));
        assert_eq!(config.loyalty_points, 2500);
    }

    #[test]
    fn variables_override_defaults() {
        let config = config_from(&[("PORT", "8080"), ("SCAN_DELAY_MS", "50"), ("HOST", "127.0.0.1")]).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.scan_delay, Duration::from_millis(50));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.to_string(), "PORT must be a number, got \"eighty\"");
    }
}
