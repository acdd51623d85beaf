use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};

pub const DEFAULT_TICK_MS: u64 = 250;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where logs go. `None` disables logging; the terminal belongs to the UI.
    pub log_file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self { log_file: None, log_filter: "info".to_string(), tick_rate: Duration::from_millis(DEFAULT_TICK_MS) }
    }
}

impl Config {
    /// Reads `.env` (if any) and then the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(path) = lookup("TODO_LOG_FILE").filter(|p| !p.trim().is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }
        if let Some(filter) = lookup("TODO_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(raw) = lookup("TODO_TICK_MS") {
            let ms: u64 = raw.trim().parse().with_context(|| format!("TODO_TICK_MS is not a number: {raw:?}"))?;
            if ms == 0 { bail!("TODO_TICK_MS must be greater than zero"); }
            config.tick_rate = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_rate, Duration::from_millis(250));
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            ("TODO_LOG_FILE", "logs/todo.log"),
            ("TODO_LOG", "debug"),
            ("TODO_TICK_MS", " 100 "),
        ]))
        .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("logs/todo.log")));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = Config::from_lookup(lookup(&[("TODO_LOG_FILE", ""), ("TODO_LOG", " ")])).unwrap();
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn bad_tick_is_an_error() {
        assert!(Config::from_lookup(lookup(&[("TODO_TICK_MS", "fast")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TODO_TICK_MS", "0")])).is_err());
    }
}
