//! Load config from the process environment (or any key lookup in tests).

use crate::config::types::*;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

impl ServiceConfig {
    /// Read `NQUERY_BIND`, `NQUERY_FILE` and `NQUERY_BODY_LIMIT`; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_str = lookup(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_str.trim().parse().map_err(|_| ConfigError::InvalidBind {
            var: BIND_VAR,
            value: bind_str.clone(),
        })?;

        let data_file = match lookup(FILE_VAR) {
            Some(v) if v.trim().is_empty() => return Err(ConfigError::Empty { var: FILE_VAR }),
            Some(v) => PathBuf::from(v.trim()),
            None => PathBuf::from(DEFAULT_FILE),
        };

        let body_limit = match lookup(BODY_LIMIT_VAR) {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidLimit {
                    var: BODY_LIMIT_VAR,
                    value: v,
                })?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            bind,
            data_file,
            body_limit,
        })
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
    fn defaults_when_unset() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind.port(), 4567);
    }

    #[test]
    fn reads_overrides() {
        let config = ServiceConfig::from_lookup(lookup(&[
            (BIND_VAR, "127.0.0.1:9000"),
            (FILE_VAR, "/var/lib/nquery/values.txt"),
            (BODY_LIMIT_VAR, "1024"),
        ]))
        .unwrap();
        assert_eq!(config.bind, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_file, PathBuf::from("/var/lib/nquery/values.txt"));
        assert_eq!(config.body_limit, 1024);
    }

    #[test]
    fn rejects_bad_bind() {
        let err = ServiceConfig::from_lookup(lookup(&[(BIND_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBind { .. }));
    }

    #[test]
    fn rejects_zero_limit() {
        let err = ServiceConfig::from_lookup(lookup(&[(BODY_LIMIT_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLimit { .. }));
    }

    #[test]
    fn rejects_blank_file() {
        let err = ServiceConfig::from_lookup(lookup(&[(FILE_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }
}
