//------------ Shard node configuration --------------------------------------------

use crate::error::ConfigError;

/// Startup configuration read from the environment, per
/// `SPEC_FULL.md` §6's Environment Variables table. Parsed once at
/// startup; missing required values fail fast before the shard registers
/// itself with the cluster.
#[derive(Debug, Clone)]
pub struct Config {
    pub host_name: String,
    pub port: String,
    pub range_start: String,
    pub range_end: String,
    pub zk_host: String,
    pub ch_host: String,
    pub ch_port: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            host_name: require_env("HOSTNAME")?,
            port: require_env("PORT")?,
            range_start: require_env("RANGE_START")?,
            range_end: require_env("RANGE_END")?,
            zk_host: require_env("ZK_HOST")?,
            ch_host: std::env::var("CH_HOST").unwrap_or_else(|_| "clickhouse".to_string()),
            ch_port: std::env::var("CH_PORT").unwrap_or_else(|_| "9000".to_string()),
        })
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize tests that
    // touch them so they don't interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn from_env_reports_missing_required_var() {
        let _guard = ENV_LOCK.lock().unwrap();
        for var in ["HOSTNAME", "PORT", "RANGE_START", "RANGE_END", "ZK_HOST"] {
            std::env::remove_var(var);
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(_)));
    }

    #[test]
    fn ch_host_and_port_default_when_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("HOSTNAME", "shard-a");
        std::env::set_var("PORT", "3201");
        std::env::set_var("RANGE_START", "a");
        std::env::set_var("RANGE_END", "m");
        std::env::set_var("ZK_HOST", "127.0.0.1:2181");
        std::env::remove_var("CH_HOST");
        std::env::remove_var("CH_PORT");

        let config = Config::from_env().unwrap();
        assert_eq!(config.ch_host, "clickhouse");
        assert_eq!(config.ch_port, "9000");

        for var in ["HOSTNAME", "PORT", "RANGE_START", "RANGE_END", "ZK_HOST"] {
            std::env::remove_var(var);
        }
    }
}
