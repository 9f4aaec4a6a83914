//------------ Gateway configuration -----------------------------------------------

use crate::error::ConfigError;

/// Startup configuration. Per `SPEC_FULL.md` §6 the gateway only requires
/// `ZK_HOST`; `PORT` is an ambient addition (the spec leaves the gateway's
/// own listen port unspecified) defaulting to `8080`.
#[derive(Debug, Clone)]
pub struct Config {
    pub zk_host: String,
    pub port: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            zk_host: std::env::var("ZK_HOST").map_err(|_| ConfigError::MissingEnv("ZK_HOST"))?,
            port: std::env::var("PORT").unwrap_or_else(|_| "8080".to_string()),
        })
    }
}
