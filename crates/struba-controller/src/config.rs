//------------ Controller configuration --------------------------------------------

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub zk_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            zk_host: std::env::var("ZK_HOST").map_err(|_| ConfigError::MissingEnv("ZK_HOST"))?,
        })
    }
}
