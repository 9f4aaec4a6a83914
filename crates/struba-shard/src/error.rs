//------------ Shard errors -------------------------------------------------------

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),
    #[error("invalid value for environment variable {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ShardError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Coordination(#[from] struba_zk::ZkError),
    #[error(transparent)]
    Build(#[from] struba_builder::BuildError),
    #[error("failed to bind listener on port {port}: {source}")]
    Bind {
        port: String,
        #[source]
        source: std::io::Error,
    },
}
