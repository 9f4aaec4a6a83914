//------------ Gateway errors ------------------------------------------------------

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Coordination(#[from] struba_zk::ZkError),
    #[error("RPC failed: {0}")]
    Rpc(String),
    #[error("could not connect to any node")]
    NoReachableNode,
}
