//------------ Controller errors ---------------------------------------------------

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnv(&'static str),
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Coordination(#[from] struba_zk::ZkError),
    #[error("BuildTrie failed on {} of {} staging-color member(s): {}", .failures.len(), .dispatched, .failures.iter().map(|(address, message)| format!("{address}: {message}")).collect::<Vec<_>>().join("; "))]
    Build {
        dispatched: usize,
        failures: Vec<(String, String)>,
    },
}
