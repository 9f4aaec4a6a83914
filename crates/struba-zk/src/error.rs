//------------ Coordination errors -----------------------------------------------

use thiserror::Error;

/// Failures talking to the coordination service. None of these cross a
/// process boundary with their internal detail: callers either retry,
/// log-and-continue, or collapse the error into an RPC/HTTP failure signal
/// per the propagation policy in `SPEC_FULL.md` §7.
#[derive(Debug, Error)]
pub enum ZkError {
    #[error("coordination service unreachable: {0}")]
    Connection(String),

    #[error("version conflict writing {path}: expected version did not match")]
    Conflict { path: String },

    #[error("no such coordination path: {0}")]
    NotFound(String),

    #[error("failed to decode coordination payload at {path}: {source}")]
    Serialization {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("not a valid ephemeral-sequential path: {0}")]
    InvalidSequentialPath(String),

    #[error("invalid generation pointer value at {path}: {value:?}")]
    InvalidGeneration { path: String, value: Vec<u8> },
}
