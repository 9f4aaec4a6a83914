//! Library surface of a `struba` shard node: the generated gRPC types, the
//! `Completor` service implementation, configuration, and error types.
//! Split out of `main.rs` so the service can be exercised directly in
//! tests without standing up a real listener.

pub mod config;
pub mod error;
pub mod service;

pub mod proto {
    tonic::include_proto!("completor");
}

pub use config::Config;
pub use error::{ConfigError, ShardError};
pub use service::ShardService;
