//! One-shot promotion controller: advances the cluster's current
//! generation by rebuilding the staging-color half of the fleet and
//! flipping the generation pointer. See `SPEC_FULL.md` §4.6.

pub mod client;
pub mod config;
pub mod error;
pub mod promote;

pub use client::{BuildClient, GrpcBuildClient};
pub use config::Config;
pub use error::{ConfigError, ControllerError};
pub use promote::run;
