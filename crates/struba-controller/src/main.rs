//! Controller binary: invoked externally (cron / operator) to run a single
//! promotion cycle, then exit.

use std::sync::Arc;
use struba_controller::{Config, GrpcBuildClient};
use struba_zk::CoordinationClient;

fn connect_zk(host: &str) -> Arc<dyn CoordinationClient> {
    log::warn!("no coordination-service driver configured; using in-memory fake (target {host})");
    Arc::new(struba_zk::FakeCoordinationClient::new())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("startup failed: {err}");
            std::process::exit(1);
        }
    };

    let zk = connect_zk(&config.zk_host);
    match struba_controller::run(zk.as_ref(), &GrpcBuildClient).await {
        Ok(generation) => log::info!("promoted cluster to generation {generation}"),
        Err(err) => {
            log::error!("promotion cycle failed: {err}");
            std::process::exit(1);
        }
    }
}
