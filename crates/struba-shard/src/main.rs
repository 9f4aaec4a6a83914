//! Shard node binary: registers itself as an ephemeral cluster member
//! advertising its range, then serves the `Completor` RPC surface from
//! whichever generation it last built. See `SPEC_FULL.md` §4.4.

use std::sync::Arc;
use struba_shard::proto::completor_server::CompletorServer;
use struba_shard::{Config, ShardService};
use struba_store::NodeInfo;
use struba_zk::CoordinationClient;

// Neither a ZooKeeper wire client nor a ClickHouse driver ships in this
// repository -- both are external collaborators out of scope per
// `SPEC_FULL.md` §1, specified here only by the `CoordinationClient` and
// `AnalyticsStore` traits. Wiring this binary against real ones means
// substituting the constructions below for a real driver's; until then it
// runs against the in-memory fakes so the rest of the service is
// exercisable end to end.
fn connect_zk(host: &str) -> Arc<dyn CoordinationClient> {
    log::warn!("no coordination-service driver configured; using in-memory fake (target {host})");
    Arc::new(struba_zk::FakeCoordinationClient::new())
}

fn connect_store(host: &str, port: &str) -> Arc<dyn struba_builder::AnalyticsStore> {
    log::warn!("no analytics-store driver configured; querying will return no rows (target {host}:{port})");
    Arc::new(struba_builder::EmptyStore)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    let info = NodeInfo::new(
        config.host_name.clone(),
        config.port.clone(),
        config.range_start.clone(),
        config.range_end.clone(),
    );

    let zk = connect_zk(&config.zk_host);
    struba_zk::ensure_path(zk.as_ref(), &struba_zk::nodes_path())?;
    let znode_path = zk.create_ephemeral_sequential(
        &struba_zk::nodes_path_prefix(),
        serde_json::to_vec(&info)?.as_slice(),
    )?;
    log::info!("registered as {znode_path} owning [{}, {})", config.range_start, config.range_end);

    let store = connect_store(&config.ch_host, &config.ch_port);
    let service = ShardService::new(znode_path, info, zk, store);

    let addr = format!("0.0.0.0:{}", config.port).parse()?;
    log::info!("listening on {addr}");
    tonic::transport::Server::builder()
        .add_service(CompletorServer::new(service))
        .serve(addr)
        .await?;

    Ok(())
}
