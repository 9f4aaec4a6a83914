//------------ Query routing --------------------------------------------------------

use crate::error::GatewayError;
use crate::shard_client::ShardClient;
use rand::seq::SliceRandom;
use struba_zk::CoordinationClient;

/// Implements `GET /complete` end to end per `SPEC_FULL.md` §4.5: read the
/// generation pointer, list members, filter to in-range candidates at the
/// current generation, shuffle, and try each until one succeeds.
///
/// An empty `query` matches no candidate's `[RangeStart, RangeEnd)` -- no
/// member ever owns the empty string, since every range is non-empty --
/// so it always falls through to [`GatewayError::NoReachableNode`] rather
/// than a dedicated "bad request" error. This mirrors the original
/// implementation's behavior exactly; see `SPEC_FULL.md` §9.
pub async fn complete(
    zk: &dyn CoordinationClient,
    client: &dyn ShardClient,
    query: &str,
) -> Result<Vec<String>, GatewayError> {
    let (generation, _version) = struba_zk::read_generation(zk, &struba_zk::generation_path())?;
    let mut members = struba_zk::list_members(zk, &struba_zk::nodes_path())?;
    members.retain(|member| member.info.Version == generation && member.info.owns(query));
    members.shuffle(&mut rand::rng());

    for member in &members {
        match client.auto_complete(&member.info.address(), query).await {
            Ok(results) => return Ok(results),
            Err(err) => log::warn!("candidate {} failed: {err}", member.info.address()),
        }
    }
    Err(GatewayError::NoReachableNode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shard_client::fake::FakeShardClient;
    use struba_store::NodeInfo;
    use struba_zk::FakeCoordinationClient;

    fn register(zk: &FakeCoordinationClient, info: &NodeInfo) {
        struba_zk::ensure_path(zk, &struba_zk::nodes_path()).unwrap();
        zk.create_ephemeral_sequential(
            &struba_zk::nodes_path_prefix(),
            serde_json::to_vec(info).unwrap().as_slice(),
        )
        .unwrap();
    }

    fn bootstrap_generation(zk: &FakeCoordinationClient, generation: i64) {
        struba_zk::create_if_absent(zk, &struba_zk::generation_path()).unwrap();
        let (_, version) = struba_zk::read_generation(zk, &struba_zk::generation_path()).unwrap();
        struba_zk::write_generation(zk, &struba_zk::generation_path(), generation, version).unwrap();
    }

    #[tokio::test]
    async fn routes_to_the_owning_member_at_current_generation() {
        let zk = FakeCoordinationClient::new();
        bootstrap_generation(&zk, 3);
        let mut info = NodeInfo::new("host-a".into(), "3201".into(), "a".into(), "m".into());
        info.Version = 3;
        register(&zk, &info);

        let shard_client = FakeShardClient::new();
        shard_client.set_ok(&info.address(), vec!["apple".into()]);

        let results = complete(&zk, &shard_client, "ap").await.unwrap();
        assert_eq!(results, vec!["apple".to_string()]);
    }

    #[tokio::test]
    async fn stale_generation_member_is_not_a_candidate() {
        let zk = FakeCoordinationClient::new();
        bootstrap_generation(&zk, 3);
        let mut info = NodeInfo::new("host-a".into(), "3201".into(), "a".into(), "m".into());
        info.Version = 2;
        register(&zk, &info);

        let shard_client = FakeShardClient::new();
        shard_client.set_ok(&info.address(), vec!["apple".into()]);

        let err = complete(&zk, &shard_client, "ap").await.unwrap_err();
        assert!(matches!(err, GatewayError::NoReachableNode));
    }

    #[tokio::test]
    async fn falls_back_to_the_next_candidate_after_a_failure() {
        let zk = FakeCoordinationClient::new();
        bootstrap_generation(&zk, 1);
        let mut bad = NodeInfo::new("host-a".into(), "3201".into(), "a".into(), "m".into());
        bad.Version = 1;
        let mut good = NodeInfo::new("host-b".into(), "3202".into(), "a".into(), "m".into());
        good.Version = 1;
        register(&zk, &bad);
        register(&zk, &good);

        let shard_client = FakeShardClient::new();
        shard_client.set_failing(&bad.address());
        shard_client.set_ok(&good.address(), vec!["apple".into()]);

        let results = complete(&zk, &shard_client, "ap").await.unwrap();
        assert_eq!(results, vec!["apple".to_string()]);
    }

    #[tokio::test]
    async fn empty_query_never_matches_a_candidate() {
        let zk = FakeCoordinationClient::new();
        bootstrap_generation(&zk, 1);
        let mut info = NodeInfo::new("host-a".into(), "3201".into(), "a".into(), "m".into());
        info.Version = 1;
        register(&zk, &info);

        let shard_client = FakeShardClient::new();
        shard_client.set_ok(&info.address(), vec!["apple".into()]);

        let err = complete(&zk, &shard_client, "").await.unwrap_err();
        assert!(matches!(err, GatewayError::NoReachableNode));
    }

    #[tokio::test]
    async fn no_candidates_reachable_returns_error() {
        let zk = FakeCoordinationClient::new();
        bootstrap_generation(&zk, 1);
        let shard_client = FakeShardClient::new();

        let err = complete(&zk, &shard_client, "ap").await.unwrap_err();
        assert!(matches!(err, GatewayError::NoReachableNode));
    }
}
