//------------ Build-dispatch RPC seam ----------------------------------------------

use struba_shard::proto::completor_client::CompletorClient;
use struba_shard::proto::BuildTrieRequest;

/// How the controller tells a member to rebuild. A trait so a promotion
/// cycle can be exercised against an in-memory fake instead of a live
/// network call, mirroring [`struba_gateway::ShardClient`]'s role on the
/// read path.
#[tonic::async_trait]
pub trait BuildClient: Send + Sync {
    async fn build_trie(&self, address: &str, version: i64) -> Result<(), String>;
}

pub struct GrpcBuildClient;

#[tonic::async_trait]
impl BuildClient for GrpcBuildClient {
    async fn build_trie(&self, address: &str, version: i64) -> Result<(), String> {
        let endpoint = format!("http://{address}");
        let mut client = CompletorClient::connect(endpoint)
            .await
            .map_err(|err| err.to_string())?;
        client
            .build_trie(BuildTrieRequest {
                version: version as i32,
            })
            .await
            .map_err(|err| err.to_string())?;
        Ok(())
    }
}
