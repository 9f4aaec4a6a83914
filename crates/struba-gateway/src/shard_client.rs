//------------ Shard RPC client seam -----------------------------------------------

use crate::error::GatewayError;
use struba_shard::proto::completor_client::CompletorClient;
use struba_shard::proto::AutoCompleteRequest;

/// How the gateway reaches a shard's `AutoComplete` RPC. A trait so routing
/// logic can be exercised against [`FakeShardClient`] instead of a live
/// network call.
#[tonic::async_trait]
pub trait ShardClient: Send + Sync {
    async fn auto_complete(&self, address: &str, query: &str) -> Result<Vec<String>, GatewayError>;
}

/// Dials a fresh gRPC channel per call, matching the gateway's "no
/// caching" design (§4.5): nothing about a shard's reachability is
/// remembered between requests.
pub struct GrpcShardClient;

#[tonic::async_trait]
impl ShardClient for GrpcShardClient {
    async fn auto_complete(&self, address: &str, query: &str) -> Result<Vec<String>, GatewayError> {
        let endpoint = format!("http://{address}");
        let mut client = CompletorClient::connect(endpoint)
            .await
            .map_err(|err| GatewayError::Rpc(err.to_string()))?;
        let response = client
            .auto_complete(AutoCompleteRequest {
                query: query.to_string(),
            })
            .await
            .map_err(|err| GatewayError::Rpc(err.to_string()))?;
        Ok(response.into_inner().results)
    }
}
