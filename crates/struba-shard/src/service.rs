//------------ Completor RPC service -----------------------------------------------

use crate::proto::completor_server::Completor;
use crate::proto::{AutoCompleteRequest, AutoCompleteResponse, BuildTrieRequest, BuildTrieResponse};
use arc_swap::ArcSwap;
use std::sync::{Arc, Mutex};
use struba_builder::AnalyticsStore;
use struba_store::{NodeInfo, PrefixIndex};
use struba_zk::CoordinationClient;
use tonic::{Request, Response, Status};

/// A shard node's RPC-visible state: `znode_path` and `info` mirror
/// `SPEC_FULL.md` §4.4's state description; `current_index` is the atomic
/// reference `AutoComplete` reads and `BuildTrie` swaps. `Fresh` is simply
/// `current_index` holding an empty [`PrefixIndex`]; there is no separate
/// enum variant for it, matching how `PrefixIndex::new()` already serves
/// empty results for every query.
pub struct ShardService {
    znode_path: String,
    info: Mutex<NodeInfo>,
    current_index: ArcSwap<PrefixIndex>,
    zk: Arc<dyn CoordinationClient>,
    store: Arc<dyn AnalyticsStore>,
}

impl ShardService {
    pub fn new(
        znode_path: String,
        info: NodeInfo,
        zk: Arc<dyn CoordinationClient>,
        store: Arc<dyn AnalyticsStore>,
    ) -> Self {
        ShardService {
            znode_path,
            info: Mutex::new(info),
            current_index: ArcSwap::from_pointee(PrefixIndex::new()),
            zk,
            store,
        }
    }
}

#[tonic::async_trait]
impl Completor for ShardService {
    async fn auto_complete(
        &self,
        request: Request<AutoCompleteRequest>,
    ) -> Result<Response<AutoCompleteResponse>, Status> {
        let query = request.into_inner().query;
        let index = self.current_index.load();
        let results = index.lookup(&query);
        Ok(Response::new(AutoCompleteResponse { results }))
    }

    async fn build_trie(
        &self,
        request: Request<BuildTrieRequest>,
    ) -> Result<Response<BuildTrieResponse>, Status> {
        let version = request.into_inner().version;
        let (range_start, range_end) = {
            let info = self.info.lock().unwrap();
            (info.RangeStart.clone(), info.RangeEnd.clone())
        };

        let store = self.store.clone();
        let index = tokio::task::spawn_blocking(move || {
            struba_builder::build(store.as_ref(), &range_start, &range_end)
        })
        .await
        .map_err(|err| Status::internal(format!("build task panicked: {err}")))?
        .map_err(|err| Status::internal(err.to_string()))?;

        self.current_index.store(Arc::new(index));

        let payload = {
            let mut info = self.info.lock().unwrap();
            info.Version = version as i64;
            serde_json::to_vec(&*info)
                .map_err(|err| Status::internal(format!("failed to encode node info: {err}")))?
        };

        match self.zk.get(&self.znode_path) {
            Ok((_, stat)) => {
                if let Err(err) = self.zk.set(&self.znode_path, &payload, stat) {
                    log::warn!(
                        "node-info write-back conflict at {}: {err} (next build will re-converge)",
                        self.znode_path
                    );
                }
            }
            Err(err) => {
                log::warn!("could not read {} before write-back: {err}", self.znode_path);
            }
        }

        Ok(Response::new(BuildTrieResponse {}))
    }
}
