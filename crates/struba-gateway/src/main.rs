//! Gateway binary: serves `GET /` (liveness) and `GET /complete?q=...`
//! per `SPEC_FULL.md` §4.5/§6.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use struba_gateway::{Config, GrpcShardClient, ShardClient};
use struba_zk::CoordinationClient;

struct AppState {
    zk: Arc<dyn CoordinationClient>,
    shard_client: Arc<dyn ShardClient>,
}

#[derive(Deserialize)]
struct CompleteQuery {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
struct CompleteResponseBody {
    results: Vec<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

async fn liveness() -> &'static str {
    "Hello, World 👋!"
}

async fn complete_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CompleteQuery>,
) -> impl IntoResponse {
    match struba_gateway::complete(state.zk.as_ref(), state.shard_client.as_ref(), &params.q).await {
        Ok(results) => (StatusCode::OK, Json(CompleteResponseBody { results })).into_response(),
        Err(err) => {
            log::warn!("complete({:?}) failed: {err}", params.q);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Could not connect to any node".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn connect_zk(host: &str) -> Arc<dyn CoordinationClient> {
    log::warn!("no coordination-service driver configured; using in-memory fake (target {host})");
    Arc::new(struba_zk::FakeCoordinationClient::new())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    let state = Arc::new(AppState {
        zk: connect_zk(&config.zk_host),
        shard_client: Arc::new(GrpcShardClient),
    });

    let app = Router::new()
        .route("/", get(liveness))
        .route("/complete", get(complete_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    log::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
