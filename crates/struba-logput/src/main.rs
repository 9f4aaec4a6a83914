//! Generator binary: publishes a steady stream of synthetic phrase events
//! until interrupted, for exercising `struba-builder`/`struba-shard`
//! locally without a real analytics pipeline.

use struba_logput::{emit_one, LoggingSink};

fn kafka_host() -> String {
    std::env::var("KAFKA_HOST").unwrap_or_else(|_| "kafka:9092".to_string())
}

fn kafka_topic() -> String {
    std::env::var("KAFKA_TOPIC").unwrap_or_else(|_| "phrases-json".to_string())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let host = kafka_host();
    let topic = kafka_topic();
    log::info!("submitting synthetic phrases to {topic} (target bus at {host})");

    let sink = LoggingSink;
    let mut rng = rand::rng();
    let mut enqueued: u64 = 0;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info!("shutting down; published {enqueued} events");
                break;
            }
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {
                let created = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .expect("system clock before Unix epoch")
                    .as_secs() as i64;
                emit_one(&sink, &topic, &mut rng, created);
                enqueued += 1;
            }
        }
    }
}
