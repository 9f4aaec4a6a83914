//------------ Message bus publish seam ----------------------------------------------

/// Where a generated payload goes. A trait so the generator loop runs
/// against an in-memory sink in tests; the original implementation's real
/// target (Kafka) is an external collaborator out of scope -- see
/// `SPEC_FULL.md` §1/§4.7.
pub trait EventSink: Send + Sync {
    fn publish(&self, topic: &str, payload: &[u8]);
}

/// Logs every publish instead of sending it anywhere, for running this
/// binary locally without a message bus.
pub struct LoggingSink;

impl EventSink for LoggingSink {
    fn publish(&self, topic: &str, payload: &[u8]) {
        log::info!(
            "publish to {topic}: {}",
            String::from_utf8_lossy(payload)
        );
    }
}

#[cfg(test)]
pub struct RecordingSink {
    pub published: std::sync::Mutex<Vec<(String, Vec<u8>)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink {
            published: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl EventSink for RecordingSink {
    fn publish(&self, topic: &str, payload: &[u8]) {
        self.published
            .lock()
            .unwrap()
            .push((topic.to_string(), payload.to_vec()));
    }
}
