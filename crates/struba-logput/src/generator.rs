//------------ Phrase generation -----------------------------------------------------

use crate::payload::PhrasePayload;
use crate::sink::EventSink;
use rand::seq::IndexedRandom;
use rand::Rng;

// Two fixture categories standing in for the original's two `gofakeit`
// generators (`BeerName`, `Name`); no such faker crate is in this
// workspace's dependency stack, so these are small static pools instead.
const BEER_NAMES: &[&str] = &[
    "Hoppy Ending", "Midnight Stout", "Copper Trail", "Wanderlust IPA", "Harvest Moon Ale",
];
const PERSON_NAMES: &[&str] = &[
    "Alice Munroe", "Bertram Okafor", "Celeste Vargas", "Dimitri Volkov", "Esperanza Liu",
];

/// Picks one phrase per call: a beer name 10% of the time, a person name
/// the rest, matching the original's `rand.Float32() > 0.9` split.
pub fn random_phrase(rng: &mut impl Rng) -> String {
    let pool = if rng.random::<f32>() > 0.9 {
        BEER_NAMES
    } else {
        PERSON_NAMES
    };
    pool.choose(rng).expect("pool is non-empty").to_string()
}

/// Builds one payload for `phrase`, stamped with the current Unix time and
/// a count of one -- every synthetic event represents a single occurrence.
pub fn payload_for(phrase: String, created: i64) -> PhrasePayload {
    PhrasePayload {
        Phrase: phrase,
        Count: 1,
        Created: created,
    }
}

/// Generates one payload and publishes its JSON encoding to `topic`.
pub fn emit_one(sink: &dyn EventSink, topic: &str, rng: &mut impl Rng, created: i64) {
    let payload = payload_for(random_phrase(rng), created);
    let encoded = serde_json::to_vec(&payload).expect("PhrasePayload always serializes");
    sink.publish(topic, &encoded);
}
