//! Dev-only synthetic phrase generator, grounded on the original
//! implementation's `logput` fixture tool. Not part of the serving or
//! build path -- see `SPEC_FULL.md` §4.7.

pub mod generator;
pub mod payload;
pub mod sink;

pub use generator::{emit_one, payload_for, random_phrase};
pub use payload::PhrasePayload;
pub use sink::{EventSink, LoggingSink};
