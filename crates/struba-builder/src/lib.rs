//! Index builder: drives one full rebuild of a shard's prefix index from
//! the analytics store.
//!
//! The analytics store (ClickHouse in the original implementation) is an
//! external collaborator out of this repository's scope (see
//! `SPEC_FULL.md` §1); [`AnalyticsStore`] is the seam a concrete driver
//! would implement.

pub mod builder;
pub mod error;
pub mod store;

pub use builder::build;
pub use error::BuildError;
pub use store::{AnalyticsStore, EmptyStore, PhraseUsageRow};

#[cfg(test)]
pub(crate) mod test_common {
    use std::io::Write;

    pub fn init() {
        let _ = env_logger::builder()
            .format(|buf, record| writeln!(buf, "{}", record.args()))
            .is_test(true)
            .try_init();
    }
}
