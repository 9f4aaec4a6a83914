//------------ Build errors -------------------------------------------------------

use thiserror::Error;

/// Any transport or query error aborts the build; no partial index is ever
/// returned to the caller (see `SPEC_FULL.md` §4.3, §7).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("could not reach the analytics store: {0}")]
    Transport(String),

    #[error("analytics query failed: {0}")]
    Query(String),

    #[error("malformed analytics row: {0}")]
    RowDecode(String),
}
