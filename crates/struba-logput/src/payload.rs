//------------ Synthetic phrase payload ---------------------------------------------

use serde::{Deserialize, Serialize};

/// Wire shape published to the message bus, matching the field casing of
/// the original `PhrasePayload` Go struct (`encoding/json` marshals
/// exported field names verbatim in the absence of a `json` tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct PhrasePayload {
    pub Phrase: String,
    pub Count: u32,
    pub Created: i64,
}
