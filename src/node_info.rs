//------------ Cluster membership record ---------------------------------------

use serde::{Deserialize, Serialize};

/// A shard node's advertisement, stored as JSON at an ephemeral-sequential
/// coordination path under `/<root>/backend/nodes/`.
///
/// Field names and casing are part of the wire contract and must not
/// change: other members of the fleet (and the gateway) parse this exact
/// shape.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub HostName: String,
    pub Port: String,
    pub RangeStart: String,
    pub RangeEnd: String,
    pub Version: i64,
}

#[allow(non_snake_case)]
impl NodeInfo {
    pub fn new(host_name: String, port: String, range_start: String, range_end: String) -> Self {
        NodeInfo {
            HostName: host_name,
            Port: port,
            RangeStart: range_start,
            RangeEnd: range_end,
            Version: 0,
        }
    }

    /// Does this member own `query`, i.e. is `RangeStart <= query < RangeEnd`?
    pub fn owns(&self, query: &str) -> bool {
        self.RangeStart.as_str() <= query && query < self.RangeEnd.as_str()
    }

    /// `host:port`, as dialed by the gateway and the promotion controller.
    pub fn address(&self) -> String {
        format!("{}:{}", self.HostName, self.Port)
    }
}

//------------ Color -------------------------------------------------------------

/// Which half of the fleet a generation or ephemeral-sequence id belongs
/// to. Used to bipartition members so that only one half rebuilds per
/// promotion cycle while the other half keeps serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `color(g) = red if g is even else green`.
pub fn color(id: i64) -> Color {
    if id % 2 == 0 {
        Color::Red
    } else {
        Color::Green
    }
}
