//------------ Coordination layout ------------------------------------------------

/// The root znode every other path in this crate's documentation hangs
/// off of (`"/<root>"` in `SPEC_FULL.md` §6). Not configurable -- every
/// process in a cluster must agree on it, so it is a constant rather than
/// an environment variable.
pub const ROOT: &str = "/struba";

/// `/<root>/v_current` -- the generation pointer.
pub fn generation_path() -> String {
    format!("{ROOT}/v_current")
}

/// `/<root>/backend/nodes` -- directory of member registrations.
pub fn nodes_path() -> String {
    format!("{ROOT}/backend/nodes")
}

/// `/<root>/backend/nodes/` -- the prefix passed to
/// `create_ephemeral_sequential` when a shard registers itself.
pub fn nodes_path_prefix() -> String {
    format!("{ROOT}/backend/nodes/")
}
