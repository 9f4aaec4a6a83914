//------------ Promotion cycle -------------------------------------------------------

use crate::client::BuildClient;
use crate::error::ControllerError;
use struba_store::color;
use struba_zk::CoordinationClient;

/// Runs one promotion cycle per `SPEC_FULL.md` §4.6: bootstrap the
/// generation pointer, dispatch `BuildTrie` serially to every
/// staging-color member, and flip the pointer only if every dispatch
/// succeeded. Returns the new generation on success.
///
/// Dispatch is serial, matching the explicit permission in §4.6 that
/// serial is sufficient since build work is I/O-bound on the analytics
/// store -- an implementation is free to parallelize as long as error
/// aggregation is preserved, but this one doesn't need to.
pub async fn run(
    zk: &dyn CoordinationClient,
    build_client: &dyn BuildClient,
) -> Result<i64, ControllerError> {
    struba_zk::ensure_path(zk, struba_zk::ROOT)?;
    struba_zk::create_if_absent(zk, &struba_zk::generation_path())?;

    let (current, version) = struba_zk::read_generation(zk, &struba_zk::generation_path())?;
    let staging = current + 1;
    let staging_color = color(staging);

    let members = struba_zk::list_members(zk, &struba_zk::nodes_path())?;
    let mut dispatched = 0usize;
    let mut failures = Vec::new();
    for member in &members {
        let id = struba_zk::id_from_path(&member.path)?;
        if color(id) != staging_color {
            continue;
        }
        dispatched += 1;
        if let Err(message) = build_client.build_trie(&member.info.address(), staging).await {
            failures.push((member.info.address(), message));
        }
    }

    if !failures.is_empty() {
        return Err(ControllerError::Build {
            dispatched,
            failures,
        });
    }

    struba_zk::write_generation(zk, &struba_zk::generation_path(), staging, version)?;
    Ok(staging)
}
