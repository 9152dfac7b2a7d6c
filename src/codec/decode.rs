//! Explorer path decoder.
//!
//! Decoding is permissive: any string yields some `ExplorerPath`. Missing
//! structure falls back to empty defaults so that hand-edited or truncated
//! URLs still open the explorer.

use tracing::{debug, trace};

use super::escape::decode_component;
use crate::path::{
    ExplorerPath, EXPLODE_MARKER, EXPLORER_PATH_SEPARATOR, SEGMENT_SEPARATOR, SNAPSHOT_MARKER,
};

/// The structural pieces of the root segment, still escaped.
#[derive(Debug, Default, PartialEq, Eq)]
struct RootParts<'a> {
    pipeline_name: &'a str,
    snapshot_id: Option<&'a str>,
    explode_composites: bool,
    ops_query: &'a str,
}

/// Parses a path produced by `explorer_path_to_string`.
///
/// Input with no `/` at all still yields a single empty op name, the same as
/// a root followed by a bare `/`.
pub fn explorer_path_from_string(path: &str) -> ExplorerPath {
    let mut segments = path.split(SEGMENT_SEPARATOR);
    // `split` always yields at least one item.
    let root = segments.next().unwrap_or_default();
    let mut op_names: Vec<String> = segments.map(decode_component).collect();
    if op_names.is_empty() {
        op_names.push(String::new());
    }

    let parts = scan_root(root).unwrap_or_else(|| {
        debug!(root, "explorer path root has no pipeline name, using defaults");
        RootParts::default()
    });

    let decoded = ExplorerPath {
        pipeline_name: parts.pipeline_name.to_string(),
        snapshot_id: parts.snapshot_id.map(str::to_string),
        ops_query: decode_component(parts.ops_query),
        explode_composites: parts.explode_composites,
        op_names,
    };
    trace!(input = path, ?decoded, "decoded explorer path");
    decoded
}

/// Splits `name[@snapshot][~[!]query]`.
///
/// Returns `None` when the root does not start with a pipeline name, i.e. it
/// is empty or begins with `@` or `~`.
fn scan_root(root: &str) -> Option<RootParts<'_>> {
    let name_end = root
        .find(&[SNAPSHOT_MARKER, EXPLORER_PATH_SEPARATOR][..])
        .unwrap_or(root.len());
    if name_end == 0 {
        return None;
    }
    let mut parts = RootParts {
        pipeline_name: &root[..name_end],
        ..RootParts::default()
    };
    let mut rest = &root[name_end..];

    if let Some(after_marker) = rest.strip_prefix(SNAPSHOT_MARKER) {
        let snapshot_end = after_marker
            .find(EXPLORER_PATH_SEPARATOR)
            .unwrap_or(after_marker.len());
        let snapshot_id = &after_marker[..snapshot_end];
        if !snapshot_id.is_empty() {
            parts.snapshot_id = Some(snapshot_id);
        }
        rest = &after_marker[snapshot_end..];
    }

    if let Some(query) = rest.strip_prefix(EXPLORER_PATH_SEPARATOR) {
        match query.strip_prefix(EXPLODE_MARKER) {
            Some(query) => {
                parts.explode_composites = true;
                parts.ops_query = query;
            }
            None => parts.ops_query = query,
        }
    }

    Some(parts)
}
