//! Links derived from explorer paths.

use regex::{NoExpand, Regex};
use serde::Serialize;

use crate::codec::{explorer_path_from_string, explorer_path_to_string};
use crate::diagnostics::PathError;
use crate::path::ExplorerPath;

/// Route under which read-only snapshot views are served.
pub const SNAPSHOTS_ROUTE: &str = "/snapshots/";

/// Number of snapshot id characters shown in a link.
pub const SNAPSHOT_LABEL_LEN: usize = 8;

/// Link to the historical view of `pipeline_name` at `snapshot_id`.
pub fn pipeline_snapshot_link(pipeline_name: &str, snapshot_id: &str) -> String {
    let path = ExplorerPath::new(pipeline_name).with_snapshot(snapshot_id);
    format!("{SNAPSHOTS_ROUTE}{}", explorer_path_to_string(&path))
}

/// Short form of a snapshot id for display.
pub fn snapshot_label(snapshot_id: &str) -> &str {
    match snapshot_id.char_indices().nth(SNAPSHOT_LABEL_LEN) {
        Some((end, _)) => &snapshot_id[..end],
        None => snapshot_id,
    }
}

/// A snapshot link ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotLink {
    pub href: String,
    pub label: String,
}

impl SnapshotLink {
    pub fn new(pipeline_name: &str, snapshot_id: &str) -> Self {
        Self {
            href: pipeline_snapshot_link(pipeline_name, snapshot_id),
            label: snapshot_label(snapshot_id).to_string(),
        }
    }
}

/// Re-encodes `pipeline_path` without its snapshot qualifier.
///
/// Returns `None` when the path is not pinned to a snapshot.
pub fn strip_snapshot(pipeline_path: &str) -> Option<String> {
    let path = explorer_path_from_string(pipeline_path);
    path.snapshot()?;
    Some(explorer_path_to_string(&path.without_snapshot()))
}

/// Replaces the first `/<pipeline_path>` (plus an optional trailing `/`) in
/// `location` with `/<replacement>`. `pipeline_path` is matched literally.
pub fn replace_pipeline_path(
    location: &str,
    pipeline_path: &str,
    replacement: &str,
) -> Result<String, PathError> {
    let pattern = format!("/{}/?", regex::escape(pipeline_path));
    let re = Regex::new(&pattern)
        .map_err(|e| PathError::internal("failed to build location pattern", e))?;
    let replacement = format!("/{replacement}");
    Ok(re.replace(location, NoExpand(&replacement)).into_owned())
}

/// The location to navigate to once the snapshot is stripped from the
/// pipeline path it contains, or `None` if there is no snapshot to strip.
pub fn strip_snapshot_from_location(
    location: &str,
    pipeline_path: &str,
) -> Result<Option<String>, PathError> {
    match strip_snapshot(pipeline_path) {
        Some(stripped) => replace_pipeline_path(location, pipeline_path, &stripped).map(Some),
        None => Ok(None),
    }
}
