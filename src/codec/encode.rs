//! Explorer path encoder.

use tracing::trace;

use super::escape::{encode_component, encode_query};
use crate::path::{
    ExplorerPath, EXPLODE_MARKER, EXPLORER_PATH_SEPARATOR, SEGMENT_SEPARATOR, SNAPSHOT_MARKER,
};

/// Serializes `path` into a single URL path segment.
///
/// ```text
/// path    := root "/" opNames
/// root    := pipelineName ["@" snapshotId] ["~" ["!"] escape(opsQuery)]
/// opNames := escape(opNames[0]) "/" escape(opNames[1]) ...
/// ```
///
/// The result always contains the `/` after the root, even with no op names.
/// The pipeline name and snapshot id are written as-is; see
/// `ExplorerPath::validate` for the characters they must avoid.
pub fn explorer_path_to_string(path: &ExplorerPath) -> String {
    let mut out = String::with_capacity(path.pipeline_name.len() + 16);
    out.push_str(&path.pipeline_name);

    if let Some(snapshot_id) = path.snapshot() {
        out.push(SNAPSHOT_MARKER);
        out.push_str(snapshot_id);
    }

    if !path.ops_query.is_empty() {
        out.push(EXPLORER_PATH_SEPARATOR);
        if path.explode_composites {
            out.push(EXPLODE_MARKER);
        }
        out.push_str(&encode_query(&path.ops_query));
    }

    out.push(SEGMENT_SEPARATOR);
    let op_names: Vec<String> = path.op_names.iter().map(|name| encode_component(name)).collect();
    out.push_str(&op_names.join("/"));

    trace!(encoded = %out, "encoded explorer path");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_only() {
        assert_eq!(explorer_path_to_string(&ExplorerPath::new("my_job")), "my_job/");
    }

    #[test]
    fn test_all_fields() {
        let path = ExplorerPath::new("my_job")
            .with_snapshot("abc123")
            .with_query("a+b")
            .exploded(true)
            .with_op_names(["x"]);
        assert_eq!(explorer_path_to_string(&path), "my_job@abc123~!a%2Bb/x");
    }

    #[test]
    fn test_empty_snapshot_is_omitted() {
        let path = ExplorerPath::new("my_job").with_snapshot("");
        assert_eq!(explorer_path_to_string(&path), "my_job/");
    }

    #[test]
    fn test_explode_needs_a_query() {
        let plain = ExplorerPath::new("my_job").with_op_names(["a"]);
        let exploded = plain.clone().exploded(true);
        assert_eq!(explorer_path_to_string(&plain), explorer_path_to_string(&exploded));
    }

    #[test]
    fn test_op_names_are_escaped_one_by_one() {
        let path = ExplorerPath::new("my_job").with_op_names(["a/b", "c~d", "e f"]);
        assert_eq!(explorer_path_to_string(&path), "my_job/a%2Fb/c~d/e%20f");
    }

    #[test]
    fn test_query_delimiters_are_escaped() {
        let path = ExplorerPath::new("my_job").with_query("*op/x@y");
        assert_eq!(explorer_path_to_string(&path), "my_job~*op%2Fx%40y/");
    }
}
