//! Explorer paths: the URL form of pipeline graph navigation state.
//!
//! ```
//! use explorer_path::{explorer_path_from_string, explorer_path_to_string, ExplorerPath};
//!
//! let path = ExplorerPath::new("my_job")
//!     .with_snapshot("abc123")
//!     .with_query("a+b")
//!     .exploded(true)
//!     .with_op_names(["x"]);
//! let encoded = explorer_path_to_string(&path);
//! assert_eq!(encoded, "my_job@abc123~!a%2Bb/x");
//! assert_eq!(explorer_path_from_string(&encoded), path);
//! ```

pub use crate::codec::{explorer_path_from_string, explorer_path_to_string};
pub use crate::diagnostics::{PathError, PathField};
pub use crate::links::{
    pipeline_snapshot_link, replace_pipeline_path, snapshot_label, strip_snapshot,
    strip_snapshot_from_location, SnapshotLink,
};
pub use crate::navigation::{MemoryNavigator, Navigator, SnapshotStripper};
pub use crate::path::{ExplorerPath, EXPLORER_PATH_SEPARATOR};

pub mod cli;
pub mod codec;
pub mod diagnostics;
pub mod links;
pub mod navigation;
pub mod path;
