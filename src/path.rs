//! A canonical, type-safe representation of the explorer navigation state.
//!
//! An `ExplorerPath` describes what the pipeline graph explorer is looking at:
//! which pipeline, optionally which historical snapshot of it, which ops the
//! selection query scopes the graph to, and the breadcrumb of op names the
//! user has drilled into. It is plain data; each navigation builds a fresh one.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{explorer_path_from_string, explorer_path_to_string};
use crate::diagnostics::{PathError, PathField};

/// Separates the pipeline root from its ops query in the serialized form.
pub const EXPLORER_PATH_SEPARATOR: char = '~';

/// Separates the pipeline name from the snapshot id.
pub const SNAPSHOT_MARKER: char = '@';

/// Prefixes the ops query when composites are exploded.
pub const EXPLODE_MARKER: char = '!';

/// Separates the root from each op name.
pub const SEGMENT_SEPARATOR: char = '/';

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExplorerPath {
    pub pipeline_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(default)]
    pub ops_query: String,
    #[serde(default)]
    pub explode_composites: bool,
    #[serde(default)]
    pub op_names: Vec<String>,
}

impl ExplorerPath {
    /// A path at the root of `pipeline_name`, with no snapshot or query.
    pub fn new(pipeline_name: impl Into<String>) -> Self {
        Self {
            pipeline_name: pipeline_name.into(),
            ..Self::default()
        }
    }

    pub fn with_snapshot(mut self, snapshot_id: impl Into<String>) -> Self {
        self.snapshot_id = Some(snapshot_id.into());
        self
    }

    pub fn with_query(mut self, ops_query: impl Into<String>) -> Self {
        self.ops_query = ops_query.into();
        self
    }

    pub fn exploded(mut self, explode_composites: bool) -> Self {
        self.explode_composites = explode_composites;
        self
    }

    pub fn with_op_names<I, S>(mut self, op_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.op_names = op_names.into_iter().map(Into::into).collect();
        self
    }

    /// The snapshot id, treating an empty id as absent.
    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot_id.as_deref().filter(|id| !id.is_empty())
    }

    /// True when no op has been drilled into. `[]` and `[""]` both mean the root.
    pub fn is_at_root(&self) -> bool {
        match self.op_names.as_slice() {
            [] => true,
            [only] => only.is_empty(),
            _ => false,
        }
    }

    /// Returns the form the decoder produces for this path.
    ///
    /// The serialized format cannot tell an empty snapshot from a missing one,
    /// nor an empty breadcrumb from a single empty op name, and it drops the
    /// explode flag when there is no query. Normalizing collapses those.
    pub fn normalized(&self) -> Self {
        Self {
            pipeline_name: self.pipeline_name.clone(),
            snapshot_id: self.snapshot().map(str::to_string),
            ops_query: self.ops_query.clone(),
            explode_composites: self.explode_composites && !self.ops_query.is_empty(),
            op_names: if self.op_names.is_empty() {
                vec![String::new()]
            } else {
                self.op_names.clone()
            },
        }
    }

    /// The same path with the snapshot qualifier removed.
    pub fn without_snapshot(&self) -> Self {
        Self {
            snapshot_id: None,
            ..self.clone()
        }
    }

    /// Checks the fields that are written unescaped.
    ///
    /// The pipeline name may not contain `@`, `~` or `/`, and the snapshot id
    /// may not contain `~` or `/`, since those delimit the serialized fields.
    pub fn validate(&self) -> Result<(), PathError> {
        check_reserved(
            PathField::PipelineName,
            &self.pipeline_name,
            &[SNAPSHOT_MARKER, EXPLORER_PATH_SEPARATOR, SEGMENT_SEPARATOR],
        )?;
        if let Some(snapshot_id) = self.snapshot() {
            check_reserved(
                PathField::SnapshotId,
                snapshot_id,
                &[EXPLORER_PATH_SEPARATOR, SEGMENT_SEPARATOR],
            )?;
        }
        Ok(())
    }

    /// Validates, then encodes.
    pub fn try_encode(&self) -> Result<String, PathError> {
        self.validate()?;
        Ok(explorer_path_to_string(self))
    }
}

fn check_reserved(field: PathField, value: &str, reserved: &[char]) -> Result<(), PathError> {
    match value.char_indices().find(|(_, c)| reserved.contains(c)) {
        Some((offset, character)) => Err(PathError::reserved_character(
            field, value, offset, character,
        )),
        None => Ok(()),
    }
}

impl fmt::Display for ExplorerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&explorer_path_to_string(self))
    }
}

impl FromStr for ExplorerPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(explorer_path_from_string(s))
    }
}
