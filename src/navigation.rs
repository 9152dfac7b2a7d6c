//! The routing seam.
//!
//! Routing is owned by the host application. The explorer only needs to read
//! the current location and, when a pipeline path is pinned to a snapshot,
//! replace the location with the live equivalent.

use tracing::debug;

use crate::diagnostics::PathError;
use crate::links::strip_snapshot_from_location;

/// Read access to the current location and a replace-history effect.
pub trait Navigator {
    /// The current location pathname.
    fn pathname(&self) -> &str;

    /// Replaces the current history entry with `pathname`.
    fn replace(&mut self, pathname: String);
}

/// In-memory history, for tests and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNavigator {
    entries: Vec<String>,
    replacements: usize,
}

impl MemoryNavigator {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            entries: vec![pathname.into()],
            replacements: 0,
        }
    }

    /// Navigates forward, adding a history entry.
    pub fn push(&mut self, pathname: impl Into<String>) {
        self.entries.push(pathname.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// How many times `replace` has been called.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Navigator for MemoryNavigator {
    fn pathname(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or_default()
    }

    fn replace(&mut self, pathname: String) {
        self.replacements += 1;
        match self.entries.last_mut() {
            Some(current) => *current = pathname,
            None => self.entries.push(pathname),
        }
    }
}

/// Rewrites snapshot-pinned locations to the live pipeline.
///
/// Acts only when the pipeline path differs from the last one it was given,
/// so repeated syncs with the same path issue at most one replace.
#[derive(Debug, Default)]
pub struct SnapshotStripper {
    last_seen: Option<String>,
}

impl SnapshotStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a replace was issued.
    pub fn sync<N>(&mut self, navigator: &mut N, pipeline_path: &str) -> Result<bool, PathError>
    where
        N: Navigator + ?Sized,
    {
        if self.last_seen.as_deref() == Some(pipeline_path) {
            return Ok(false);
        }
        self.last_seen = Some(pipeline_path.to_string());

        let Some(location) = strip_snapshot_from_location(navigator.pathname(), pipeline_path)?
        else {
            return Ok(false);
        };
        debug!(from = navigator.pathname(), to = %location, "stripping snapshot from location");
        navigator.replace(location);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_navigator_replace_keeps_history_length() {
        let mut nav = MemoryNavigator::new("/a");
        nav.push("/b");
        nav.replace("/c".to_string());
        assert_eq!(nav.entries(), ["/a".to_string(), "/c".to_string()]);
        assert_eq!(nav.pathname(), "/c");
        assert_eq!(nav.replacements(), 1);
    }

    #[test]
    fn test_sync_replaces_once_per_path() {
        let mut nav = MemoryNavigator::new("/jobs/my_job@abc/op");
        let mut stripper = SnapshotStripper::new();
        assert!(stripper.sync(&mut nav, "my_job@abc/op").unwrap());
        assert_eq!(nav.pathname(), "/jobs/my_job/op");
        assert!(!stripper.sync(&mut nav, "my_job@abc/op").unwrap());
        assert_eq!(nav.replacements(), 1);
    }

    #[test]
    fn test_sync_without_snapshot_is_a_no_op() {
        let mut nav = MemoryNavigator::new("/jobs/my_job/op");
        let mut stripper = SnapshotStripper::new();
        assert!(!stripper.sync(&mut nav, "my_job/op").unwrap());
        assert_eq!(nav.replacements(), 0);
    }
}
