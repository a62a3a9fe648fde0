//! Disk-backed oracle
//!
//! Answers existence probes against a web-root directory on the local
//! filesystem.

use super::FileOracle;
use std::path::PathBuf;

/// Oracle backed by a directory on disk.
///
/// Request paths are resolved relative to the root. Probes that escape the
/// root after canonicalization answer false, as do directories and anything
/// else that is not a regular file. An unreachable root also answers false;
/// a probe never fails the request it serves.
#[derive(Debug, Clone)]
pub struct DiskOracle {
    root: PathBuf,
}

impl DiskOracle {
    /// Create an oracle over the given web-root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileOracle for DiskOracle {
    fn file_exists(&self, path: &str) -> bool {
        let relative = path.trim_start_matches('/');
        let Ok(root) = self.root.canonicalize() else {
            return false;
        };
        // Canonicalization fails for missing files, which answers the
        // common no-match probe; the starts_with check blocks traversal.
        let Ok(candidate) = root.join(relative).canonicalize() else {
            return false;
        };
        candidate.starts_with(&root) && candidate.is_file()
    }
}
