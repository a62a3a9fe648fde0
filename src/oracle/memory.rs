//! In-memory oracle
//!
//! Test double holding a set of request paths. Probes are counted so
//! callers can assert how many candidates were actually tried.

use super::FileOracle;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Oracle over an in-memory set of request paths.
#[derive(Debug, Default)]
pub struct MemoryOracle {
    paths: HashSet<String>,
    probes: AtomicUsize,
}

impl MemoryOracle {
    /// Create an oracle reporting existence for exactly the given paths.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            probes: AtomicUsize::new(0),
        }
    }

    /// Number of existence probes answered so far.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

impl FileOracle for MemoryOracle {
    fn file_exists(&self, path: &str) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.paths.contains(path)
    }
}
