//! File existence oracle module
//!
//! Abstracts "does a regular file exist at this request path" behind a
//! one-method trait, so the resolver can be exercised against real disk
//! storage or an in-memory set of paths without touching the filesystem.

mod disk;
mod memory;

pub use disk::DiskOracle;
pub use memory::MemoryOracle;

use std::sync::Arc;

/// File existence query backing the resolver's probing.
///
/// Implementations must be safe for concurrent read access; the resolver
/// never mutates the backing store. No atomicity is assumed between an
/// existence probe and any later open performed by a downstream stage: a
/// file present at probe time may vanish before it is served, and that race
/// belongs to the serving component.
pub trait FileOracle: Send + Sync {
    /// Report whether a regular file exists at the given request path.
    fn file_exists(&self, path: &str) -> bool;
}

impl<T: FileOracle + ?Sized> FileOracle for Arc<T> {
    fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path)
    }
}
