//! Extensionless path resolution middleware for hyper request chains.
//!
//! Sits ahead of a static-file-serving stage and rewrites retrieval-style
//! requests like `GET /about` to `GET /about.html` when a file with one of
//! the configured extensions exists, so hosts can publish clean URLs without
//! duplicating files on disk. End users never observe the middleware
//! directly; `/about` is simply served the same way `/about.html` would be.
//!
//! The resolver is composed from three injected collaborators: the next
//! stage in the chain, a file existence oracle over the web root, and an
//! observability sink receiving one message per rewrite.
//!
//! ```no_run
//! use extless::{Config, DiskOracle, ExtensionResolver, WriterSink};
//! use http_body_util::Full;
//! use hyper::body::Bytes;
//! use hyper::{Request, Response};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load()?;
//! let resolver = ExtensionResolver::builder()
//!     .next(|_req: Request<()>| async {
//!         Response::new(Full::new(Bytes::from("served downstream")))
//!     })
//!     .oracle(DiskOracle::new("site"))
//!     .extensions(config.resolver.extensions.clone())
//!     .sink(WriterSink::stdout())
//!     .build()?;
//! # let _ = resolver;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod extensions;
pub mod middleware;
pub mod oracle;
pub mod sink;

// Re-export the public surface at the crate root
pub use config::Config;
pub use extensions::ExtensionList;
pub use middleware::{BuildError, ExtensionResolver, ExtensionResolverBuilder, NextHandler};
pub use oracle::{DiskOracle, FileOracle, MemoryOracle};
pub use sink::{InfoSink, WriterSink};
