//! Resolver builder
//!
//! The continuation, oracle, and sink are required collaborators; `build`
//! refuses to produce a resolver without them, before it can see a single
//! request. The raw extension list is optional and is normalized here.

use crate::extensions::ExtensionList;
use crate::middleware::{ExtensionResolver, NextHandler};
use crate::oracle::FileOracle;
use crate::sink::InfoSink;
use std::fmt;
use std::sync::Arc;

/// Builder assembling an `ExtensionResolver` from its collaborators.
pub struct ExtensionResolverBuilder<B> {
    next: Option<Arc<dyn NextHandler<B>>>,
    oracle: Option<Arc<dyn FileOracle>>,
    extensions: Vec<String>,
    sink: Option<Arc<dyn InfoSink>>,
}

impl<B> ExtensionResolverBuilder<B> {
    pub fn new() -> Self {
        Self {
            next: None,
            oracle: None,
            extensions: Vec::new(),
            sink: None,
        }
    }

    /// Set the continuation invoked after resolution.
    pub fn next(mut self, next: impl NextHandler<B> + 'static) -> Self {
        self.next = Some(Arc::new(next));
        self
    }

    /// Set the file existence oracle backing the probe loop.
    pub fn oracle(mut self, oracle: impl FileOracle + 'static) -> Self {
        self.oracle = Some(Arc::new(oracle));
        self
    }

    /// Raw extension entries in probe order, with or without the leading
    /// `.`; normalization happens at build time. Leaving this unset makes
    /// the resolver a pure pass-through.
    pub fn extensions<I, S>(mut self, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = raw.into_iter().map(|e| e.as_ref().to_string()).collect();
        self
    }

    /// Set the sink receiving one informational message per rewrite.
    pub fn sink(mut self, sink: impl InfoSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Build the resolver, failing fast if a required collaborator is
    /// missing. This is the only error condition in the component.
    pub fn build(self) -> Result<ExtensionResolver<B>, BuildError> {
        let next = self.next.ok_or(BuildError::MissingNext)?;
        let oracle = self.oracle.ok_or(BuildError::MissingOracle)?;
        let sink = self.sink.ok_or(BuildError::MissingSink)?;
        Ok(ExtensionResolver::new(
            next,
            oracle,
            ExtensionList::new(&self.extensions),
            sink,
        ))
    }
}

impl<B> Default for ExtensionResolverBuilder<B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Construction-time failure: a required collaborator was not supplied.
///
/// Startup-fatal for the composing chain; none of these are recoverable at
/// request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// No continuation handler was supplied
    MissingNext,
    /// No file existence oracle was supplied
    MissingOracle,
    /// No observability sink was supplied
    MissingSink,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingNext => write!(f, "extension resolver requires a continuation handler"),
            Self::MissingOracle => write!(f, "extension resolver requires a file existence oracle"),
            Self::MissingSink => write!(f, "extension resolver requires an observability sink"),
        }
    }
}

impl std::error::Error for BuildError {}
