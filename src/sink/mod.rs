//! Observability sink module
//!
//! The resolver reports each successful rewrite through a sink injected at
//! construction and scoped to the middleware instance; there is no
//! process-global logger state. Emitting never fails the request.

mod writer;

pub use writer::WriterSink;

use std::sync::Arc;

/// Capability accepting one informational message per successful rewrite.
pub trait InfoSink: Send + Sync {
    fn info(&self, message: &str);
}

impl<F> InfoSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn info(&self, message: &str) {
        self(message);
    }
}

impl<T: InfoSink + ?Sized> InfoSink for Arc<T> {
    fn info(&self, message: &str) {
        (**self).info(message);
    }
}
