//! Extension resolver
//!
//! Rewrites extensionless GET/HEAD request paths to the first configured
//! extension for which the oracle reports an existing file, then forwards
//! the request to the next stage unconditionally.

use crate::extensions::ExtensionList;
use crate::middleware::ExtensionResolverBuilder;
use crate::oracle::FileOracle;
use crate::sink::InfoSink;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::uri::PathAndQuery;
use hyper::{Method, Request, Response, Uri};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by a continuation.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Next processing stage in the request chain.
///
/// Implemented for any matching async closure. The resolver is agnostic to
/// what the continuation does with the request.
pub trait NextHandler<B>: Send + Sync {
    fn call(&self, req: Request<B>) -> BoxFuture<Response<Full<Bytes>>>;
}

impl<B, F, Fut> NextHandler<B> for F
where
    F: Fn(Request<B>) -> Fut + Send + Sync,
    Fut: Future<Output = Response<Full<Bytes>>> + Send + 'static,
{
    fn call(&self, req: Request<B>) -> BoxFuture<Response<Full<Bytes>>> {
        Box::pin(self(req))
    }
}

/// Middleware that resolves extensionless request paths against a file
/// store and rewrites them on the first match.
///
/// Holds no cross-request state: the extension list is read-only and the
/// oracle is an externally synchronized shared dependency, so one instance
/// serves any number of concurrent requests. Clones share the same
/// collaborators.
pub struct ExtensionResolver<B> {
    next: Arc<dyn NextHandler<B>>,
    oracle: Arc<dyn FileOracle>,
    extensions: ExtensionList,
    sink: Arc<dyn InfoSink>,
}

impl<B> Clone for ExtensionResolver<B> {
    fn clone(&self) -> Self {
        Self {
            next: Arc::clone(&self.next),
            oracle: Arc::clone(&self.oracle),
            extensions: self.extensions.clone(),
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<B> ExtensionResolver<B> {
    /// Start building a resolver; see `ExtensionResolverBuilder`.
    pub fn builder() -> ExtensionResolverBuilder<B> {
        ExtensionResolverBuilder::new()
    }

    pub(crate) fn new(
        next: Arc<dyn NextHandler<B>>,
        oracle: Arc<dyn FileOracle>,
        extensions: ExtensionList,
        sink: Arc<dyn InfoSink>,
    ) -> Self {
        Self {
            next,
            oracle,
            extensions,
            sink,
        }
    }

    /// Process one request: attempt resolution, then forward to the next
    /// stage and await its completion.
    ///
    /// At most one rewrite happens per request. Probing is sequential and
    /// in configured order; the first existing candidate wins and no
    /// further candidates are tried.
    pub async fn invoke(&self, mut req: Request<B>) -> Response<Full<Bytes>> {
        if is_get_or_head(req.method()) && !path_ends_in_slash(req.uri()) {
            for extension in self.extensions.iter() {
                let candidate = format!("{}{extension}", req.uri().path());
                if self.oracle.file_exists(&candidate) {
                    self.sink.info(&format!(
                        "Rewriting extensionless path {} to {candidate}",
                        req.uri().path()
                    ));
                    rewrite_path(&mut req, &candidate);
                    break;
                }
            }
        }
        self.next.call(req).await
    }
}

/// Retrieval-style methods are matched case-insensitively; hyper keeps
/// non-canonical tokens like `get` as extension methods rather than
/// folding them to `GET`.
fn is_get_or_head(method: &Method) -> bool {
    method.as_str().eq_ignore_ascii_case(Method::GET.as_str())
        || method.as_str().eq_ignore_ascii_case(Method::HEAD.as_str())
}

fn path_ends_in_slash(uri: &Uri) -> bool {
    uri.path().ends_with('/')
}

/// Replace the URI path, keeping the query string verbatim.
///
/// A candidate that fails to re-parse leaves the request untouched; that
/// cannot happen for a valid original path plus a normalized extension.
fn rewrite_path<B>(req: &mut Request<B>, new_path: &str) {
    let new_path_and_query = match req.uri().query() {
        Some(query) => format!("{new_path}?{query}"),
        None => new_path.to_string(),
    };
    let Ok(path_and_query) = new_path_and_query.parse::<PathAndQuery>() else {
        return;
    };
    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    if let Ok(uri) = Uri::from_parts(parts) {
        *req.uri_mut() = uri;
    }
}
