//! Static request routing.
//!
//! One radix tree per HTTP method, built once at startup and read by
//! every request. This application registers exactly two routes, both
//! exact paths; anything else is the dispatch pipeline's 404.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application route table.
///
/// Each registration call returns `self` so routes chain naturally:
///
/// ```rust,no_run
/// # use helloapp::{Request, Response, Router, health};
/// # async fn hello(_: Request) -> Response { Response::html("hello, world!") }
/// let routes = Router::new()
///     .get("/up", health::show)
///     .get("/", hello);
/// ```
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for `GET` requests to `path`.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    /// Register a handler for a method + path pair.
    ///
    /// # Panics
    ///
    /// Panics on an invalid or duplicate path. Route registration runs
    /// once at startup; a bad route table is a programming error, not a
    /// runtime condition.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, method: &Method, path: &str) -> Option<BoxedHandler> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        Some(Arc::clone(matched.value))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Request;
    use crate::response::Response;
    use http::{HeaderMap, StatusCode};

    async fn ok(_req: Request) -> Response {
        Response::text("ok")
    }

    fn get(path: &str) -> Request {
        Request::new(Method::GET, path.to_owned(), HeaderMap::new())
    }

    #[test]
    fn lookup_finds_registered_route() {
        let router = Router::new().get("/", ok);
        assert!(router.lookup(&Method::GET, "/").is_some());
    }

    #[test]
    fn lookup_misses_unknown_path() {
        let router = Router::new().get("/", ok);
        assert!(router.lookup(&Method::GET, "/nonexistent").is_none());
    }

    #[test]
    fn lookup_misses_wrong_method() {
        let router = Router::new().get("/", ok);
        assert!(router.lookup(&Method::POST, "/").is_none());
    }

    #[tokio::test]
    async fn matched_handler_produces_its_response() {
        let router = Router::new().get("/", ok);
        let handler = router.lookup(&Method::GET, "/").unwrap();
        let res = handler.call(get("/")).await;
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.body(), b"ok");
    }
}
