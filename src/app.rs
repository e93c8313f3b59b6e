//! Application wiring and the per-request dispatch pipeline.

use http::StatusCode;

use crate::config::Config;
use crate::health;
use crate::middleware::{self, BrowserPolicy};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// The assembled application: browser policy plus route table.
///
/// Built once at startup and shared by every connection. Holds no
/// mutable state, so requests need no coordination.
pub struct App {
    policy: BrowserPolicy,
    router: Router,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let router = Router::new()
            .get("/up", health::show)
            .get("/", hello);
        Self { policy: config.policy, router }
    }

    /// The dispatch pipeline: gate, then route, then handler.
    ///
    /// The browser gate runs before route lookup and applies to every
    /// path, `/up` included. All failure modes resolve to a status code
    /// here; callers never see an error.
    pub async fn handle(&self, req: Request) -> Response {
        if !self.policy.permits(req.user_agent()) {
            return middleware::unsupported_browser();
        }
        match self.router.lookup(req.method(), req.path()) {
            Some(handler) => handler.call(req).await,
            None => Response::status(StatusCode::NOT_FOUND),
        }
    }
}

/// Handler for `GET /`, the homepage.
async fn hello(_req: Request) -> Response {
    Response::html("hello, world!")
}
