//! Built-in health-check handler.
//!
//! Uptime monitors and load balancers ask one question: is the process
//! serving requests? `GET /up` answers it. If this handler runs at all,
//! initialization succeeded and the dispatch pipeline is live, so the
//! answer is the conventional green page with `200 OK`.
//!
//! The handler performs no fallible work and checks no dependencies. A
//! process that failed to boot never binds the socket, so a monitor sees
//! connection refusal rather than a misleading success.

use crate::{Request, Response};

const PAGE_UP: &str =
    "<!DOCTYPE html><html><body style=\"background-color: green\"></body></html>";

/// Handler for `GET /up`.
pub async fn show(_req: Request) -> Response {
    Response::html(PAGE_UP)
}
