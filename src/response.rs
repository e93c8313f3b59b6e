//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.

use bytes::Bytes;
use http::{HeaderValue, StatusCode, header};
use http_body_util::Full;

/// An outgoing HTTP response.
///
/// ```rust
/// use helloapp::Response;
/// use http::StatusCode;
///
/// Response::html("hello, world!");
/// Response::text("ok");
/// Response::status(StatusCode::NOT_FOUND);
/// ```
pub struct Response {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
}

impl Response {
    /// `200 OK` — `text/html; charset=utf-8`.
    pub fn html(body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some("text/html; charset=utf-8"),
            body: body.into(),
        }
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: Some("text/plain; charset=utf-8"),
            body: body.into(),
        }
    }

    /// Response with the given status and no body.
    pub fn status(status: StatusCode) -> Self {
        Self { status, content_type: None, body: Bytes::new() }
    }

    /// Replaces the status, keeping content type and body.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Converts into the `http` response hyper writes to the wire.
    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(self.body));
        *res.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            res.headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        res
    }
}

/// Conversion into an HTTP [`Response`].
///
/// Handlers may return any type implementing this trait; the dispatch
/// pipeline converts the value once, after the handler completes.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response {
        Response::text(self)
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        Response::text(self)
    }
}

/// Return a bare status from a handler: `return StatusCode::NOT_FOUND`.
impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        Response::status(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_sets_status_and_content_type() {
        let res = Response::html("hello, world!");
        assert_eq!(res.status_code(), StatusCode::OK);
        assert_eq!(res.content_type(), Some("text/html; charset=utf-8"));
        assert_eq!(res.body(), b"hello, world!");
    }

    #[test]
    fn status_only_has_empty_body() {
        let res = Response::status(StatusCode::NOT_FOUND);
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(res.content_type(), None);
        assert!(res.body().is_empty());
    }

    #[test]
    fn into_http_carries_everything_over() {
        let res = Response::html("x").with_status(StatusCode::NOT_ACCEPTABLE).into_http();
        assert_eq!(res.status(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
    }
}
