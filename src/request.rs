//! Incoming HTTP request type.

use http::{HeaderMap, Method, header};

/// An incoming HTTP request.
///
/// Carries exactly what the dispatch pipeline consumes: method, path,
/// and headers. No route in this application reads a request body, so
/// none is buffered.
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
}

impl Request {
    pub(crate) fn new(method: Method, path: String, headers: HeaderMap) -> Self {
        Self { method, path, headers }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Case-insensitive header lookup. Returns `None` for absent headers
    /// and for values that are not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The client identity string, as declared by the client itself.
    pub fn user_agent(&self) -> Option<&str> {
        self.header(header::USER_AGENT.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn request_with(name: &str, value: &[u8]) -> Request {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_bytes(value).unwrap(),
        );
        Request::new(Method::GET, "/".to_owned(), headers)
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = request_with("user-agent", b"curl/8.5.0");
        assert_eq!(req.header("User-Agent"), Some("curl/8.5.0"));
        assert_eq!(req.user_agent(), Some("curl/8.5.0"));
    }

    #[test]
    fn missing_header_is_none() {
        let req = Request::new(Method::GET, "/".to_owned(), HeaderMap::new());
        assert_eq!(req.user_agent(), None);
    }

    #[test]
    fn non_utf8_header_value_is_none() {
        let req = request_with("user-agent", b"\xff\xfe");
        assert_eq!(req.user_agent(), None);
    }
}
