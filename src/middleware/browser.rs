//! Browser capability gate.
//!
//! The application assumes a handful of web-platform features and
//! refuses to serve browsers that lack any of them. The check is a pure
//! function of the `User-Agent` string: parse it into a (family,
//! version) pair, then require the version to meet a static minimum for
//! every capability in the policy. No handler runs for a rejected
//! client; the pipeline answers `406 Not Acceptable` with a fixed
//! explanation page.
//!
//! Clients that do not identify as one of the recognized browser
//! families (scripted agents, ancient browsers) fail the gate. They
//! cannot prove support, so they are not served.

use http::StatusCode;

use crate::response::Response;

/// The set of capabilities a client must support.
///
/// [`BrowserPolicy::modern`] requires all six. `permits` is
/// deterministic and allocation-free: same input string, same verdict.
#[derive(Clone, Copy, Debug)]
pub struct BrowserPolicy {
    required: &'static [Capability],
}

impl BrowserPolicy {
    /// The policy this application ships: WebP images, Web Push, app
    /// badging, import maps, CSS nesting, and the CSS `:has()` selector.
    pub fn modern() -> Self {
        Self { required: Capability::ALL }
    }

    /// Does the declared client identity satisfy every required
    /// capability?
    pub fn permits(&self, user_agent: Option<&str>) -> bool {
        let Some(ua) = user_agent else { return false };
        let Some((family, version)) = parse_user_agent(ua) else {
            return false;
        };
        self.required
            .iter()
            .all(|cap| version >= cap.minimum(family))
    }
}

/// The fixed rejection response for clients that fail the gate.
pub(crate) fn unsupported_browser() -> Response {
    Response::html(UNSUPPORTED_BROWSER_PAGE).with_status(StatusCode::NOT_ACCEPTABLE)
}

const UNSUPPORTED_BROWSER_PAGE: &str = "\
<!DOCTYPE html>\n\
<html>\n\
<head>\n\
  <title>Your browser is not supported</title>\n\
  <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
</head>\n\
<body>\n\
  <h1>Your browser is not supported.</h1>\n\
  <p>Please upgrade your browser to continue.</p>\n\
</body>\n\
</html>\n";

// ── Browser identity ──────────────────────────────────────────────────────────

/// A recognized browser product line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Family {
    Chrome,
    Edge,
    Firefox,
    Opera,
    Safari,
}

/// A browser release number. Ordering is (major, minor), so 16.4 sorts
/// below 17.2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Version {
    major: u16,
    minor: u16,
}

impl Version {
    const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

/// Extracts (family, version) from a `User-Agent` string.
///
/// Chromium derivatives embed a `Chrome/` token in their strings, so
/// Edge (`Edg/`) and Opera (`OPR/`) must be checked first. Safari
/// reports its real release in the `Version/` token; the `Safari/`
/// token carries the WebKit build number, which is useless here.
fn parse_user_agent(ua: &str) -> Option<(Family, Version)> {
    if let Some(v) = product_version(ua, "Edg/") {
        return Some((Family::Edge, v));
    }
    if let Some(v) = product_version(ua, "OPR/") {
        return Some((Family::Opera, v));
    }
    if let Some(v) = product_version(ua, "Firefox/") {
        return Some((Family::Firefox, v));
    }
    if let Some(v) = product_version(ua, "Chrome/") {
        return Some((Family::Chrome, v));
    }
    if ua.contains("Safari/") {
        if let Some(v) = product_version(ua, "Version/") {
            return Some((Family::Safari, v));
        }
    }
    None
}

/// Parses the version following `token`, e.g. `"Chrome/120.0.0.0"` with
/// token `"Chrome/"` yields 120.0. A missing minor component reads as 0.
fn product_version(ua: &str, token: &str) -> Option<Version> {
    let rest = &ua[ua.find(token)? + token.len()..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(rest.len());
    let mut parts = rest[..end].split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().and_then(|m| m.parse().ok()).unwrap_or(0);
    Some(Version::new(major, minor))
}

// ── Capability table ──────────────────────────────────────────────────────────

/// A web-platform feature the application depends on.
#[derive(Clone, Copy, Debug)]
enum Capability {
    WebpImages,
    WebPush,
    AppBadging,
    ImportMaps,
    CssNesting,
    CssHasSelector,
}

impl Capability {
    const ALL: &'static [Capability] = &[
        Capability::WebpImages,
        Capability::WebPush,
        Capability::AppBadging,
        Capability::ImportMaps,
        Capability::CssNesting,
        Capability::CssHasSelector,
    ];

    /// Lowest release of each family that satisfies the capability.
    ///
    /// The effective cut line per family is the maximum across the
    /// required set: Chrome 120, Edge 120, Firefox 121, Opera 106,
    /// Safari 17.2.
    const fn minimum(self, family: Family) -> Version {
        use Family::{Chrome, Edge, Firefox, Opera, Safari};
        match (self, family) {
            (Self::WebpImages, Chrome) => Version::new(32, 0),
            (Self::WebpImages, Edge) => Version::new(18, 0),
            (Self::WebpImages, Firefox) => Version::new(65, 0),
            (Self::WebpImages, Opera) => Version::new(19, 0),
            (Self::WebpImages, Safari) => Version::new(16, 0),

            (Self::WebPush, Chrome) => Version::new(50, 0),
            (Self::WebPush, Edge) => Version::new(17, 0),
            (Self::WebPush, Firefox) => Version::new(44, 0),
            (Self::WebPush, Opera) => Version::new(37, 0),
            (Self::WebPush, Safari) => Version::new(16, 4),

            (Self::AppBadging, Chrome) => Version::new(81, 0),
            (Self::AppBadging, Edge) => Version::new(84, 0),
            (Self::AppBadging, Firefox) => Version::new(121, 0),
            (Self::AppBadging, Opera) => Version::new(68, 0),
            (Self::AppBadging, Safari) => Version::new(17, 0),

            (Self::ImportMaps, Chrome) => Version::new(89, 0),
            (Self::ImportMaps, Edge) => Version::new(89, 0),
            (Self::ImportMaps, Firefox) => Version::new(108, 0),
            (Self::ImportMaps, Opera) => Version::new(76, 0),
            (Self::ImportMaps, Safari) => Version::new(16, 4),

            (Self::CssNesting, Chrome) => Version::new(120, 0),
            (Self::CssNesting, Edge) => Version::new(120, 0),
            (Self::CssNesting, Firefox) => Version::new(117, 0),
            (Self::CssNesting, Opera) => Version::new(106, 0),
            (Self::CssNesting, Safari) => Version::new(17, 2),

            (Self::CssHasSelector, Chrome) => Version::new(105, 0),
            (Self::CssHasSelector, Edge) => Version::new(105, 0),
            (Self::CssHasSelector, Firefox) => Version::new(121, 0),
            (Self::CssHasSelector, Opera) => Version::new(91, 0),
            (Self::CssHasSelector, Safari) => Version::new(15, 4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHROME_120: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
    const CHROME_119: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";
    const EDGE_120: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.61";
    const OPERA_106: &str = "Mozilla/5.0 (X11; Linux x86_64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36 OPR/106.0.0.0";
    const FIREFOX_121: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
    const FIREFOX_120: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";
    const SAFARI_17_2: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Safari/605.1.15";
    const SAFARI_17_1: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";

    #[test]
    fn parses_each_family() {
        assert_eq!(
            parse_user_agent(CHROME_120),
            Some((Family::Chrome, Version::new(120, 0)))
        );
        assert_eq!(
            parse_user_agent(EDGE_120),
            Some((Family::Edge, Version::new(120, 0)))
        );
        assert_eq!(
            parse_user_agent(OPERA_106),
            Some((Family::Opera, Version::new(106, 0)))
        );
        assert_eq!(
            parse_user_agent(FIREFOX_121),
            Some((Family::Firefox, Version::new(121, 0)))
        );
        assert_eq!(
            parse_user_agent(SAFARI_17_2),
            Some((Family::Safari, Version::new(17, 2)))
        );
    }

    #[test]
    fn derivatives_win_over_embedded_chrome_token() {
        // Edge and Opera both carry Chrome/ in their strings.
        assert!(matches!(parse_user_agent(EDGE_120), Some((Family::Edge, _))));
        assert!(matches!(parse_user_agent(OPERA_106), Some((Family::Opera, _))));
    }

    #[test]
    fn safari_version_comes_from_version_token() {
        // Safari/605.1.15 is the WebKit build, not the browser release.
        let (_, v) = parse_user_agent(SAFARI_17_2).unwrap();
        assert_eq!(v, Version::new(17, 2));
    }

    #[test]
    fn rejects_unrecognized_strings() {
        assert_eq!(parse_user_agent("curl/8.5.0"), None);
        assert_eq!(parse_user_agent("Wget/1.21.4"), None);
        assert_eq!(parse_user_agent(""), None);
        // WebKit build token alone, no browser release.
        assert_eq!(parse_user_agent("AppleWebKit/605.1.15 Safari/605.1.15"), None);
    }

    #[test]
    fn version_ordering_is_major_then_minor() {
        assert!(Version::new(17, 2) > Version::new(17, 1));
        assert!(Version::new(17, 0) > Version::new(16, 4));
        assert!(Version::new(16, 4) < Version::new(17, 2));
    }

    #[test]
    fn modern_releases_pass() {
        let policy = BrowserPolicy::modern();
        assert!(policy.permits(Some(CHROME_120)));
        assert!(policy.permits(Some(EDGE_120)));
        assert!(policy.permits(Some(OPERA_106)));
        assert!(policy.permits(Some(FIREFOX_121)));
        assert!(policy.permits(Some(SAFARI_17_2)));
    }

    #[test]
    fn releases_below_the_cut_line_fail() {
        let policy = BrowserPolicy::modern();
        // Chrome 119 and Safari 17.1 predate relaxed CSS nesting.
        assert!(!policy.permits(Some(CHROME_119)));
        assert!(!policy.permits(Some(SAFARI_17_1)));
        // Firefox 120 predates :has().
        assert!(!policy.permits(Some(FIREFOX_120)));
    }

    #[test]
    fn missing_or_foreign_identity_fails() {
        let policy = BrowserPolicy::modern();
        assert!(!policy.permits(None));
        assert!(!policy.permits(Some("")));
        assert!(!policy.permits(Some("curl/8.5.0")));
    }

    #[test]
    fn rejection_response_is_406_html() {
        let res = unsupported_browser();
        assert_eq!(res.status_code(), http::StatusCode::NOT_ACCEPTABLE);
        assert_eq!(res.content_type(), Some("text/html; charset=utf-8"));
        assert!(!res.body().is_empty());
    }
}
