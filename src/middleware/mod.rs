//! Pipeline-level request filters.
//!
//! Middleware runs before routing and may short-circuit the pipeline
//! with a response of its own. It is the place for cross-cutting
//! concerns that apply to every route. Here that is the browser
//! capability gate.

mod browser;

pub use browser::BrowserPolicy;
pub(crate) use browser::unsupported_browser;
