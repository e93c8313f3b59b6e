//! # helloapp
//!
//! A minimal web application skeleton. One page. One health check.
//! Modern browsers only.
//!
//! ## What it serves
//!
//! | Route | Response |
//! |---|---|
//! | `GET /` | `200`, `text/html`, body `hello, world!` |
//! | `GET /up` | `200`, the green status page |
//! | anything else | `404` |
//!
//! Every request first passes the browser gate: the `User-Agent` header
//! must identify a browser release that ships WebP, Web Push, app
//! badging, import maps, CSS nesting, and the CSS `:has()` selector.
//! Clients that can't prove all six get `406 Not Acceptable` before any
//! handler runs; see [`middleware::BrowserPolicy`].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use helloapp::{App, Config, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().expect("invalid configuration");
//!     let app = App::new(&config);
//!     Server::bind(config.addr).serve(app).await.unwrap();
//! }
//! ```
//!
//! `PORT` selects the listen port (default 3000). `RUST_LOG` controls
//! log verbosity. That is the entire configuration surface.

mod app;
mod config;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod health;
pub mod middleware;

pub use app::App;
pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
