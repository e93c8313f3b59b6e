//! Binary entry point.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl -i http://localhost:3000/            # 406, curl is not a browser
//!   curl -i -A "$UA" http://localhost:3000/   # 200 with a modern browser UA
//!   curl -i -A "$UA" http://localhost:3000/up

use helloapp::{App, Config, Server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("invalid configuration");
    let app = App::new(&config);

    Server::bind(config.addr)
        .serve(app)
        .await
        .expect("server error");
}
