//! Startup configuration.
//!
//! Everything configurable is resolved once, before the listener binds,
//! into an immutable [`Config`]. Nothing reads the environment after
//! startup and nothing mutates the configuration at runtime.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use crate::error::Error;
use crate::middleware::BrowserPolicy;

const DEFAULT_PORT: u16 = 3000;

/// Immutable application configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Address the server binds. All interfaces, port from `PORT`.
    pub addr: SocketAddr,
    /// Capability policy the dispatch pipeline enforces.
    pub policy: BrowserPolicy,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// `PORT` selects the listen port; absent means 3000. A value that
    /// is not a port number is an error, not a fallback to the default.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_port_var(env::var("PORT").ok().as_deref())
    }

    fn from_port_var(port: Option<&str>) -> Result<Self, Error> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("PORT must be a port number, got `{raw}`")))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { addr: bind_addr(port), policy: BrowserPolicy::modern() })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { addr: bind_addr(DEFAULT_PORT), policy: BrowserPolicy::modern() }
    }
}

fn bind_addr(port: u16) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_port_uses_default() {
        let config = Config::from_port_var(None).unwrap();
        assert_eq!(config.addr.port(), 3000);
    }

    #[test]
    fn port_var_overrides_default() {
        let config = Config::from_port_var(Some("8080")).unwrap();
        assert_eq!(config.addr.port(), 8080);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let config = Config::from_port_var(Some(" 8080\n")).unwrap();
        assert_eq!(config.addr.port(), 8080);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(Config::from_port_var(Some("not-a-port")).is_err());
        assert!(Config::from_port_var(Some("")).is_err());
        assert!(Config::from_port_var(Some("70000")).is_err());
    }
}
