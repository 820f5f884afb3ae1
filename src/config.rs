//! Process configuration read from the environment.
//!
//! `.env` is loaded by `main` before this runs. Leptos reads its own settings
//! (`site-addr`, `site-root`) from `[package.metadata.leptos]`; `PORT` only
//! overrides where the listener binds, for hosts that assign a port.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Listener port override; binds all interfaces when set.
    pub port: Option<u16>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_var(std::env::var("PORT").ok().as_deref())
    }

    fn from_port_var(raw: Option<&str>) -> Result<Self, ConfigError> {
        let port = match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(value) => Some(value.parse().map_err(|source| ConfigError::InvalidPort {
                value: value.to_owned(),
                source,
            })?),
            None => None,
        };
        Ok(Self { port })
    }

    /// Address to listen on: `0.0.0.0:PORT` when overridden, else Leptos' own.
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        match self.port {
            Some(port) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            None => site_addr,
        }
    }
}
