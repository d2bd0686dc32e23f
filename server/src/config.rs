//! Host configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` before this runs, so values there act as
//! defaults beneath the real environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

pub const HOST_VAR: &str = "NEWSDESK_HOST";
pub const PORT_VAR: &str = "PORT";
pub const SITE_ROOT_VAR: &str = "NEWSDESK_SITE_ROOT";
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site-root` (where `/pkg` is served from).
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `NEWSDESK_HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `NEWSDESK_SITE_ROOT`: default from Leptos metadata
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build config from an arbitrary variable source. Blank values count as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let read = |var: &str| lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = match read(HOST_VAR) {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidSetting { var: HOST_VAR, value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match read(PORT_VAR) {
            Some(raw) => raw.parse().map_err(|_| ServerError::InvalidSetting { var: PORT_VAR, value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_root = read(SITE_ROOT_VAR).map(PathBuf::from);

        Ok(Self { host, port, site_root })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
